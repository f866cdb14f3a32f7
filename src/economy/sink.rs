//! Notification sinks: the containers downstream consumers read to see the
//! current state of unlocked items.
//!
//! Sinks hold snapshots. Every item mutation republishes the item so the
//! stored copy is never stale. Sinks are plain values owned by the game
//! state, so separate sessions never share one.

use serde::{Deserialize, Serialize};

use super::item::Item;

/// When an item mutator republishes to its sink.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotifyPolicy {
    /// Publish only when the ledger actually changed.
    #[default]
    OnChange,
    /// Publish on every mutator call, including rejected ones.
    Always,
}

impl NotifyPolicy {
    pub fn should_publish(self, changed: bool) -> bool {
        changed || self == NotifyPolicy::Always
    }
}

/// Anything stored in a keyed sink.
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Receiver of item snapshots after ledger mutations.
pub trait ItemSink {
    /// Replace the stored snapshot of `item`.
    fn update(&mut self, item: &Item);

    fn policy(&self) -> NotifyPolicy {
        NotifyPolicy::OnChange
    }
}

/// Ordered, name-keyed collection of unlocked items.
#[derive(Clone, Debug)]
pub struct UnlockedItems<T> {
    entries: Vec<T>,
    policy: NotifyPolicy,
    /// Bumped on every accepted add/update/reset.
    revision: u64,
}

impl<T: Keyed + Clone> UnlockedItems<T> {
    pub fn new(policy: NotifyPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
            revision: 0,
        }
    }

    /// Append a snapshot unless an entry with the same name exists.
    pub fn add(&mut self, item: &T) -> bool {
        if self.contains(item.key()) {
            return false;
        }
        self.entries.push(item.clone());
        self.revision += 1;
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.key() == name)
    }

    /// Replace the entry with the same name. Unknown names are ignored.
    pub fn replace(&mut self, item: &T) -> bool {
        match self.entries.iter_mut().find(|e| e.key() == item.key()) {
            Some(slot) => {
                *slot = item.clone();
                self.revision += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries.iter().find(|e| e.key() == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn policy(&self) -> NotifyPolicy {
        self.policy
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Clear every entry. Used when a new session starts.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.revision += 1;
    }
}

impl ItemSink for UnlockedItems<Item> {
    fn update(&mut self, item: &Item) {
        self.replace(item);
    }

    fn policy(&self) -> NotifyPolicy {
        self.policy
    }
}

/// Single-item sink for the clicker: there is exactly one, always present.
#[derive(Clone, Debug)]
pub struct ClickerSlot {
    current: Item,
    pristine: Item,
    policy: NotifyPolicy,
    revision: u64,
}

impl ClickerSlot {
    pub fn new(clicker: &Item, policy: NotifyPolicy) -> Self {
        Self {
            current: clicker.clone(),
            pristine: clicker.clone(),
            policy,
            revision: 0,
        }
    }

    pub fn get(&self) -> &Item {
        &self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Go back to the clicker as it was when the slot was created.
    pub fn reset(&mut self) {
        self.current = self.pristine.clone();
        self.revision += 1;
    }
}

impl ItemSink for ClickerSlot {
    fn update(&mut self, item: &Item) {
        self.current = item.clone();
        self.revision += 1;
    }

    fn policy(&self) -> NotifyPolicy {
        self.policy
    }
}
