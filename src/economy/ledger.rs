//! Per-item owned quantity and upgrade count.

/// Owned amount and upgrade count of one item.
///
/// Created empty and only changed through the crate's item mutators, so
/// `amount` never leaves `0..=max` and `upgrade_amount` never decreases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    amount: u32,
    upgrade_amount: u32,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    pub fn upgrade_amount(&self) -> u32 {
        self.upgrade_amount
    }

    /// Whether `count` more units fit under `max` (`None` = unbounded).
    pub fn can_add(&self, count: u32, max: Option<u32>) -> bool {
        match (self.amount.checked_add(count), max) {
            (Some(total), Some(max)) => total <= max,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Whether `count` units can be taken away without going below zero.
    pub fn can_remove(&self, count: u32) -> bool {
        count <= self.amount
    }

    /// Add `count` units. Refuses (returns false) when the result would
    /// exceed `max`.
    pub(crate) fn add(&mut self, count: u32, max: Option<u32>) -> bool {
        if count == 0 || !self.can_add(count, max) {
            return false;
        }
        self.amount += count;
        true
    }

    /// Remove `count` units, clamping at zero. Returns whether the amount
    /// changed.
    pub(crate) fn remove(&mut self, count: u32) -> bool {
        let before = self.amount;
        self.amount = self.amount.saturating_sub(count);
        self.amount != before
    }

    /// Add `count` upgrades (saturating).
    pub(crate) fn add_upgrades(&mut self, count: u32) -> bool {
        let before = self.upgrade_amount;
        self.upgrade_amount = self.upgrade_amount.saturating_add(count);
        self.upgrade_amount != before
    }
}
