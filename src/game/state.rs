//! Emoji Clicker game state definitions.

use tracing::warn;

use crate::config::{EconomySettings, GameConfig};
use crate::economy::farm::FarmItem;
use crate::economy::item::Item;
use crate::economy::sink::{ClickerSlot, ItemSink, UnlockedItems};
use crate::economy::unlocks::UnlockSchedule;

use super::actions::Target;

/// Resource counters.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Wallet {
    /// Spendable currency.
    pub emojis: f64,
    /// All-time earnings; drives level progression.
    pub score: f64,
    /// Farm output.
    pub crops: f64,
}

impl Wallet {
    /// Credit earnings to both the balance and the score.
    pub fn earn(&mut self, amount: f64) {
        self.emojis += amount;
        self.score += amount;
    }

    /// Deduct `cost` if affordable. Non-finite costs are never affordable.
    pub fn spend(&mut self, cost: f64) -> bool {
        if !cost.is_finite() || cost < 0.0 || self.emojis < cost {
            return false;
        }
        self.emojis -= cost;
        true
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Passive items, the clicker, and the sinks publishing their snapshots.
#[derive(Clone, Debug)]
pub struct Shop {
    /// Every catalogue item, locked or not.
    pub items: Vec<Item>,
    pub clicker: Item,
    pub unlocked: UnlockedItems<Item>,
    pub clicker_slot: ClickerSlot,
}

impl Shop {
    pub fn new(config: &GameConfig) -> Self {
        let items: Vec<Item> = config.items.iter().cloned().map(Item::new).collect();
        let clicker = Item::new(config.clicker.clone());
        let clicker_slot = ClickerSlot::new(&clicker, config.settings.notify);
        Self {
            items,
            clicker,
            unlocked: UnlockedItems::new(config.settings.notify),
            clicker_slot,
        }
    }

    pub fn item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.name() == name)
    }

    /// The live item behind `target` and the sink it publishes to. Locked
    /// passive items resolve to nothing.
    pub fn resolve(&mut self, target: &Target) -> Option<(&mut Item, &mut dyn ItemSink)> {
        match target {
            Target::Clicker => {
                let slot: &mut dyn ItemSink = &mut self.clicker_slot;
                Some((&mut self.clicker, slot))
            }
            Target::Item(name) => {
                if !self.unlocked.contains(name) {
                    return None;
                }
                let item = self.items.iter_mut().find(|i| i.name() == name)?;
                let sink: &mut dyn ItemSink = &mut self.unlocked;
                Some((item, sink))
            }
        }
    }

    /// Publish a catalogue item to the unlocked sink.
    pub fn unlock(&mut self, name: &str) -> bool {
        match self.items.iter().find(|i| i.name() == name) {
            Some(item) => self.unlocked.add(item),
            None => {
                warn!(name, "unlock refers to an unknown item");
                false
            }
        }
    }

    /// Emojis per second from every unlocked passive item.
    pub fn passive_income(&self) -> f64 {
        self.items
            .iter()
            .filter(|i| self.unlocked.contains(i.name()))
            .map(Item::influence)
            .sum()
    }

    pub fn reset(&mut self) {
        for item in &mut self.items {
            *item = Item::new(item.definition().clone());
        }
        self.clicker = Item::new(self.clicker.definition().clone());
        self.unlocked.reset();
        self.clicker_slot.reset();
    }
}

/// Farm plots and their sink.
#[derive(Clone, Debug)]
pub struct Farm {
    pub plots: Vec<FarmItem>,
    pub unlocked: UnlockedItems<FarmItem>,
}

impl Farm {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            plots: config.farm.iter().cloned().map(FarmItem::new).collect(),
            unlocked: UnlockedItems::new(config.settings.notify),
        }
    }

    /// The live plot and its sink, if unlocked.
    pub fn resolve(&mut self, name: &str) -> Option<(&mut FarmItem, &mut UnlockedItems<FarmItem>)> {
        if !self.unlocked.contains(name) {
            return None;
        }
        let plot = self.plots.iter_mut().find(|p| p.name() == name)?;
        Some((plot, &mut self.unlocked))
    }

    pub fn unlock(&mut self, name: &str) -> bool {
        match self.plots.iter().find(|p| p.name() == name) {
            Some(plot) => self.unlocked.add(plot),
            None => {
                warn!(name, "unlock refers to an unknown farm item");
                false
            }
        }
    }

    pub fn reset(&mut self) {
        for plot in &mut self.plots {
            *plot = FarmItem::new(plot.definition().clone());
        }
        self.unlocked.reset();
    }
}

/// Full state of one Emoji Clicker session. Sessions share nothing.
#[derive(Clone, Debug)]
pub struct GameState {
    pub settings: EconomySettings,
    pub wallet: Wallet,
    pub shop: Shop,
    pub farm: Farm,
    pub schedule: UnlockSchedule,
    /// Highest level reached; its rewards and all earlier ones are unlocked.
    pub level: u32,
    pub total_clicks: u64,
    pub total_ticks: u64,
}

impl GameState {
    /// Build a session from a validated config. Level 0 rewards are not
    /// unlocked yet; see [`super::logic::start_session`].
    pub fn new(config: &GameConfig) -> Self {
        Self {
            settings: config.settings.clone(),
            wallet: Wallet::default(),
            shop: Shop::new(config),
            farm: Farm::new(config),
            schedule: config.unlocks.clone(),
            level: 0,
            total_clicks: 0,
            total_ticks: 0,
        }
    }

    /// Current click yield.
    pub fn click_power(&self) -> f64 {
        self.settings.base_click_power + self.shop.clicker.influence()
    }
}
