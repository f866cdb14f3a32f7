//! A live item: its catalogue definition plus its ledger.

use super::catalogue::{ItemDefinition, Pricing};
use super::formula;
use super::ledger::Ledger;
use super::sink::{ItemSink, Keyed};

#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    definition: ItemDefinition,
    ledger: Ledger,
}

impl Item {
    /// A fresh item owning nothing.
    pub fn new(definition: ItemDefinition) -> Self {
        Self {
            definition,
            ledger: Ledger::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.entry.name
    }

    pub fn definition(&self) -> &ItemDefinition {
        &self.definition
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn amount(&self) -> u32 {
        self.ledger.amount()
    }

    pub fn upgrade_amount(&self) -> u32 {
        self.ledger.upgrade_amount()
    }

    pub fn is_clicker(&self) -> bool {
        matches!(self.definition.pricing, Pricing::Clicker(_))
    }

    /// Whether `next_cost(count)` prices all `count` units. Scheduled items
    /// only quote the next slot, so they are bought one at a time.
    pub fn supports_bulk(&self) -> bool {
        !matches!(self.definition.pricing, Pricing::Scheduled(_))
    }

    /// Ownership cap. The clicker is never capped.
    pub fn max(&self) -> Option<u32> {
        if self.is_clicker() {
            None
        } else {
            self.definition.entry.max
        }
    }

    pub fn next_cost(&self, count: u32) -> f64 {
        formula::next_cost(&self.definition, &self.ledger, count)
    }

    pub fn next_upgrade_cost(&self) -> f64 {
        formula::next_upgrade_cost(&self.definition, &self.ledger)
    }

    pub fn next_sell(&self, count: u32) -> f64 {
        formula::next_sell(&self.definition, &self.ledger, count)
    }

    pub fn influence(&self) -> f64 {
        formula::influence(&self.definition, &self.ledger)
    }

    pub fn check_add_amount(&self, count: u32) -> bool {
        self.ledger.can_add(count, self.max())
    }

    pub fn check_remove_amount(&self, count: u32) -> bool {
        self.ledger.can_remove(count)
    }

    /// Add `count` units. Going over the cap is a silent no-op.
    /// Returns whether the ledger changed.
    pub fn add_item<S: ItemSink + ?Sized>(&mut self, count: u32, sink: &mut S) -> bool {
        let max = self.max();
        let changed = self.ledger.add(count, max);
        self.publish(changed, sink);
        changed
    }

    /// Sell `count` units. Selling more than owned leaves zero.
    pub fn remove_item<S: ItemSink + ?Sized>(&mut self, count: u32, sink: &mut S) -> bool {
        let changed = self.ledger.remove(count);
        self.publish(changed, sink);
        changed
    }

    pub fn add_upgrade<S: ItemSink + ?Sized>(&mut self, count: u32, sink: &mut S) -> bool {
        let changed = self.ledger.add_upgrades(count);
        self.publish(changed, sink);
        changed
    }

    // Runs after the ledger update so the sink sees the new state.
    fn publish<S: ItemSink + ?Sized>(&self, changed: bool, sink: &mut S) {
        if sink.policy().should_publish(changed) {
            sink.update(self);
        }
    }
}

impl Keyed for Item {
    fn key(&self) -> &str {
        self.name()
    }
}
