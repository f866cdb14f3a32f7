//! Farm plots: owned plots that can be planted and harvested for crops.

use serde::{Deserialize, Serialize};

use super::catalogue::Image;
use super::sink::{Keyed, UnlockedItems};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FarmDefinition {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Image,
    /// Crops credited per harvest.
    pub value: f64,
    /// Emojis paid for one more plot.
    #[serde(default)]
    pub plot_cost: f64,
    /// Display only; harvesting is not timed by the economy.
    #[serde(default)]
    pub growth_time_ms: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FarmItem {
    definition: FarmDefinition,
    amount: u32,
    planted: u32,
}

impl FarmItem {
    pub fn new(definition: FarmDefinition) -> Self {
        Self {
            definition,
            amount: 0,
            planted: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn definition(&self) -> &FarmDefinition {
        &self.definition
    }

    /// Plots owned.
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Plots currently growing.
    pub fn planted(&self) -> u32 {
        self.planted
    }

    pub fn add_plots(&mut self, count: u32, sink: &mut UnlockedItems<FarmItem>) -> bool {
        let changed = match self.amount.checked_add(count) {
            Some(total) if count > 0 => {
                self.amount = total;
                true
            }
            _ => false,
        };
        self.publish(changed, sink);
        changed
    }

    /// Plant one free plot. Refused when every plot is already planted.
    pub fn plant(&mut self, sink: &mut UnlockedItems<FarmItem>) -> bool {
        let changed = self.planted < self.amount;
        if changed {
            self.planted += 1;
        }
        self.publish(changed, sink);
        changed
    }

    /// Harvest one planted plot. Refused when nothing is planted.
    pub fn harvest(&mut self, sink: &mut UnlockedItems<FarmItem>) -> bool {
        let changed = self.planted > 0;
        if changed {
            self.planted -= 1;
        }
        self.publish(changed, sink);
        changed
    }

    fn publish(&self, changed: bool, sink: &mut UnlockedItems<FarmItem>) {
        if sink.policy().should_publish(changed) {
            sink.replace(self);
        }
    }
}

impl Keyed for FarmItem {
    fn key(&self) -> &str {
        self.name()
    }
}

/// Validation shared with the config loader.
pub(crate) fn valid_definition(def: &FarmDefinition) -> bool {
    !def.name.trim().is_empty()
        && def.value.is_finite()
        && def.value >= 0.0
        && def.plot_cost.is_finite()
        && def.plot_cost >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::economy::sink::NotifyPolicy;

    fn peach() -> FarmItem {
        FarmItem::new(FarmDefinition {
            name: "Peach".into(),
            description: "A juicy peach".into(),
            image: Image::new("emojis/peach.svg", "peach"),
            value: 5.0,
            plot_cost: 50.0,
            growth_time_ms: 10_000,
        })
    }

    fn sink_for(item: &FarmItem) -> UnlockedItems<FarmItem> {
        let mut sink = UnlockedItems::new(NotifyPolicy::OnChange);
        sink.add(item);
        sink
    }

    #[test]
    fn cannot_plant_without_a_free_plot() {
        let mut farm = peach();
        let mut sink = sink_for(&farm);
        assert!(!farm.plant(&mut sink));
        farm.add_plots(1, &mut sink);
        assert!(farm.plant(&mut sink));
        assert!(!farm.plant(&mut sink));
        assert_eq!(farm.planted(), 1);
    }

    #[test]
    fn harvest_frees_the_plot() {
        let mut farm = peach();
        let mut sink = sink_for(&farm);
        assert!(!farm.harvest(&mut sink));
        farm.add_plots(2, &mut sink);
        farm.plant(&mut sink);
        assert!(farm.harvest(&mut sink));
        assert_eq!(farm.planted(), 0);
        assert_eq!(farm.amount(), 2);
        assert_eq!(sink.get("Peach").map(FarmItem::planted), Some(0));
        assert_eq!(sink.get("Peach").map(FarmItem::amount), Some(2));
    }

    #[test]
    fn rejects_invalid_definitions() {
        let mut def = peach().definition().clone();
        assert!(valid_definition(&def));
        def.value = f64::NAN;
        assert!(!valid_definition(&def));
    }
}
