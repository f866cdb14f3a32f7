//! Pricing and influence formulas. Pure functions over the pricing tag and
//! the ledger, fully testable without an item or a sink.

use super::catalogue::{GeometricParams, ItemDefinition, Pricing, Schedule};
use super::ledger::Ledger;

/// Fraction of a unit's marginal cost refunded when a geometric item is sold.
pub const SELL_BACK_RATIO: f64 = 0.3;

/// Cost returned when a purchase is impossible (sold out, no upgrades).
pub const UNAFFORDABLE: f64 = f64::INFINITY;

/// Price to buy `count` more units from the ledger's current amount.
pub fn next_cost(def: &ItemDefinition, ledger: &Ledger, count: u32) -> f64 {
    match &def.pricing {
        Pricing::Geometric(p) | Pricing::Clicker(p) => {
            geometric_cost(def.entry.initial_cost, p, ledger.amount(), count)
        }
        Pricing::Scheduled(s) => scheduled_cost(s, ledger.amount(), count),
    }
}

/// Price of the next upgrade.
pub fn next_upgrade_cost(def: &ItemDefinition, ledger: &Ledger) -> f64 {
    match &def.pricing {
        Pricing::Geometric(p) | Pricing::Clicker(p) => {
            geometric_upgrade_cost(p, ledger.upgrade_amount())
        }
        Pricing::Scheduled(_) => UNAFFORDABLE,
    }
}

/// Proceeds from selling `count` units counting down from the current amount.
pub fn next_sell(def: &ItemDefinition, ledger: &Ledger, count: u32) -> f64 {
    match &def.pricing {
        Pricing::Geometric(p) | Pricing::Clicker(p) => {
            geometric_sell(def.entry.initial_cost, p, ledger.amount(), count)
        }
        Pricing::Scheduled(s) => scheduled_sell(s, ledger.amount(), count),
    }
}

/// Current contribution to income (or click power for the clicker).
pub fn influence(def: &ItemDefinition, ledger: &Ledger) -> f64 {
    match &def.pricing {
        Pricing::Geometric(p) | Pricing::Clicker(p) => {
            geometric_influence(p, ledger.amount(), ledger.upgrade_amount())
        }
        Pricing::Scheduled(s) => scheduled_influence(s, ledger.amount()),
    }
}

/// Floored price of the unit at position `index` (0 = first unit).
fn unit_price(initial_cost: f64, cost_multiplier: f64, index: u64) -> f64 {
    (initial_cost * cost_multiplier.powf(index as f64)).floor()
}

/// Sum of per-unit floored prices for units `amount..amount + count`.
///
/// Each term is floored on its own so a bulk purchase costs exactly what
/// buying the units one at a time would.
pub fn geometric_cost(initial_cost: f64, p: &GeometricParams, amount: u32, count: u32) -> f64 {
    if amount == 0 && count == 1 {
        return initial_cost;
    }
    let mut total = 0.0;
    for i in 0..count as u64 {
        total += unit_price(initial_cost, p.cost_multiplier, amount as u64 + i);
        if !total.is_finite() {
            return UNAFFORDABLE;
        }
    }
    total
}

/// Refund for selling up to `count` units, most recent first. Stops early
/// once nothing is left to sell.
pub fn geometric_sell(initial_cost: f64, p: &GeometricParams, amount: u32, count: u32) -> f64 {
    (0..count.min(amount) as u64)
        .map(|i| {
            let index = amount as u64 - i;
            (initial_cost * p.cost_multiplier.powf(index as f64) * SELL_BACK_RATIO).floor()
        })
        .sum()
}

pub fn geometric_upgrade_cost(p: &GeometricParams, upgrade_amount: u32) -> f64 {
    if upgrade_amount == 0 {
        return p.initial_upgrade_cost;
    }
    (p.initial_upgrade_cost * p.upgrade_cost_multiplier.powf(upgrade_amount as f64)).floor()
}

/// Each upgrade doubles the per-unit yield.
pub fn geometric_influence(p: &GeometricParams, amount: u32, upgrade_amount: u32) -> f64 {
    amount as f64 * p.income_multiplier * 2f64.powf(upgrade_amount as f64)
}

/// Price of the slot filled by buying `count` more units. Not a sum: a
/// multi-unit request is only bound-checked, and buying nothing costs
/// nothing (`count == 0` quotes 0 rather than a slot).
pub fn scheduled_cost(s: &Schedule, amount: u32, count: u32) -> f64 {
    if count == 0 {
        return 0.0;
    }
    if amount as u64 + count as u64 > s.cost_table.len() as u64 {
        return UNAFFORDABLE;
    }
    let slot = if amount == 0 {
        0
    } else {
        (amount + count - 1) as usize
    };
    s.cost_table.get(slot).copied().unwrap_or(UNAFFORDABLE)
}

/// Full original price of the slot left empty after selling `count` units.
/// Selling nothing, or more than owned, yields nothing.
pub fn scheduled_sell(s: &Schedule, amount: u32, count: u32) -> f64 {
    if count == 0 || count > amount {
        return 0.0;
    }
    s.cost_table
        .get((amount - count) as usize)
        .copied()
        .unwrap_or(0.0)
}

pub fn scheduled_influence(s: &Schedule, amount: u32) -> f64 {
    s.income_table
        .get(amount as usize)
        .or_else(|| s.income_table.last())
        .copied()
        .unwrap_or(0.0)
}
