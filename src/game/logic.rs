//! Emoji Clicker game logic. Pure functions over [`GameState`].

use tracing::{debug, info};

use crate::economy::unlocks::Unlock;

use super::actions::Target;
use super::state::GameState;

/// Unlock the level 0 rewards of a fresh session.
pub fn start_session(state: &mut GameState) {
    state.level = 0;
    let unlocked = unlock_level(state, 0);
    info!(unlocked, "session started");
}

/// Advance the game by `delta_ticks` ticks of the configured tick rate.
pub fn tick(state: &mut GameState, delta_ticks: u32) {
    if delta_ticks == 0 {
        return;
    }
    let seconds = delta_ticks as f64 / state.settings.ticks_per_second as f64;
    let production = state.shop.passive_income() * seconds;
    state.wallet.earn(production);
    state.total_ticks += delta_ticks as u64;
    check_level_up(state);
}

/// Manual click. Returns the emojis earned.
pub fn click(state: &mut GameState) -> f64 {
    let power = state.click_power();
    state.wallet.earn(power);
    state.total_clicks += 1;
    check_level_up(state);
    power
}

/// Buy `count` units of `target`. Returns true if the purchase went through.
/// Scheduled items are sold one slot at a time.
pub fn buy(state: &mut GameState, target: &Target, count: u32) -> bool {
    if count == 0 {
        return false;
    }
    let Some((item, sink)) = state.shop.resolve(target) else {
        return false;
    };
    if count > 1 && !item.supports_bulk() {
        return false;
    }
    if !item.check_add_amount(count) {
        return false;
    }
    let cost = item.next_cost(count);
    if !state.wallet.spend(cost) {
        return false;
    }
    if !item.add_item(count, sink) {
        state.wallet.emojis += cost;
        return false;
    }
    debug!(item = item.name(), count, cost, amount = item.amount(), "bought");
    true
}

/// Sell `count` owned units of `target`. Proceeds go to the balance only.
pub fn sell(state: &mut GameState, target: &Target, count: u32) -> bool {
    if count == 0 {
        return false;
    }
    let Some((item, sink)) = state.shop.resolve(target) else {
        return false;
    };
    if !item.check_remove_amount(count) {
        return false;
    }
    let proceeds = item.next_sell(count);
    if !item.remove_item(count, sink) {
        return false;
    }
    state.wallet.emojis += proceeds;
    debug!(item = item.name(), count, proceeds, amount = item.amount(), "sold");
    true
}

/// Buy one upgrade for `target`.
pub fn buy_upgrade(state: &mut GameState, target: &Target) -> bool {
    let Some((item, sink)) = state.shop.resolve(target) else {
        return false;
    };
    let cost = item.next_upgrade_cost();
    if !state.wallet.spend(cost) {
        return false;
    }
    if !item.add_upgrade(1, sink) {
        state.wallet.emojis += cost;
        return false;
    }
    debug!(item = item.name(), cost, upgrades = item.upgrade_amount(), "upgraded");
    true
}

/// Raise the level to whatever the score has reached, unlocking the
/// rewards of every level passed on the way. Returns true on level-up.
pub fn check_level_up(state: &mut GameState) -> bool {
    let target = state.schedule.level_for_score(state.wallet.score);
    if target <= state.level {
        return false;
    }
    while state.level < target {
        state.level += 1;
        let level = state.level;
        let unlocked = unlock_level(state, level);
        info!(level, unlocked, "level up");
    }
    true
}

/// Publish the rewards of `level`. Returns how many were newly unlocked.
pub fn unlock_level(state: &mut GameState, level: u32) -> usize {
    let mut unlocked = 0;
    for reward in state.schedule.rewards_at(level) {
        let added = match reward {
            Unlock::Item(name) => state.shop.unlock(name),
            Unlock::Farm(name) => state.farm.unlock(name),
        };
        if added {
            unlocked += 1;
        }
    }
    unlocked
}

/// Buy one plot of an unlocked farm item.
pub fn buy_plot(state: &mut GameState, name: &str) -> bool {
    let Some((plot, sink)) = state.farm.resolve(name) else {
        return false;
    };
    let cost = plot.definition().plot_cost;
    if !state.wallet.spend(cost) {
        return false;
    }
    if !plot.add_plots(1, sink) {
        state.wallet.emojis += cost;
        return false;
    }
    debug!(farm = name, cost, plots = plot.amount(), "bought plot");
    true
}

pub fn plant(state: &mut GameState, name: &str) -> bool {
    match state.farm.resolve(name) {
        Some((plot, sink)) => plot.plant(sink),
        None => false,
    }
}

/// Harvest one planted plot, crediting its value in crops.
pub fn harvest(state: &mut GameState, name: &str) -> bool {
    let Some((plot, sink)) = state.farm.resolve(name) else {
        return false;
    };
    if !plot.harvest(sink) {
        return false;
    }
    let value = plot.definition().value;
    state.wallet.crops += value;
    debug!(farm = name, value, crops = state.wallet.crops, "harvested");
    true
}

/// Return the session to its starting state: empty wallet, no items owned,
/// sinks cleared and the level 0 rewards unlocked again.
pub fn reset(state: &mut GameState) {
    state.wallet.reset();
    state.shop.reset();
    state.farm.reset();
    state.total_clicks = 0;
    state.total_ticks = 0;
    info!("session reset");
    start_session(state);
}
