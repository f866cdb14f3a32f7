//! Balance simulator for Emoji Clicker.
//! Run with: cargo test simulate_greedy -- --nocapture

use crate::config::GameConfig;
use crate::game::actions::Target;
use crate::game::logic;
use crate::game::state::GameState;

const CLICKS_PER_SECOND: u32 = 5;

/// Cheapest affordable unit of passive income, or the clicker when
/// nothing passive pays back faster than five clicks a second would.
fn find_best_purchase(state: &GameState) -> Option<Target> {
    let mut best: Option<(f64, Target)> = None; // (payback_seconds, target)

    for item in state.shop.unlocked.iter() {
        let cost = item.next_cost(1);
        if !item.check_add_amount(1) || state.wallet.emojis < cost {
            continue;
        }
        let gain = next_unit_gain(state, item.name());
        if gain <= 0.0 {
            continue;
        }
        let payback = cost / gain;
        let dominated = best.as_ref().is_some_and(|(bp, _)| *bp <= payback);
        if !dominated {
            best = Some((payback, Target::item(item.name())));
        }
    }

    let clicker = &state.shop.clicker;
    let cost = clicker.next_cost(1);
    if state.wallet.emojis >= cost {
        let gain = CLICKS_PER_SECOND as f64;
        let payback = cost / gain;
        let dominated = best.as_ref().is_some_and(|(bp, _)| *bp <= payback);
        if !dominated {
            best = Some((payback, Target::Clicker));
        }
    }

    best.map(|(_, t)| t)
}

/// Income gained by owning one more unit of `name`.
fn next_unit_gain(state: &GameState, name: &str) -> f64 {
    let mut probe = state.clone();
    probe.wallet.emojis = f64::MAX;
    let before = probe.shop.passive_income();
    if !logic::buy(&mut probe, &Target::item(name), 1) {
        return 0.0;
    }
    probe.shop.passive_income() - before
}

fn simulate(seconds: u32) -> GameState {
    let mut state = GameState::new(&GameConfig::default());
    logic::start_session(&mut state);
    let tps = state.settings.ticks_per_second;

    for second in 0..seconds {
        for _ in 0..CLICKS_PER_SECOND {
            logic::click(&mut state);
        }
        logic::tick(&mut state, tps);
        while let Some(target) = find_best_purchase(&state) {
            if !logic::buy(&mut state, &target, 1) {
                break;
            }
        }
        if second % 60 == 0 {
            eprintln!(
                "t={:>4}s  level={}  emojis={:>10.1}  score={:>10.1}  income={:>7.1}/s  click={}",
                second,
                state.level,
                state.wallet.emojis,
                state.wallet.score,
                state.shop.passive_income(),
                state.click_power(),
            );
        }
    }
    state
}

#[test]
fn simulate_greedy() {
    let state = simulate(600);
    eprintln!("\n=== Final ===");
    for item in state.shop.unlocked.iter() {
        eprintln!(
            "  {:<20} x{:<3} income={:.1}",
            item.name(),
            item.amount(),
            item.influence()
        );
    }
    eprintln!("  clicker x{}", state.shop.clicker.amount());

    assert!(state.level >= 1, "stuck at level {}", state.level);
    assert!(state.shop.unlocked.contains("easy"));
    assert!(state.shop.passive_income() > 0.0);
}
