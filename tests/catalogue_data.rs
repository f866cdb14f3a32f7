//! The bundled catalogue under `data/` must load, validate, and describe the
//! same economy as the built-in default.

use emoji_clicker::economy::Pricing;
use emoji_clicker::{Action, EmojiGame, GameConfig, Target};

fn bundled() -> GameConfig {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/catalogue.json");
    GameConfig::from_path(path).unwrap_or_else(|e| panic!("{path}: {e}"))
}

#[test]
fn bundled_catalogue_matches_builtin_default() {
    assert_eq!(bundled(), GameConfig::default());
}

#[test]
fn scheduled_items_take_bounds_from_their_tables() {
    let config = bundled();
    for item in &config.items {
        if let Pricing::Scheduled(schedule) = &item.pricing {
            assert_eq!(item.entry.max, Some(schedule.cost_table.len() as u32));
            assert_eq!(item.entry.initial_cost, schedule.cost_table[0]);
            assert_eq!(schedule.income_table.len(), schedule.cost_table.len() + 1);
        }
    }
}

#[test]
fn bundled_session_plays_through_first_levels() {
    let mut game = EmojiGame::new(bundled()).unwrap();
    for _ in 0..2000 {
        game.handle_action(&Action::Click);
    }
    assert_eq!(game.state.level, 1);
    assert!(game.handle_action(&Action::Buy {
        target: Target::item("easy"),
        count: 1,
    }));

    // One slot per purchase, each at its own table price.
    game.state.wallet.emojis = 10_000.0;
    assert!(!game.handle_action(&Action::Buy {
        target: Target::item("easy"),
        count: 4,
    }));
    for _ in 0..4 {
        assert!(game.handle_action(&Action::Buy {
            target: Target::item("easy"),
            count: 1,
        }));
    }
    // 500 + 1000 + 2000 + 5000
    assert!((game.state.wallet.emojis - 1_500.0).abs() < 0.001);

    // Sold out after the last table slot.
    assert!(!game.handle_action(&Action::Buy {
        target: Target::item("easy"),
        count: 1,
    }));
    let easy = game.state.shop.item("easy").unwrap();
    assert_eq!(easy.amount(), 5);
    assert_eq!(easy.influence(), 96.0);
    assert!(easy.next_cost(1).is_infinite());
}
