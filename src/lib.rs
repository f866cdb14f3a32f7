//! Emoji Clicker: the item economy of an incremental clicker game.
//!
//! `economy` holds the item model (catalogue, ledger, pricing formulas and
//! the sinks that publish item snapshots), `game` drives it from player
//! actions and game-loop ticks, `config` loads the catalogue, and `format`
//! renders large numbers for display.

pub mod config;
pub mod economy;
pub mod format;
pub mod game;

pub use config::{ConfigError, EconomySettings, GameConfig};
pub use economy::{Item, NotifyPolicy};
pub use game::{Action, EmojiGame, Target};
