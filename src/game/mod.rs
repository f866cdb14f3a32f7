/// Emoji Clicker: a session driving the item economy from player actions
/// and game-loop ticks.

pub mod actions;
pub mod logic;
#[cfg(test)]
mod simulator;
pub mod state;

pub use actions::{Action, Target};

use crate::config::{ConfigError, GameConfig};

use state::GameState;

pub struct EmojiGame {
    pub state: GameState,
}

impl EmojiGame {
    /// Validate `config` and start a session from it.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let config = config.validate()?;
        let mut state = GameState::new(&config);
        logic::start_session(&mut state);
        Ok(Self { state })
    }

    /// Apply one player action. Returns true if it changed the session.
    pub fn handle_action(&mut self, action: &Action) -> bool {
        match action {
            Action::Click => {
                logic::click(&mut self.state);
                true
            }
            Action::Buy { target, count } => logic::buy(&mut self.state, target, *count),
            Action::Sell { target, count } => logic::sell(&mut self.state, target, *count),
            Action::Upgrade(target) => logic::buy_upgrade(&mut self.state, target),
            Action::BuyPlot(name) => logic::buy_plot(&mut self.state, name),
            Action::Plant(name) => logic::plant(&mut self.state, name),
            Action::Harvest(name) => logic::harvest(&mut self.state, name),
            Action::Reset => {
                logic::reset(&mut self.state);
                true
            }
        }
    }

    pub fn tick(&mut self, delta_ticks: u32) {
        logic::tick(&mut self.state, delta_ticks);
    }
}

impl Default for EmojiGame {
    /// A session over the built-in catalogue.
    fn default() -> Self {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        logic::start_session(&mut state);
        Self { state }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emoji_game_click_produces_emojis() {
        let mut game = EmojiGame::default();
        assert!(game.handle_action(&Action::Click));
        assert!((game.state.wallet.emojis - 1.0).abs() < 0.001);
    }

    #[test]
    fn emoji_game_buy_via_action() {
        let mut game = EmojiGame::default();
        game.state.wallet.emojis = 100.0;
        let buy = Action::Buy {
            target: Target::item("Nerd Face"),
            count: 1,
        };
        assert!(game.handle_action(&buy));
        assert_eq!(game.state.shop.item("Nerd Face").map(|i| i.amount()), Some(1));
        game.tick(10);
        assert!((game.state.wallet.emojis - 91.0).abs() < 0.001);
    }

    #[test]
    fn emoji_game_rejected_action_reports_false() {
        let mut game = EmojiGame::default();
        assert!(!game.handle_action(&Action::Upgrade(Target::Clicker)));
        assert!(!game.handle_action(&Action::Harvest("Peach".into())));
        assert!(!game.handle_action(&Action::Sell {
            target: Target::item("Nerd Face"),
            count: 1,
        }));
    }

    #[test]
    fn emoji_game_reset_via_action() {
        let mut game = EmojiGame::default();
        for _ in 0..40 {
            game.handle_action(&Action::Click);
        }
        game.handle_action(&Action::Buy {
            target: Target::Clicker,
            count: 1,
        });
        assert!(game.handle_action(&Action::Reset));
        assert_eq!(game.state.wallet.emojis, 0.0);
        assert_eq!(game.state.shop.clicker.amount(), 0);
        assert_eq!(game.state.shop.unlocked.len(), 2);
    }

    #[test]
    fn sessions_do_not_share_sinks() {
        let mut a = EmojiGame::default();
        let b = EmojiGame::default();
        a.state.wallet.emojis = 10.0;
        a.handle_action(&Action::Buy {
            target: Target::item("Nerd Face"),
            count: 1,
        });
        assert_eq!(a.state.shop.unlocked.get("Nerd Face").map(|i| i.amount()), Some(1));
        assert_eq!(b.state.shop.unlocked.get("Nerd Face").map(|i| i.amount()), Some(0));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = GameConfig::default();
        config.settings.ticks_per_second = 0;
        assert!(matches!(EmojiGame::new(config), Err(ConfigError::TickRate)));
    }
}
