//! Game configuration: economy settings plus the item catalogue.
//!
//! A config is assembled once at session start, either from
//! [`GameConfig::default`] (the built-in catalogue) or from a JSON file, and
//! is validated before any item is built from it.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::economy::catalogue::{CatalogueEntry, CatalogueError, Image, ItemDefinition};
use crate::economy::farm::{self, FarmDefinition};
use crate::economy::sink::NotifyPolicy;
use crate::economy::unlocks::{Unlock, UnlockSchedule};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("duplicate {kind} name {name:?}")]
    DuplicateName { kind: &'static str, name: String },

    #[error("farm item {0:?} needs a name and finite, non-negative value and plot cost")]
    InvalidFarm(String),

    #[error("the clicker must use clicker pricing, and only the clicker may")]
    ClickerPricing,

    #[error("level {level} unlocks unknown {kind} {name:?}")]
    UnknownUnlock {
        level: u32,
        kind: &'static str,
        name: String,
    },

    #[error("level scores must be positive and strictly increasing")]
    LevelScores,

    #[error("base click power must be finite and non-negative")]
    ClickPower,

    #[error("ticks_per_second must be at least 1")]
    TickRate,
}

fn default_click_power() -> f64 {
    1.0
}

fn default_ticks_per_second() -> u32 {
    10
}

/// Tunables of the game loop.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EconomySettings {
    /// Emojis per click before the clicker's influence is added.
    #[serde(default = "default_click_power")]
    pub base_click_power: f64,
    /// Game-loop ticks per second; passive income is per second.
    #[serde(default = "default_ticks_per_second")]
    pub ticks_per_second: u32,
    /// When item mutators republish to their sinks.
    #[serde(default)]
    pub notify: NotifyPolicy,
}

impl Default for EconomySettings {
    fn default() -> Self {
        Self {
            base_click_power: default_click_power(),
            ticks_per_second: default_ticks_per_second(),
            notify: NotifyPolicy::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    #[serde(default)]
    pub settings: EconomySettings,
    pub clicker: ItemDefinition,
    #[serde(default)]
    pub items: Vec<ItemDefinition>,
    #[serde(default)]
    pub farm: Vec<FarmDefinition>,
    #[serde(default)]
    pub unlocks: UnlockSchedule,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the whole config and normalise each item definition.
    pub fn validate(self) -> Result<Self, ConfigError> {
        self.check().inspect_err(|e| warn!(error = %e, "rejected game config"))
    }

    fn check(mut self) -> Result<Self, ConfigError> {
        let s = &self.settings;
        if !(s.base_click_power.is_finite() && s.base_click_power >= 0.0) {
            return Err(ConfigError::ClickPower);
        }
        if s.ticks_per_second == 0 {
            return Err(ConfigError::TickRate);
        }

        self.clicker = self.clicker.validate()?;
        if !self.clicker_pricing_ok() {
            return Err(ConfigError::ClickerPricing);
        }
        self.items = self
            .items
            .into_iter()
            .map(ItemDefinition::validate)
            .collect::<Result<_, _>>()?;

        let mut names = HashSet::new();
        for item in &self.items {
            if !names.insert(item.name()) {
                return Err(ConfigError::DuplicateName {
                    kind: "item",
                    name: item.name().to_string(),
                });
            }
        }
        let mut farm_names = HashSet::new();
        for def in &self.farm {
            if !farm::valid_definition(def) {
                return Err(ConfigError::InvalidFarm(def.name.clone()));
            }
            if !farm_names.insert(def.name.as_str()) {
                return Err(ConfigError::DuplicateName {
                    kind: "farm item",
                    name: def.name.clone(),
                });
            }
        }

        if !self.unlocks.scores_are_valid() {
            return Err(ConfigError::LevelScores);
        }
        for (level, unlock) in self.unlocks.unlocks() {
            let (kind, name, known) = match unlock {
                Unlock::Item(name) => ("item", name, names.contains(name.as_str())),
                Unlock::Farm(name) => ("farm item", name, farm_names.contains(name.as_str())),
            };
            if !known {
                return Err(ConfigError::UnknownUnlock {
                    level,
                    kind,
                    name: name.clone(),
                });
            }
        }
        Ok(self)
    }

    fn clicker_pricing_ok(&self) -> bool {
        use crate::economy::catalogue::Pricing;
        matches!(self.clicker.pricing, Pricing::Clicker(_))
            && !self
                .items
                .iter()
                .any(|i| matches!(i.pricing, Pricing::Clicker(_)))
    }
}

impl Default for GameConfig {
    /// The built-in catalogue.
    fn default() -> Self {
        let nerd = ItemDefinition::geometric(
            CatalogueEntry::new(
                "Nerd Face",
                "A studious face that earns a little",
                Image::new("emojis/nerd.svg", "nerd face"),
                10.0,
            ),
            1.0,
            1.2,
        );
        let blushed = ItemDefinition::geometric(
            CatalogueEntry::new(
                "blushed face",
                "blushed face",
                Image::new("emojis/blushed.svg", "blushed face"),
                100.0,
            ),
            3.0,
            1.4,
        );
        let hot_costs = vec![300.0, 500.0, 1000.0, 2000.0, 5000.0];
        let hot_income = vec![0.0, 6.0, 12.0, 30.0, 33.0, 96.0];
        let easy_hot = scheduled_entry("easy", "easy", &hot_costs, &hot_income);
        let expensive_hot =
            scheduled_entry("expensive hot face", "hot face", &hot_costs, &hot_income);

        Self {
            settings: EconomySettings::default(),
            clicker: ItemDefinition::clicker(
                CatalogueEntry::new(
                    "Emoji Upgrade",
                    "Increases the amount of emojis per click",
                    Image::new("emojis/heart.svg", "clicker emoji"),
                    30.0,
                ),
                1.0,
                1.2,
            ),
            items: vec![nerd, blushed, easy_hot, expensive_hot],
            farm: vec![FarmDefinition {
                name: "Peach".into(),
                description: "A juicy peach".into(),
                image: Image::new("emojis/peach.svg", "peach"),
                value: 5.0,
                plot_cost: 50.0,
                growth_time_ms: 10_000,
            }],
            unlocks: UnlockSchedule {
                level_scores: vec![2000.0, 5000.0, 10000.0, 50000.0],
                rewards: [
                    (
                        0,
                        vec![
                            Unlock::Item("Nerd Face".into()),
                            Unlock::Item("blushed face".into()),
                        ],
                    ),
                    (1, vec![Unlock::Item("easy".into())]),
                    (2, vec![Unlock::Item("expensive hot face".into())]),
                    (3, vec![Unlock::Farm("Peach".into())]),
                ]
                .into_iter()
                .collect(),
            },
        }
    }
}

// Built already normalised, so the default config equals its validated form.
fn scheduled_entry(name: &str, description: &str, costs: &[f64], income: &[f64]) -> ItemDefinition {
    use crate::economy::catalogue::{Pricing, Schedule};
    let first = costs.first().copied().unwrap_or(0.0);
    let image = Image::new("emojis/hot.svg", "hot face");
    ItemDefinition {
        entry: CatalogueEntry::new(name, description, image, first).with_max(costs.len() as u32),
        pricing: Pricing::Scheduled(Schedule {
            cost_table: costs.to_vec(),
            income_table: income.to_vec(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default().validate().unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.items.len(), 4);
        let easy = config.items.iter().find(|i| i.name() == "easy").unwrap();
        assert_eq!(easy.entry.max, Some(5));
        assert_eq!(easy.entry.initial_cost, 300.0);
        assert_eq!(config.clicker.entry.max, None);
    }

    #[test]
    fn settings_default_when_missing() {
        let json = r#"{
            "clicker": {
                "name": "click", "initial_cost": 30,
                "pricing": { "kind": "clicker", "cost_multiplier": 1.2, "multiplier": 1 }
            }
        }"#;
        let config = GameConfig::from_json_str(json).unwrap();
        assert_eq!(config.settings, EconomySettings::default());
        assert!(config.items.is_empty());
    }

    #[test]
    fn rejects_duplicate_item_names() {
        let mut config = GameConfig::default();
        let copy = config.items[0].clone();
        config.items.push(copy);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateName { kind: "item", .. })
        ));
    }

    #[test]
    fn rejects_unknown_unlock() {
        let mut config = GameConfig::default();
        config
            .unlocks
            .rewards
            .insert(7, vec![Unlock::Farm("Mango".into())]);
        match config.validate() {
            Err(ConfigError::UnknownUnlock { level, name, .. }) => {
                assert_eq!(level, 7);
                assert_eq!(name, "Mango");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn rejects_misplaced_clicker_pricing() {
        let mut config = GameConfig::default();
        config.items.push(config.clicker.clone());
        assert!(matches!(config.validate(), Err(ConfigError::ClickerPricing)));

        let mut config = GameConfig::default();
        config.clicker = config.items[0].clone();
        assert!(matches!(config.validate(), Err(ConfigError::ClickerPricing)));
    }

    #[test]
    fn rejects_bad_settings() {
        let mut config = GameConfig::default();
        config.settings.ticks_per_second = 0;
        assert!(matches!(config.validate(), Err(ConfigError::TickRate)));

        let mut config = GameConfig::default();
        config.unlocks.level_scores = vec![100.0, 100.0];
        assert!(matches!(config.validate(), Err(ConfigError::LevelScores)));
    }

    #[test]
    fn surfaces_catalogue_errors() {
        let mut config = GameConfig::default();
        config.items[0] = scheduled_entry("broken", "", &[1.0], &[0.0]);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Catalogue(CatalogueError::IncomeLength { .. }))
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            GameConfig::from_json_str("{ not json"),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            GameConfig::from_path("/nonexistent/catalogue.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn round_trips_through_json() {
        let config = GameConfig::default().validate().unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(GameConfig::from_json_str(&json).unwrap(), config);
    }
}
