//! Static item definitions: the immutable catalogue record of every
//! purchasable item plus the pricing parameters of its variant.

use serde::{Deserialize, Serialize};

/// Default price of the first upgrade of a geometric item.
pub const DEFAULT_UPGRADE_COST: f64 = 30.0;
/// Default growth factor of upgrade prices.
pub const DEFAULT_UPGRADE_COST_MULTIPLIER: f64 = 1.2;

fn default_upgrade_cost() -> f64 {
    DEFAULT_UPGRADE_COST
}

fn default_upgrade_cost_multiplier() -> f64 {
    DEFAULT_UPGRADE_COST_MULTIPLIER
}

/// Display image reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

impl Image {
    pub fn new(src: &str, alt: &str) -> Self {
        Self {
            src: src.to_string(),
            alt: alt.to_string(),
        }
    }
}

/// Fields shared by every purchasable item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CatalogueEntry {
    /// Unique among items of a kind; sinks key their entries by it.
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Image,
    /// Price of the first unit.
    #[serde(default)]
    pub initial_cost: f64,
    /// Upper bound on owned quantity. `None` means unbounded.
    #[serde(default)]
    pub max: Option<u32>,
}

impl CatalogueEntry {
    pub fn new(name: &str, description: &str, image: Image, initial_cost: f64) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            image,
            initial_cost,
            max: None,
        }
    }

    pub fn with_max(mut self, max: u32) -> Self {
        self.max = Some(max);
        self
    }
}

/// Growth parameters of the linear-geometric family (passive items and the
/// clicker).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeometricParams {
    /// Ratio between the prices of consecutive units. Must exceed 1.
    pub cost_multiplier: f64,
    /// Influence of a single unit before upgrades.
    #[serde(alias = "multiplier")]
    pub income_multiplier: f64,
    #[serde(default = "default_upgrade_cost")]
    pub initial_upgrade_cost: f64,
    #[serde(default = "default_upgrade_cost_multiplier")]
    pub upgrade_cost_multiplier: f64,
}

impl GeometricParams {
    pub fn new(income_multiplier: f64, cost_multiplier: f64) -> Self {
        Self {
            cost_multiplier,
            income_multiplier,
            initial_upgrade_cost: DEFAULT_UPGRADE_COST,
            upgrade_cost_multiplier: DEFAULT_UPGRADE_COST_MULTIPLIER,
        }
    }
}

/// Fixed per-slot tables of the scheduled-cost family.
///
/// Table alignment:
/// - `cost_table[k]` is the price of acquiring the (k+1)-th unit, so the
///   table has exactly `max` slots.
/// - `income_table[k]` is the influence while exactly `k` units are owned,
///   so the table has `max + 1` slots (slot 0 is the zero-owned baseline).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    pub cost_table: Vec<f64>,
    pub income_table: Vec<f64>,
}

/// Pricing strategy of an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pricing {
    /// Unbounded passive income item with geometric cost growth.
    Geometric(GeometricParams),
    /// The click-power singleton. Same formulas, never capped.
    Clicker(GeometricParams),
    /// Bounded item priced from fixed tables.
    Scheduled(Schedule),
}

/// A complete static item record, as assembled by the game's setup code or
/// loaded from a catalogue file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    #[serde(flatten)]
    pub entry: CatalogueEntry,
    pub pricing: Pricing,
}

/// Rejected item definition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogueError {
    #[error("item {0:?} has an empty name")]
    EmptyName(String),

    #[error("item {name:?}: {field} must be finite and non-negative")]
    InvalidParameter { name: String, field: &'static str },

    #[error("item {name:?}: cost multiplier must be greater than 1, got {value}")]
    CostMultiplier { name: String, value: f64 },

    #[error("item {0:?}: max must be at least 1")]
    ZeroMax(String),

    #[error("item {0:?} has an empty cost table")]
    EmptySchedule(String),

    #[error("item {name:?}: max is {max} but the cost table has {slots} slots")]
    ScheduleLength { name: String, max: u32, slots: usize },

    #[error("item {name:?}: income table needs {expected} slots, found {found}")]
    IncomeLength {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("item {0:?}: income table must never decrease")]
    IncomeNotMonotonic(String),
}

fn non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl ItemDefinition {
    /// A passive income item with geometric cost growth.
    pub fn geometric(entry: CatalogueEntry, income_multiplier: f64, cost_multiplier: f64) -> Self {
        Self {
            entry,
            pricing: Pricing::Geometric(GeometricParams::new(income_multiplier, cost_multiplier)),
        }
    }

    /// The click-power item.
    pub fn clicker(entry: CatalogueEntry, multiplier: f64, cost_multiplier: f64) -> Self {
        Self {
            entry,
            pricing: Pricing::Clicker(GeometricParams::new(multiplier, cost_multiplier)),
        }
    }

    /// A table-priced item. `max` and `initial_cost` are derived from the
    /// cost table.
    pub fn scheduled(
        name: &str,
        description: &str,
        image: Image,
        cost_table: Vec<f64>,
        income_table: Vec<f64>,
    ) -> Result<Self, CatalogueError> {
        Self {
            entry: CatalogueEntry::new(name, description, image, 0.0),
            pricing: Pricing::Scheduled(Schedule {
                cost_table,
                income_table,
            }),
        }
        .validate()
    }

    pub fn name(&self) -> &str {
        &self.entry.name
    }

    /// Check the definition and normalise the catalogue fields so they agree
    /// with the pricing payload.
    pub fn validate(mut self) -> Result<Self, CatalogueError> {
        let name = self.entry.name.clone();
        if name.trim().is_empty() {
            return Err(CatalogueError::EmptyName(name));
        }
        let invalid = |field| CatalogueError::InvalidParameter {
            name: name.clone(),
            field,
        };

        match &self.pricing {
            Pricing::Geometric(p) | Pricing::Clicker(p) => {
                if !non_negative(self.entry.initial_cost) {
                    return Err(invalid("initial_cost"));
                }
                if !(p.cost_multiplier.is_finite() && p.cost_multiplier > 1.0) {
                    return Err(CatalogueError::CostMultiplier {
                        name,
                        value: p.cost_multiplier,
                    });
                }
                if !non_negative(p.income_multiplier) {
                    return Err(invalid("income_multiplier"));
                }
                if !non_negative(p.initial_upgrade_cost) {
                    return Err(invalid("initial_upgrade_cost"));
                }
                if !(p.upgrade_cost_multiplier.is_finite() && p.upgrade_cost_multiplier >= 1.0) {
                    return Err(invalid("upgrade_cost_multiplier"));
                }
                if self.entry.max == Some(0) {
                    return Err(CatalogueError::ZeroMax(name));
                }
                if matches!(self.pricing, Pricing::Clicker(_)) {
                    self.entry.max = None;
                }
            }
            Pricing::Scheduled(s) => {
                let slots = s.cost_table.len();
                let Some(&first) = s.cost_table.first() else {
                    return Err(CatalogueError::EmptySchedule(name));
                };
                if let Some(max) = self.entry.max {
                    if max as usize != slots {
                        return Err(CatalogueError::ScheduleLength { name, max, slots });
                    }
                }
                if s.income_table.len() != slots + 1 {
                    return Err(CatalogueError::IncomeLength {
                        name,
                        expected: slots + 1,
                        found: s.income_table.len(),
                    });
                }
                if !s.cost_table.iter().copied().all(non_negative) {
                    return Err(invalid("cost_table"));
                }
                if !s.income_table.iter().copied().all(non_negative) {
                    return Err(invalid("income_table"));
                }
                if s.income_table.windows(2).any(|w| w[1] < w[0]) {
                    return Err(CatalogueError::IncomeNotMonotonic(name));
                }
                self.entry.max = Some(slots as u32);
                self.entry.initial_cost = first;
            }
        }
        Ok(self)
    }
}
