//! Level thresholds and the rewards unlocked at each level.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Something a level makes available, referenced by name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum Unlock {
    Item(String),
    Farm(String),
}

/// Level progression.
///
/// `level_scores[k]` is the score needed to reach level `k + 1`. Past the
/// end of the table every level needs twice the previous threshold.
/// `rewards[0]` holds the items available from the start; levels without
/// an entry unlock nothing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UnlockSchedule {
    #[serde(default)]
    pub level_scores: Vec<f64>,
    #[serde(default)]
    pub rewards: BTreeMap<u32, Vec<Unlock>>,
}

impl UnlockSchedule {
    pub fn rewards_at(&self, level: u32) -> &[Unlock] {
        self.rewards.get(&level).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Score required to reach `level`.
    pub fn threshold(&self, level: u32) -> f64 {
        if level == 0 {
            return 0.0;
        }
        let index = level as usize - 1;
        if let Some(&score) = self.level_scores.get(index) {
            return score;
        }
        match self.level_scores.last() {
            Some(&last) => {
                let extra = (index + 1 - self.level_scores.len()) as f64;
                last * 2f64.powf(extra)
            }
            None => f64::INFINITY,
        }
    }

    /// Highest level whose threshold `score` has reached.
    pub fn level_for_score(&self, score: f64) -> u32 {
        let mut level = 0;
        loop {
            let next = self.threshold(level + 1);
            if !next.is_finite() || score < next || level == u32::MAX - 1 {
                return level;
            }
            level += 1;
        }
    }

    /// Thresholds must be positive and strictly increasing.
    pub fn scores_are_valid(&self) -> bool {
        self.level_scores.iter().all(|s| s.is_finite() && *s > 0.0)
            && self.level_scores.windows(2).all(|w| w[0] < w[1])
    }

    pub fn unlocks(&self) -> impl Iterator<Item = (u32, &Unlock)> {
        self.rewards
            .iter()
            .flat_map(|(level, list)| list.iter().map(move |u| (*level, u)))
    }
}
