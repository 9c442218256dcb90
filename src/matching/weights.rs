use serde::{Deserialize, Serialize};

use super::scoring::Dimension;
use crate::error::ConfigError;

/// Fixed default weights. Skills dominate; growth is a tiebreaker.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    skills: 35,
    experience: 25,
    domain: 20,
    preferences: 15,
    growth: 5,
};

/// Per-dimension weights in whole points. Must sum to exactly 100, which
/// keeps the weighted overall score inside [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weights {
    pub skills: u32,
    pub experience: u32,
    pub domain: u32,
    pub preferences: u32,
    pub growth: u32,
}

impl Default for Weights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl Weights {
    pub fn sum(&self) -> u32 {
        self.skills + self.experience + self.domain + self.preferences + self.growth
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = self.sum();
        if sum != 100 {
            return Err(ConfigError::BadWeights { sum });
        }
        Ok(())
    }

    pub fn for_dimension(&self, dimension: Dimension) -> u32 {
        match dimension {
            Dimension::Skills => self.skills,
            Dimension::Experience => self.experience,
            Dimension::Domain => self.domain,
            Dimension::Preferences => self.preferences,
            Dimension::Growth => self.growth,
        }
    }
}
