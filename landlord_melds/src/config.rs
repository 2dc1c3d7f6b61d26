//! Selection configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MeldError, Result};

pub const DEFAULT_LEAD_SOLO_PROBABILITY: f64 = 0.3;

/// Tunables for choosing one candidate among many.
///
/// ```json
/// {"lead_solo_probability": 0.3}
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chance that an opening lead is a single random card instead of a draw
    /// from the full candidate set.
    pub lead_solo_probability: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lead_solo_probability: DEFAULT_LEAD_SOLO_PROBABILITY,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Config> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.lead_solo_probability) {
            return Err(MeldError::InvalidConfig(format!(
                "lead_solo_probability must be within [0, 1], got {}",
                self.lead_solo_probability
            )));
        }
        Ok(())
    }
}
