//! Game configuration parameters.

use serde::{Deserialize, Serialize};

/// Tunable constants for round selection and scoring.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Maximum number of cards shown per round (default: 5).
    pub batch_size: usize,

    /// Points awarded for a correct answer (default: 3).
    pub correct_reward: u32,

    /// Extra batches drawn when a batch has no word unique to one card.
    /// 0 keeps the first batch even if it has no riddle word.
    pub max_resample_attempts: u32,

    /// Seed for the game RNG.
    /// Same seed and same request order produce the same rounds.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            batch_size: 5,
            correct_reward: 3,
            max_resample_attempts: 8,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create a new config with custom batch size.
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Create a new config with custom reward.
    pub fn with_reward(mut self, reward: u32) -> Self {
        self.correct_reward = reward;
        self
    }

    /// Create a new config with custom resample attempts.
    pub fn with_resample_attempts(mut self, attempts: u32) -> Self {
        self.max_resample_attempts = attempts;
        self
    }

    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
