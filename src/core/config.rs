//! Session configuration.

use serde::{Deserialize, Serialize};

use super::error::GameError;

/// Configuration for a single play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for the computer's hands.
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,

    /// Consecutive end-of-stream reads tolerated before the run loop gives up.
    /// Each one is still handled as invalid input. `None` = never give up.
    pub closed_input_limit: Option<u32>,

    /// Keep a record of every resolved round in the session.
    pub record_history: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            closed_input_limit: None,
            record_history: true,
        }
    }
}

impl GameConfig {
    /// Create a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the closed-input limit.
    pub fn with_closed_input_limit(mut self, limit: u32) -> Self {
        self.closed_input_limit = Some(limit);
        self
    }

    /// Enable or disable round history.
    pub fn with_history(mut self, record: bool) -> Self {
        self.record_history = record;
        self
    }

    /// Check the config for values the engine cannot run with.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.closed_input_limit == Some(0) {
            return Err(GameError::InvalidConfig(
                "closed_input_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
