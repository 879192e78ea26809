//! Engine errors.
//!
//! Bad input is not an error here: it is a regular `Command::Invalid` that the
//! state machine answers with a retry. These variants cover the process-level
//! failures around the game.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// The output sink failed to write.
    #[error("console i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
