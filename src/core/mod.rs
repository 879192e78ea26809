//! Core game types: hands, phases, sides, RNG, configuration, session state.
//!
//! Everything here is plain data plus small lookups. The rules live in
//! `rules` and the state machine in `engine`.

pub mod config;
pub mod error;
pub mod hand;
pub mod player;
pub mod rng;
pub mod session;

pub use config::GameConfig;
pub use error::GameError;
pub use hand::{Hand, Phase};
pub use player::TurnHolder;
pub use rng::{GameRng, GameRngState, HandSource, ScriptedHands};
pub use session::{GameSession, RoundRecord};
