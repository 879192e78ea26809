//! # hand-game
//!
//! A two-phase hand game against the computer.
//!
//! 1. **Main phase**: a plain rock-paper-scissors round. A draw restarts it.
//! 2. **Tiebreak phase**: entered after any decisive main round. The winner
//!    holds the turn; hand codes are remapped; every decisive round hands the
//!    turn to its winner; invalid input flips it. The first draw ends the game
//!    and the side holding the turn wins.
//!
//! ## Modules
//!
//! - `core`: Hands, phases, sides, RNG, configuration, session state
//! - `rules`: Round judging and input interpretation
//! - `engine`: Phase controller, output events, console abstraction
//!
//! ## Example
//!
//! ```
//! use hand_game::core::{GameConfig, Hand, ScriptedHands};
//! use hand_game::engine::{GameEngine, GameEvent, RunOutcome, ScriptedConsole};
//!
//! let hands = ScriptedHands::new([Hand::Paper]);
//! let mut engine = GameEngine::with_hands(GameConfig::default(), hands).unwrap();
//! let mut console = ScriptedConsole::new(["0"]);
//!
//! assert_eq!(engine.run(&mut console).unwrap(), RunOutcome::Quit);
//! assert_eq!(console.events().last(), Some(&GameEvent::EndOfGame));
//! ```

pub mod core;
pub mod engine;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    GameConfig, GameError, GameRng, GameRngState, GameSession, Hand, HandSource, Phase,
    RoundRecord, ScriptedHands, TurnHolder,
};

pub use crate::rules::{interpret, judge, Command, RoundOutcome};

pub use crate::engine::{
    ControllerState, GameEngine, GameEvent, InputSource, LineConsole, OutputSink, RunOutcome,
    ScriptedConsole,
};
