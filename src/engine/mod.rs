//! Game engine: the phase controller and its console plumbing.
//!
//! ## Key Types
//!
//! - `GameEngine`: owns the session and drives the two phases
//! - `GameEvent`: every message occasion the engine produces
//! - `InputSource` / `OutputSink`: the console seam
//! - `LineConsole`: text console over any reader/writer pair
//! - `ScriptedConsole`: queued input, recorded output

pub mod console;
pub mod controller;
pub mod event;

pub use console::{InputSource, LineConsole, OutputSink, ScriptedConsole};
pub use controller::{ControllerState, GameEngine, RunOutcome};
pub use event::GameEvent;
