//! Game rules: judging rounds and interpreting input.
//!
//! Both halves are pure functions. The phase controller in `engine` calls
//! into them but they never touch session state.

pub mod input;
pub mod judge;

pub use input::{interpret, Command};
pub use judge::{judge, RoundOutcome};
