//! Raw input interpretation.
//!
//! A line of console text becomes a `Command`. All whitespace is removed
//! first, so `" 2 "` and `"2\n"` both read as `2`. Only the exact strings
//! `0`..`3` are recognized; absent input (end of stream) is `Invalid`.

use serde::{Deserialize, Serialize};

use crate::core::hand::{Hand, Phase};

/// What the user asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// End the game.
    Quit,
    /// Play a hand (already remapped for the phase).
    HandChoice(Hand),
    /// Anything unrecognized.
    Invalid,
}

/// Interpret a raw input line for `phase`.
///
/// ```
/// use hand_game::core::{Hand, Phase};
/// use hand_game::rules::{interpret, Command};
///
/// assert_eq!(interpret(Some(" 1 "), Phase::Main), Command::HandChoice(Hand::Scissors));
/// assert_eq!(interpret(Some("1"), Phase::Tiebreak), Command::HandChoice(Hand::Rock));
/// assert_eq!(interpret(Some("0"), Phase::Main), Command::Quit);
/// assert_eq!(interpret(None, Phase::Main), Command::Invalid);
/// ```
#[must_use]
pub fn interpret(raw: Option<&str>, phase: Phase) -> Command {
    let Some(raw) = raw else {
        return Command::Invalid;
    };

    let stripped: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    match stripped.as_str() {
        "0" => Command::Quit,
        "1" => hand_choice(phase, 1),
        "2" => hand_choice(phase, 2),
        "3" => hand_choice(phase, 3),
        _ => Command::Invalid,
    }
}

fn hand_choice(phase: Phase, code: u8) -> Command {
    phase
        .hand_for(code)
        .map_or(Command::Invalid, Command::HandChoice)
}
