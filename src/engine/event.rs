//! Output events.
//!
//! Every occasion on which the engine talks to the player is a `GameEvent`.
//! The occasions and their order are fixed by the state machine; the text is
//! only the `Display` rendering and can be swapped out by a custom sink.

use serde::{Deserialize, Serialize};

use crate::core::hand::Phase;
use crate::core::player::TurnHolder;
use crate::rules::RoundOutcome;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ask for input in the given phase. Rendered without a line break.
    Prompt(Phase),
    /// The last input was not recognized.
    InvalidInput,
    /// Result of a main-phase round.
    RoundResult(RoundOutcome),
    /// Announce who holds the tiebreak turn.
    TurnAnnouncement(TurnHolder),
    /// Overall winner, declared by a tiebreak draw.
    Winner(TurnHolder),
    /// The game ended.
    EndOfGame,
}

impl GameEvent {
    /// Prompts stay on the input line; everything else is a full line.
    #[must_use]
    pub const fn is_prompt(&self) -> bool {
        matches!(self, GameEvent::Prompt(_))
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::Prompt(phase) => f.write_str(&phase.prompt()),
            GameEvent::InvalidInput => f.write_str("Invalid input. Please try again."),
            GameEvent::RoundResult(outcome) => write!(f, "{}", outcome),
            GameEvent::TurnAnnouncement(holder) => write!(f, "[{} turn]", holder),
            GameEvent::Winner(holder) => write!(f, "{} wins the game!", holder),
            GameEvent::EndOfGame => f.write_str("Game over"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_prompts_are_prompts() {
        assert!(GameEvent::Prompt(Phase::Main).is_prompt());
        assert!(GameEvent::Prompt(Phase::Tiebreak).is_prompt());
        assert!(!GameEvent::InvalidInput.is_prompt());
        assert!(!GameEvent::EndOfGame.is_prompt());
    }

    #[test]
    fn test_rendering() {
        assert_eq!(
            GameEvent::TurnAnnouncement(TurnHolder::Computer).to_string(),
            "[Computer turn]"
        );
        assert_eq!(GameEvent::Winner(TurnHolder::User).to_string(), "User wins the game!");
        assert_eq!(GameEvent::RoundResult(RoundOutcome::Draw).to_string(), "Draw!");
        assert!(GameEvent::Prompt(Phase::Tiebreak).to_string().starts_with("Rock(1)"));
    }
}
