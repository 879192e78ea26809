//! Round judging.
//!
//! Rock beats Scissors, Scissors beats Paper, Paper beats Rock. Equal hands
//! draw. The relation is total over all nine pairs.

use serde::{Deserialize, Serialize};

use crate::core::hand::Hand;

/// Result of a single round, from the acting player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
}

impl RoundOutcome {
    /// The same round seen from the other side.
    #[must_use]
    pub const fn invert(self) -> Self {
        match self {
            RoundOutcome::Win => RoundOutcome::Lose,
            RoundOutcome::Lose => RoundOutcome::Win,
            RoundOutcome::Draw => RoundOutcome::Draw,
        }
    }

    /// Check if the round had a winner.
    #[must_use]
    pub const fn is_decisive(self) -> bool {
        !matches!(self, RoundOutcome::Draw)
    }
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundOutcome::Win => f.write_str("You win!"),
            RoundOutcome::Lose => f.write_str("You lose!"),
            RoundOutcome::Draw => f.write_str("Draw!"),
        }
    }
}

/// Judge `player` against `opponent`.
///
/// ```
/// use hand_game::core::Hand;
/// use hand_game::rules::{judge, RoundOutcome};
///
/// assert_eq!(judge(Hand::Scissors, Hand::Paper), RoundOutcome::Win);
/// assert_eq!(judge(Hand::Scissors, Hand::Rock), RoundOutcome::Lose);
/// assert_eq!(judge(Hand::Paper, Hand::Paper), RoundOutcome::Draw);
/// ```
#[must_use]
pub fn judge(player: Hand, opponent: Hand) -> RoundOutcome {
    if player == opponent {
        RoundOutcome::Draw
    } else if player.beats(opponent) {
        RoundOutcome::Win
    } else {
        RoundOutcome::Lose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rock_beats_scissors() {
        assert_eq!(judge(Hand::Rock, Hand::Scissors), RoundOutcome::Win);
        assert_eq!(judge(Hand::Scissors, Hand::Rock), RoundOutcome::Lose);
    }

    #[test]
    fn test_scissors_beats_paper() {
        assert_eq!(judge(Hand::Scissors, Hand::Paper), RoundOutcome::Win);
        assert_eq!(judge(Hand::Paper, Hand::Scissors), RoundOutcome::Lose);
    }

    #[test]
    fn test_paper_beats_rock() {
        assert_eq!(judge(Hand::Paper, Hand::Rock), RoundOutcome::Win);
        assert_eq!(judge(Hand::Rock, Hand::Paper), RoundOutcome::Lose);
    }

    #[test]
    fn test_all_outcomes() {
        let mut wins = 0;
        let mut losses = 0;
        let mut draws = 0;

        for a in Hand::ALL {
            for b in Hand::ALL {
                match judge(a, b) {
                    RoundOutcome::Win => wins += 1,
                    RoundOutcome::Lose => losses += 1,
                    RoundOutcome::Draw => draws += 1,
                }
            }
        }

        assert_eq!(wins, 3);
        assert_eq!(losses, 3);
        assert_eq!(draws, 3);
    }

    #[test]
    fn test_invert() {
        assert_eq!(RoundOutcome::Win.invert(), RoundOutcome::Lose);
        assert_eq!(RoundOutcome::Lose.invert(), RoundOutcome::Win);
        assert_eq!(RoundOutcome::Draw.invert(), RoundOutcome::Draw);
    }

    #[test]
    fn test_is_decisive() {
        assert!(RoundOutcome::Win.is_decisive());
        assert!(RoundOutcome::Lose.is_decisive());
        assert!(!RoundOutcome::Draw.is_decisive());
    }
}
