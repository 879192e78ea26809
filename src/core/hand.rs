//! Hands and phases.
//!
//! ## Hand
//!
//! The three rock-paper-scissors hands. A hand carries no state, only its
//! identity and a display label.
//!
//! ## Phase
//!
//! The game has two phases and each one reads the numeric codes `1`/`2`/`3`
//! differently:
//!
//! | code | Main     | Tiebreak |
//! |------|----------|----------|
//! | 1    | Scissors | Rock     |
//! | 2    | Rock     | Scissors |
//! | 3    | Paper    | Paper    |
//!
//! ```
//! use hand_game::core::{Hand, Phase};
//!
//! assert_eq!(Phase::Main.hand_for(1), Some(Hand::Scissors));
//! assert_eq!(Phase::Tiebreak.hand_for(1), Some(Hand::Rock));
//! assert_eq!(Phase::Main.hand_for(4), None);
//! ```

use serde::{Deserialize, Serialize};

/// A rock-paper-scissors hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Hand {
    Rock,
    Paper,
    Scissors,
}

impl Hand {
    /// All hands, in a fixed order.
    pub const ALL: [Hand; 3] = [Hand::Rock, Hand::Paper, Hand::Scissors];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Hand::Rock => "Rock",
            Hand::Paper => "Paper",
            Hand::Scissors => "Scissors",
        }
    }

    /// Check if this hand beats the other under cyclic dominance.
    #[must_use]
    pub fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Scissors, Hand::Paper) | (Hand::Rock, Hand::Scissors) | (Hand::Paper, Hand::Rock)
        )
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Game phase. Determines how numeric input maps to a hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// The opening rock-paper-scissors round.
    #[default]
    Main,
    /// The sudden-death advantage round.
    Tiebreak,
}

impl Phase {
    /// Hands for codes 1, 2 and 3, in that order.
    #[must_use]
    pub const fn table(self) -> [Hand; 3] {
        match self {
            Phase::Main => [Hand::Scissors, Hand::Rock, Hand::Paper],
            Phase::Tiebreak => [Hand::Rock, Hand::Scissors, Hand::Paper],
        }
    }

    /// Look up the hand for a numeric code.
    ///
    /// Returns `None` for anything outside `1..=3`.
    #[must_use]
    pub fn hand_for(self, code: u8) -> Option<Hand> {
        match code {
            1..=3 => Some(self.table()[usize::from(code - 1)]),
            _ => None,
        }
    }

    /// Input prompt for this phase, listing every code with its hand.
    #[must_use]
    pub fn prompt(self) -> String {
        let [one, two, three] = self.table();
        format!("{}(1), {}(2), {}(3)! <quit: 0> : ", one, two, three)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Main => f.write_str("Main"),
            Phase::Tiebreak => f.write_str("Tiebreak"),
        }
    }
}
