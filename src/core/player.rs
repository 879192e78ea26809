//! Sides of the table.
//!
//! Only two sides ever play: the user at the console and the computer.
//! `TurnHolder` records which of them the tiebreak currently announces as
//! holding the turn.

use serde::{Deserialize, Serialize};

/// The side whose turn is announced during the tiebreak.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnHolder {
    #[default]
    User,
    Computer,
}

impl TurnHolder {
    /// The other side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            TurnHolder::User => TurnHolder::Computer,
            TurnHolder::Computer => TurnHolder::User,
        }
    }

    /// Winner of a decisive round: the user if they won, otherwise the computer.
    #[must_use]
    pub const fn from_user_win(user_won: bool) -> Self {
        if user_won {
            TurnHolder::User
        } else {
            TurnHolder::Computer
        }
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TurnHolder::User => "User",
            TurnHolder::Computer => "Computer",
        }
    }
}

impl std::fmt::Display for TurnHolder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
