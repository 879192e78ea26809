//! Mutable per-session game state.
//!
//! ## GameSession
//!
//! - Current phase
//! - Turn holder (only set once the tiebreak starts)
//! - Outcome of the latest main-phase round
//! - History of resolved rounds
//!
//! Only the phase controller mutates a session; everything else reads it.

use serde::{Deserialize, Serialize};

use super::hand::{Hand, Phase};
use super::player::TurnHolder;
use crate::rules::RoundOutcome;

/// One resolved round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Phase the round was played in.
    pub phase: Phase,
    /// Hand the user chose, after the phase remapping.
    pub user: Hand,
    /// Hand drawn for the computer.
    pub computer: Hand,
    /// Outcome from the user's side.
    pub outcome: RoundOutcome,
}

/// State of one play session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    phase: Phase,
    turn: Option<TurnHolder>,
    last_main_outcome: Option<RoundOutcome>,
    record_history: bool,
    history: Vec<RoundRecord>,
}

impl GameSession {
    /// Create a session at the start of the main phase.
    #[must_use]
    pub fn new(record_history: bool) -> Self {
        Self {
            record_history,
            ..Self::default()
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current turn holder. `None` until the tiebreak starts.
    #[must_use]
    pub fn turn(&self) -> Option<TurnHolder> {
        self.turn
    }

    /// Outcome of the most recent main-phase round, if any was played.
    #[must_use]
    pub fn last_main_outcome(&self) -> Option<RoundOutcome> {
        self.last_main_outcome
    }

    /// Resolved rounds, oldest first. Empty when history is disabled.
    #[must_use]
    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    /// Number of recorded rounds.
    #[must_use]
    pub fn rounds_played(&self) -> usize {
        self.history.len()
    }

    // === Transitions (phase controller only) ===

    pub(crate) fn record(&mut self, record: RoundRecord) {
        if record.phase == Phase::Main {
            self.last_main_outcome = Some(record.outcome);
        }
        if self.record_history {
            self.history.push(record);
        }
    }

    /// Move into the tiebreak, handing the turn to the main-phase winner.
    pub(crate) fn enter_tiebreak(&mut self, user_won: bool) -> TurnHolder {
        let holder = TurnHolder::from_user_win(user_won);
        self.phase = Phase::Tiebreak;
        self.turn = Some(holder);
        holder
    }

    /// Hand the turn to the winner of a decisive tiebreak round.
    pub(crate) fn award_turn(&mut self, user_won: bool) -> TurnHolder {
        let holder = TurnHolder::from_user_win(user_won);
        self.turn = Some(holder);
        holder
    }

    /// Invert the turn holder after invalid tiebreak input.
    pub(crate) fn flip_turn(&mut self) -> TurnHolder {
        let holder = self.turn.unwrap_or_default().flip();
        self.turn = Some(holder);
        holder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(phase: Phase, outcome: RoundOutcome) -> RoundRecord {
        RoundRecord {
            phase,
            user: Hand::Rock,
            computer: Hand::Rock,
            outcome,
        }
    }

    #[test]
    fn test_new_session() {
        let session = GameSession::new(true);
        assert_eq!(session.phase(), Phase::Main);
        assert_eq!(session.turn(), None);
        assert_eq!(session.last_main_outcome(), None);
        assert_eq!(session.rounds_played(), 0);
    }

    #[test]
    fn test_enter_tiebreak() {
        let mut session = GameSession::new(true);
        assert_eq!(session.enter_tiebreak(false), TurnHolder::Computer);
        assert_eq!(session.phase(), Phase::Tiebreak);
        assert_eq!(session.turn(), Some(TurnHolder::Computer));
    }

    #[test]
    fn test_flip_and_award() {
        let mut session = GameSession::new(true);
        session.enter_tiebreak(true);

        assert_eq!(session.flip_turn(), TurnHolder::Computer);
        assert_eq!(session.flip_turn(), TurnHolder::User);
        assert_eq!(session.award_turn(false), TurnHolder::Computer);
        assert_eq!(session.turn(), Some(TurnHolder::Computer));
    }

    #[test]
    fn test_record_tracks_main_outcome() {
        let mut session = GameSession::new(true);
        session.record(record(Phase::Main, RoundOutcome::Draw));
        session.record(record(Phase::Main, RoundOutcome::Win));
        session.record(record(Phase::Tiebreak, RoundOutcome::Lose));

        assert_eq!(session.last_main_outcome(), Some(RoundOutcome::Win));
        assert_eq!(session.rounds_played(), 3);
        assert_eq!(session.history()[2].phase, Phase::Tiebreak);
    }

    #[test]
    fn test_history_disabled() {
        let mut session = GameSession::new(false);
        session.record(record(Phase::Main, RoundOutcome::Lose));

        assert_eq!(session.rounds_played(), 0);
        assert_eq!(session.last_main_outcome(), Some(RoundOutcome::Lose));
    }

    #[test]
    fn test_session_serialization() {
        let mut session = GameSession::new(true);
        session.record(record(Phase::Main, RoundOutcome::Win));
        session.enter_tiebreak(true);

        let json = serde_json::to_string(&session).unwrap();
        let deserialized: GameSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }
}
