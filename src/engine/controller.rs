//! Phase controller: the two-phase turn/result state machine.
//!
//! ## States
//!
//! - `AwaitingMainInput`: opening rock-paper-scissors round
//! - `AwaitingTiebreakInput`: sudden-death advantage round
//! - `Terminated`: quit, or a tiebreak draw
//!
//! ## Transitions
//!
//! | state    | input       | effect                                                 |
//! |----------|-------------|--------------------------------------------------------|
//! | main     | quit        | end of game                                            |
//! | main     | invalid     | error, main prompt again                               |
//! | main     | draw        | draw, main prompt again                                |
//! | main     | win / lose  | result, winner takes the turn, enter tiebreak          |
//! | tiebreak | quit        | end of game                                            |
//! | tiebreak | invalid     | error, turn flips, announce, tiebreak prompt again     |
//! | tiebreak | win / lose  | winner takes the turn, announce, tiebreak prompt again |
//! | tiebreak | draw        | current turn holder wins, end of game                  |
//!
//! Retries are plain loop iterations in `run`, one `step` per input line.
//!
//! The overall winner of a tiebreak draw is whoever held the turn going into
//! that round, even when that holder came from an invalid-input flip rather
//! than from the side that last won a round.

use log::{debug, info, trace, warn};
use serde::{Deserialize, Serialize};

use super::console::{InputSource, OutputSink};
use super::event::GameEvent;
use crate::core::{
    GameConfig, GameError, GameRng, GameSession, Hand, HandSource, Phase, RoundRecord, TurnHolder,
};
use crate::rules::{interpret, judge, Command, RoundOutcome};

/// Where the state machine is waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControllerState {
    AwaitingMainInput,
    AwaitingTiebreakInput,
    Terminated,
}

/// How a session ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// The user entered the quit command.
    Quit,
    /// A tiebreak draw declared this side the winner.
    Decided(TurnHolder),
    /// The input stream closed and the configured limit was reached.
    InputClosed,
}

/// The game engine: owns the session, the hand source and the state machine.
pub struct GameEngine<H: HandSource = GameRng> {
    config: GameConfig,
    hands: H,
    session: GameSession,
    state: ControllerState,
    outcome: Option<RunOutcome>,
}

impl GameEngine<GameRng> {
    /// Create an engine drawing the computer's hands from a `GameRng`.
    ///
    /// Uses `config.seed` when set, OS entropy otherwise.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_hands(config, rng)
    }
}

impl<H: HandSource> GameEngine<H> {
    /// Create an engine with a custom hand source.
    pub fn with_hands(config: GameConfig, hands: H) -> Result<Self, GameError> {
        config.validate()?;
        let session = GameSession::new(config.record_history);
        Ok(Self {
            config,
            hands,
            session,
            state: ControllerState::AwaitingMainInput,
            outcome: None,
        })
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Check if the session has ended.
    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.state == ControllerState::Terminated
    }

    /// How the session ended, once it has.
    #[must_use]
    pub fn outcome(&self) -> Option<RunOutcome> {
        self.outcome
    }

    /// Session state.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The hand source.
    #[must_use]
    pub fn hand_source(&self) -> &H {
        &self.hands
    }

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Emit the opening main-phase prompt.
    pub fn start<S: OutputSink>(&mut self, sink: &mut S) -> Result<(), GameError> {
        info!("Session started");
        sink.emit(&GameEvent::Prompt(Phase::Main))
    }

    /// Process one input attempt.
    ///
    /// `raw` is the line as read, or `None` at end of stream. Once the session
    /// has terminated further calls do nothing.
    pub fn step<S: OutputSink>(
        &mut self,
        raw: Option<&str>,
        sink: &mut S,
    ) -> Result<ControllerState, GameError> {
        if self.is_terminated() {
            return Ok(self.state);
        }

        let phase = self.session.phase();
        let command = interpret(raw, phase);
        trace!("{} input {:?} => {:?}", phase, raw, command);

        match self.state {
            ControllerState::AwaitingMainInput => self.step_main(command, sink)?,
            ControllerState::AwaitingTiebreakInput => self.step_tiebreak(command, sink)?,
            ControllerState::Terminated => {}
        }

        Ok(self.state)
    }

    /// Play a whole session against `console`.
    ///
    /// Emits the opening prompt, then reads and steps until the session
    /// terminates or the closed-input limit is reached.
    pub fn run<C>(&mut self, console: &mut C) -> Result<RunOutcome, GameError>
    where
        C: InputSource + OutputSink,
    {
        self.start(console)?;

        let mut closed_reads = 0u32;
        loop {
            let line = console.read_line();
            closed_reads = match line {
                Some(_) => 0,
                None => closed_reads + 1,
            };

            self.step(line.as_deref(), console)?;

            if let Some(outcome) = self.outcome {
                return Ok(outcome);
            }

            if let Some(limit) = self.config.closed_input_limit {
                if closed_reads >= limit {
                    warn!("Input closed after {} end-of-stream reads", closed_reads);
                    self.finish(RunOutcome::InputClosed);
                    return Ok(RunOutcome::InputClosed);
                }
            }
        }
    }

    // === Phase handlers ===

    fn step_main<S: OutputSink>(&mut self, command: Command, sink: &mut S) -> Result<(), GameError> {
        match command {
            Command::Quit => self.quit(sink),
            Command::Invalid => {
                sink.emit(&GameEvent::InvalidInput)?;
                sink.emit(&GameEvent::Prompt(Phase::Main))
            }
            Command::HandChoice(user) => {
                let outcome = self.play_round(Phase::Main, user);
                sink.emit(&GameEvent::RoundResult(outcome))?;

                if outcome.is_decisive() {
                    let holder = self.session.enter_tiebreak(outcome == RoundOutcome::Win);
                    self.state = ControllerState::AwaitingTiebreakInput;
                    debug!("Entering tiebreak, {} holds the turn", holder);
                    sink.emit(&GameEvent::TurnAnnouncement(holder))?;
                    sink.emit(&GameEvent::Prompt(Phase::Tiebreak))
                } else {
                    sink.emit(&GameEvent::Prompt(Phase::Main))
                }
            }
        }
    }

    fn step_tiebreak<S: OutputSink>(
        &mut self,
        command: Command,
        sink: &mut S,
    ) -> Result<(), GameError> {
        match command {
            Command::Quit => self.quit(sink),
            Command::Invalid => {
                sink.emit(&GameEvent::InvalidInput)?;
                let holder = self.session.flip_turn();
                sink.emit(&GameEvent::TurnAnnouncement(holder))?;
                sink.emit(&GameEvent::Prompt(Phase::Tiebreak))
            }
            Command::HandChoice(user) => {
                let outcome = self.play_round(Phase::Tiebreak, user);

                if outcome.is_decisive() {
                    let holder = self.session.award_turn(outcome == RoundOutcome::Win);
                    sink.emit(&GameEvent::TurnAnnouncement(holder))?;
                    sink.emit(&GameEvent::Prompt(Phase::Tiebreak))
                } else {
                    let winner = self.session.turn().unwrap_or_default();
                    sink.emit(&GameEvent::Winner(winner))?;
                    sink.emit(&GameEvent::EndOfGame)?;
                    self.finish(RunOutcome::Decided(winner));
                    Ok(())
                }
            }
        }
    }

    /// Draw the computer's hand, judge and record the round.
    fn play_round(&mut self, phase: Phase, user: Hand) -> RoundOutcome {
        let computer = self.hands.next_hand();
        let outcome = judge(user, computer);
        debug!("{} round: {} vs {} => {:?}", phase, user, computer, outcome);

        self.session.record(RoundRecord {
            phase,
            user,
            computer,
            outcome,
        });
        outcome
    }

    fn quit<S: OutputSink>(&mut self, sink: &mut S) -> Result<(), GameError> {
        sink.emit(&GameEvent::EndOfGame)?;
        self.finish(RunOutcome::Quit);
        Ok(())
    }

    fn finish(&mut self, outcome: RunOutcome) {
        info!(
            "Session ended: {:?} after {} recorded round(s)",
            outcome,
            self.session.rounds_played()
        );
        self.state = ControllerState::Terminated;
        self.outcome = Some(outcome);
    }
}
