//! Console abstraction.
//!
//! The engine reads through an `InputSource` and writes through an
//! `OutputSink`. `LineConsole` backs both with any `BufRead`/`Write` pair
//! (stdin/stdout in the binary). `ScriptedConsole` replays queued lines and
//! records events, for tests and demos.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use log::warn;

use super::event::GameEvent;
use crate::core::error::GameError;

/// Source of raw input lines.
pub trait InputSource {
    /// Read one line. `None` means end of stream or an unreadable line.
    fn read_line(&mut self) -> Option<String>;
}

/// Destination for game events.
pub trait OutputSink {
    /// Deliver one event to the player.
    fn emit(&mut self, event: &GameEvent) -> Result<(), GameError>;
}

/// Line-oriented text console over a reader and a writer.
pub struct LineConsole<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consume the console and return the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl LineConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> InputSource for LineConsole<R, W> {
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.reader.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                warn!("Unreadable input line: {}", err);
                None
            }
        }
    }
}

impl<R: BufRead, W: Write> OutputSink for LineConsole<R, W> {
    fn emit(&mut self, event: &GameEvent) -> Result<(), GameError> {
        if event.is_prompt() {
            write!(self.writer, "{}", event)?;
        } else {
            writeln!(self.writer, "{}", event)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

/// Console that replays queued input and records every event.
///
/// Once the queue is empty every read reports end of stream.
#[derive(Clone, Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    events: Vec<GameEvent>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            events: Vec::new(),
        }
    }

    /// Queue another input line.
    pub fn push_input(&mut self, line: impl Into<String>) {
        self.inputs.push_back(line.into());
    }

    /// Events emitted so far, in order.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Drain the recorded events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Input lines not yet read.
    #[must_use]
    pub fn remaining_inputs(&self) -> usize {
        self.inputs.len()
    }
}

impl InputSource for ScriptedConsole {
    fn read_line(&mut self) -> Option<String> {
        self.inputs.pop_front()
    }
}

impl OutputSink for ScriptedConsole {
    fn emit(&mut self, event: &GameEvent) -> Result<(), GameError> {
        self.events.push(*event);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::hand::Phase;
    use crate::core::player::TurnHolder;

    #[test]
    fn test_line_console_reads_lines() {
        let input = io::Cursor::new("1\n 2 \n");
        let mut console = LineConsole::new(input, Vec::new());

        assert_eq!(console.read_line().as_deref(), Some("1\n"));
        assert_eq!(console.read_line().as_deref(), Some(" 2 \n"));
        assert_eq!(console.read_line(), None);
    }

    #[test]
    fn test_line_console_writes_events() {
        let mut console = LineConsole::new(io::Cursor::new(""), Vec::new());

        console.emit(&GameEvent::Prompt(Phase::Main)).unwrap();
        console.emit(&GameEvent::InvalidInput).unwrap();
        console
            .emit(&GameEvent::TurnAnnouncement(TurnHolder::User))
            .unwrap();

        let output = String::from_utf8(console.into_writer()).unwrap();
        assert_eq!(
            output,
            "Scissors(1), Rock(2), Paper(3)! <quit: 0> : Invalid input. Please try again.\n[User turn]\n"
        );
    }

    #[test]
    fn test_scripted_console() {
        let mut console = ScriptedConsole::new(["1", "0"]);
        console.push_input("3");

        assert_eq!(console.remaining_inputs(), 3);
        assert_eq!(console.read_line().as_deref(), Some("1"));
        assert_eq!(console.read_line().as_deref(), Some("0"));
        assert_eq!(console.read_line().as_deref(), Some("3"));
        assert_eq!(console.read_line(), None);

        console.emit(&GameEvent::EndOfGame).unwrap();
        assert_eq!(console.events(), &[GameEvent::EndOfGame]);
        assert_eq!(console.take_events().len(), 1);
        assert!(console.events().is_empty());
    }
}
