//! Core data types shared across the crate: transition rules, head
//! directions, per-step outcomes, configuration snapshots, and the error
//! taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::tape::Tape;
use crate::validate::TableError;

/// The blank symbol used for unwritten tape cells unless a machine
/// declares its own.
pub const DEFAULT_BLANK_SYMBOL: char = '_';

/// The directions a tape head can move after applying a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
    /// Keep the head where it is.
    Stay,
}

/// A single deterministic transition rule.
///
/// When the machine is in `from_state` and reads `read` under the head, it
/// writes `write`, moves the head in `direction`, and enters `to_state`.
/// A well-formed table holds at most one rule per `(from_state, read)`
/// pair; [`TableBuilder`](crate::table::TableBuilder) rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// The state this rule fires from.
    pub from_state: String,
    /// The symbol that must be under the head.
    pub read: char,
    /// The state the machine enters.
    pub to_state: String,
    /// The symbol written at the head before moving.
    pub write: char,
    /// Where the head moves afterwards.
    pub direction: Direction,
}

/// A snapshot of the machine at one instant: current state, the recorded
/// tape cells, and the head position.
///
/// `origin` is the tape position of `tape[0]`, so the record stays
/// self-describing when the head has wandered left of the initial cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// The state the machine was in.
    pub state: String,
    /// The recorded tape cells, leftmost first.
    pub tape: Vec<char>,
    /// Tape position of the first recorded cell.
    pub origin: i64,
    /// Absolute head position. May be negative.
    pub head: i64,
}

impl Configuration {
    /// Captures the given state and tape as a snapshot.
    ///
    /// The recorded cells always cover the head position, padding with the
    /// tape's blank symbol where nothing has been written yet.
    pub fn capture(state: &str, tape: &Tape) -> Self {
        let start = tape.origin().min(tape.head());
        let end = (tape.origin() + tape.symbols().len() as i64).max(tape.head() + 1);

        Self {
            state: state.to_string(),
            tape: (start..end).map(|pos| tape.get(pos)).collect(),
            origin: start,
            head: tape.head(),
        }
    }
}

impl fmt::Display for Configuration {
    /// Renders a human-readable record with the head cell bracketed,
    /// e.g. `q1: 1[0]1`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.state)?;
        for (i, symbol) in self.tape.iter().enumerate() {
            if self.origin + i as i64 == self.head {
                write!(f, "[{}]", symbol)?;
            } else {
                write!(f, "{}", symbol)?;
            }
        }
        Ok(())
    }
}

/// The outcome of a single [`Engine::step`](crate::engine::Engine::step).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// A transition was applied; the machine keeps running.
    Advanced,
    /// The current state is in the stop set. Stepping again resumes.
    Paused,
    /// The machine reached a terminal verdict.
    Halted(Halt),
}

/// Terminal verdicts. Unlike [`Step::Paused`], none of these can be
/// resumed without a reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Halt {
    /// The machine reached the accept state.
    Accepted,
    /// The machine reached the reject state.
    Rejected,
    /// No rule matched the current state and symbol.
    NoTransition,
}

/// Lifecycle of an [`Engine`](crate::engine::Engine) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Tape loaded, head at the start, history empty.
    Ready,
    /// At least one transition has been applied.
    Running,
    /// Paused in a stop state; stepping resumes.
    Paused,
    /// Terminal. Only `reset` makes the engine usable again.
    Halted(Halt),
}

/// Errors surfaced by table construction and engine execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutomatonError {
    /// No rule is defined for the given state and symbol. Raised by table
    /// lookup; the engine turns it into [`Halt::NoTransition`] rather than
    /// propagating it.
    #[error("no transition for state `{state}` reading `{symbol}`")]
    NoMatchingTransition {
        /// The state the machine was in.
        state: String,
        /// The symbol under the head.
        symbol: char,
    },
    /// `step` or `run` was invoked after the engine halted. This is a
    /// caller contract violation, not a machine outcome.
    #[error("step invoked after the engine halted ({0:?})")]
    AlreadyHalted(Halt),
    /// The optional bound passed to `run_to_completion` was exhausted
    /// before the machine halted or paused.
    #[error("step limit of {0} exceeded before the machine halted")]
    StepLimitExceeded(usize),
    /// A transition table failed its construction-time checks.
    #[error("invalid transition table: {0}")]
    Table(#[from] TableError),
}
