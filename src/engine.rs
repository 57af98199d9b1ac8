//! The execution engine. One `Engine` runs one automaton instance over one
//! input tape, producing a deterministic sequence of configuration
//! snapshots.

use crate::table::TransitionTable;
use crate::tape::Tape;
use crate::types::{AutomatonError, Configuration, Halt, Status, Step};
use std::sync::Arc;

/// Runs a [`TransitionTable`] over a [`Tape`], one step at a time.
///
/// The table is shared read-only behind an `Arc`, so many engines can run
/// different inputs against the same automaton in parallel. Each engine
/// exclusively owns its tape and its run history; a single engine must not
/// be stepped from multiple threads.
pub struct Engine {
    table: Arc<TransitionTable>,
    tape: Tape,
    state: String,
    status: Status,
    history: Vec<Configuration>,
}

impl Engine {
    /// Binds a table to an input tape. The engine starts in
    /// [`Status::Ready`] with an empty history.
    pub fn new(table: Arc<TransitionTable>, tape: Tape) -> Self {
        let state = table.init_state().to_string();

        Self {
            table,
            tape,
            state,
            status: Status::Ready,
            history: Vec::new(),
        }
    }

    /// Discards the current run and loads a fresh input tape: history
    /// cleared, state back to the table's initial state, status
    /// [`Status::Ready`]. Use this to reuse one table across runs.
    pub fn reset(&mut self, tape: Tape) {
        self.tape = tape;
        self.state = self.table.init_state().to_string();
        self.status = Status::Ready;
        self.history.clear();
    }

    /// Executes a single step.
    ///
    /// The current configuration is recorded first, then the halting
    /// predicates are evaluated in priority order: accept, reject, stop,
    /// missing transition. Accept and reject are definitive verdicts and
    /// outrank table lookup, since a well-formed table need not define
    /// outgoing rules for its terminal states. Only when none of them
    /// applies is the matching rule applied: write at the head, move the
    /// head, enter the next state.
    ///
    /// Stepping a halted engine is a caller error and fails with
    /// [`AutomatonError::AlreadyHalted`]. Stepping a paused engine
    /// resumes it.
    pub fn step(&mut self) -> Result<Step, AutomatonError> {
        if let Status::Halted(halt) = self.status {
            return Err(AutomatonError::AlreadyHalted(halt));
        }

        self.history.push(Configuration::capture(&self.state, &self.tape));

        if self.table.is_accept(&self.state) {
            return Ok(self.halt(Halt::Accepted));
        }
        if self.table.is_reject(&self.state) {
            return Ok(self.halt(Halt::Rejected));
        }

        // Pause once per arrival in a stop state; the next step resumes.
        if self.status != Status::Paused && self.table.is_stop(&self.state) {
            self.status = Status::Paused;
            return Ok(Step::Paused);
        }

        let symbol = self.tape.read();
        let transition = match self.table.lookup(&self.state, symbol) {
            Ok(transition) => transition.clone(),
            Err(_) => return Ok(self.halt(Halt::NoTransition)),
        };

        self.tape.write(transition.write);
        self.tape.move_head(transition.direction);
        self.state = transition.to_state;
        self.status = Status::Running;

        Ok(Step::Advanced)
    }

    /// Steps until the machine halts or pauses, with no bound. A machine
    /// that never halts keeps this spinning; use
    /// [`run_to_completion`](Self::run_to_completion) with a bound when
    /// that is a concern.
    pub fn run(&mut self) -> Result<Step, AutomatonError> {
        self.run_to_completion(None)
    }

    /// Steps until the machine halts or pauses, or until `max_steps`
    /// applied transitions have been spent.
    ///
    /// An exhausted bound fails with
    /// [`AutomatonError::StepLimitExceeded`]; the engine itself is left
    /// runnable, so a caller may raise the bound and continue.
    pub fn run_to_completion(&mut self, max_steps: Option<usize>) -> Result<Step, AutomatonError> {
        let mut taken = 0;

        loop {
            if let Some(limit) = max_steps {
                if taken >= limit {
                    return Err(AutomatonError::StepLimitExceeded(limit));
                }
            }

            match self.step()? {
                Step::Advanced => taken += 1,
                outcome => return Ok(outcome),
            }
        }
    }

    /// Every configuration recorded since the last reset, in step order.
    pub fn history(&self) -> &[Configuration] {
        &self.history
    }

    /// The state the machine is currently in.
    pub fn state(&self) -> &str {
        &self.state
    }

    /// Where the engine is in its lifecycle.
    pub fn status(&self) -> Status {
        self.status
    }

    /// True once a terminal verdict has been reached.
    pub fn is_halted(&self) -> bool {
        matches!(self.status, Status::Halted(_))
    }

    /// The tape as it currently stands.
    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    /// The table this engine runs.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    fn halt(&mut self, halt: Halt) -> Step {
        self.status = Status::Halted(halt);
        Step::Halted(halt)
    }
}
