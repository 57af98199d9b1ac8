//! This crate provides a deterministic finite-tape automaton executor.
//! A validated, immutable [`TransitionTable`] describes the machine; an
//! [`Engine`] runs it over an input [`Tape`] step by step, recording every
//! intermediate [`Configuration`] until the machine accepts, rejects, or
//! gets stuck with no matching rule. Stop states pause a run for
//! step-by-step inspection without ending it.
//!
//! Tables are built explicitly through [`TableBuilder`] and shared
//! read-only (wrap one in an `Arc` to run many inputs in parallel); each
//! engine exclusively owns its tape and history.

pub mod engine;
pub mod samples;
pub mod table;
pub mod tape;
pub mod types;
pub mod validate;

/// Re-exports the `Engine` struct from the engine module.
pub use engine::Engine;
/// Re-exports the `TransitionTable` struct and its builder from the table module.
pub use table::{TableBuilder, TransitionTable};
/// Re-exports the `Tape` struct from the tape module.
pub use tape::Tape;
/// Re-exports the core data types and outcome enums from the types module.
pub use types::{
    AutomatonError, Configuration, Direction, Halt, Status, Step, Transition,
    DEFAULT_BLANK_SYMBOL,
};
/// Re-exports the table construction error from the validate module.
pub use validate::TableError;
