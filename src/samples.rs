//! Ready-made transition tables: small machines used in documentation and
//! tests, built explicitly instead of loaded from a global registry.

use crate::table::TransitionTable;
use crate::types::Direction;
use crate::validate::TableError;

/// Appends a `1` to a unary number: scans right over the `1`s and writes
/// one more on the first blank cell.
pub fn unary_increment() -> Result<TransitionTable, TableError> {
    TransitionTable::builder()
        .init_state("scan")
        .accept_state("done")
        .machine_alphabet(['1'])
        .tape_alphabet(['1', '_'])
        .transition("scan", '1', "scan", '1', Direction::Right)
        .transition("scan", '_', "done", '1', Direction::Stay)
        .build()
}

/// Flips every bit of a binary word and accepts on the trailing blank.
pub fn binary_complement() -> Result<TransitionTable, TableError> {
    TransitionTable::builder()
        .init_state("scan")
        .accept_state("done")
        .machine_alphabet(['0', '1'])
        .tape_alphabet(['0', '1', '_'])
        .transition("scan", '0', "scan", '1', Direction::Right)
        .transition("scan", '1', "scan", '0', Direction::Right)
        .transition("scan", '_', "done", '_', Direction::Stay)
        .build()
}

/// Scans a word of `a`s and `b`s left to right, pausing after every `b`.
/// The `mark` state sits in the stop set, so a driver gets control back at
/// each checkpoint and resumes by stepping again.
pub fn checkpointed_scanner() -> Result<TransitionTable, TableError> {
    TransitionTable::builder()
        .init_state("scan")
        .accept_state("done")
        .stop_state("mark")
        .machine_alphabet(['a', 'b'])
        .tape_alphabet(['a', 'b', '_'])
        .transition("scan", 'a', "scan", 'a', Direction::Right)
        .transition("scan", 'b', "mark", 'b', Direction::Right)
        .transition("mark", 'a', "scan", 'a', Direction::Right)
        .transition("mark", 'b', "mark", 'b', Direction::Right)
        .transition("scan", '_', "done", '_', Direction::Stay)
        .transition("mark", '_', "done", '_', Direction::Stay)
        .build()
}
