//! Construction-time checks for transition tables. A table that passes
//! these checks is immutable afterwards, so the engine never re-validates
//! anything while stepping.

use crate::table::TransitionTable;
use std::collections::HashSet;
use thiserror::Error;

/// Errors found while building a [`TransitionTable`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// No initial state was declared.
    #[error("no initial state declared")]
    MissingInitState,
    /// No accept state was declared.
    #[error("no accept state declared")]
    MissingAcceptState,
    /// Two rules share the same `(state, read symbol)` pair. Lookup is
    /// first-match-by-insertion-order, so a duplicate would be silently
    /// unreachable.
    #[error("duplicate rule for state `{state}` reading `{symbol}`")]
    DuplicateRule {
        /// The state both rules fire from.
        state: String,
        /// The symbol both rules read.
        symbol: char,
    },
    /// The accept and reject states name the same state.
    #[error("state `{0}` is both the accept and the reject state")]
    AcceptRejectOverlap(String),
    /// Rules read or write symbols missing from the declared tape
    /// alphabet.
    #[error("rule symbols missing from the tape alphabet: {0:?}")]
    UndeclaredSymbols(Vec<char>),
    /// The machine (input) alphabet must be a subset of the tape alphabet.
    #[error("machine alphabet not contained in the tape alphabet: {0:?}")]
    InputOutsideTapeAlphabet(Vec<char>),
}

/// Runs every check against a candidate table, returning the first error.
pub(crate) fn validate(table: &TransitionTable) -> Result<(), TableError> {
    let checks: [fn(&TransitionTable) -> Result<(), TableError>; 4] = [
        check_verdict_states,
        check_duplicate_rules,
        check_machine_alphabet,
        check_rule_symbols,
    ];

    checks.iter().try_for_each(|check| check(table))
}

/// The accept and reject states must be distinct; a state cannot carry
/// both verdicts.
fn check_verdict_states(table: &TransitionTable) -> Result<(), TableError> {
    match &table.reject_state {
        Some(reject) if *reject == table.accept_state => {
            Err(TableError::AcceptRejectOverlap(reject.clone()))
        }
        _ => Ok(()),
    }
}

/// Each `(state, read symbol)` pair may appear at most once.
fn check_duplicate_rules(table: &TransitionTable) -> Result<(), TableError> {
    let mut seen = HashSet::new();

    for transition in &table.transitions {
        if !seen.insert((transition.from_state.as_str(), transition.read)) {
            return Err(TableError::DuplicateRule {
                state: transition.from_state.clone(),
                symbol: transition.read,
            });
        }
    }

    Ok(())
}

fn check_machine_alphabet(table: &TransitionTable) -> Result<(), TableError> {
    let mut missing: Vec<char> = table
        .machine_alphabet
        .difference(&table.tape_alphabet)
        .copied()
        .collect();

    if missing.is_empty() {
        return Ok(());
    }

    missing.sort_unstable(); // Sort for deterministic output
    Err(TableError::InputOutsideTapeAlphabet(missing))
}

/// Every symbol a rule reads or writes must be declared. Skipped when the
/// table carries no tape alphabet at all.
fn check_rule_symbols(table: &TransitionTable) -> Result<(), TableError> {
    if table.tape_alphabet.is_empty() {
        return Ok(());
    }

    let mut undeclared: Vec<char> = table
        .transitions
        .iter()
        .flat_map(|transition| [transition.read, transition.write])
        .filter(|symbol| !table.tape_alphabet.contains(symbol))
        .collect();

    if undeclared.is_empty() {
        return Ok(());
    }

    undeclared.sort_unstable();
    undeclared.dedup();
    Err(TableError::UndeclaredSymbols(undeclared))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TransitionTable;
    use crate::types::Direction;

    #[test]
    fn duplicate_rule_is_rejected() {
        let result = TransitionTable::builder()
            .init_state("q0")
            .accept_state("qa")
            .transition("q0", '1', "qa", '1', Direction::Right)
            .transition("q0", '1', "q0", '0', Direction::Stay)
            .build();

        assert_eq!(
            result.unwrap_err(),
            TableError::DuplicateRule {
                state: "q0".to_string(),
                symbol: '1',
            }
        );
    }

    #[test]
    fn accept_reject_overlap_is_rejected() {
        let result = TransitionTable::builder()
            .init_state("q0")
            .accept_state("done")
            .reject_state("done")
            .transition("q0", '1', "done", '1', Direction::Stay)
            .build();

        assert_eq!(
            result.unwrap_err(),
            TableError::AcceptRejectOverlap("done".to_string())
        );
    }

    #[test]
    fn machine_alphabet_must_be_subset_of_tape_alphabet() {
        let result = TransitionTable::builder()
            .init_state("q0")
            .accept_state("qa")
            .machine_alphabet(['0', '1'])
            .tape_alphabet(['0', '_'])
            .transition("q0", '0', "qa", '0', Direction::Stay)
            .build();

        assert_eq!(
            result.unwrap_err(),
            TableError::InputOutsideTapeAlphabet(vec!['1'])
        );
    }

    #[test]
    fn rule_symbols_must_be_declared() {
        let result = TransitionTable::builder()
            .init_state("q0")
            .accept_state("qa")
            .tape_alphabet(['0', '1'])
            .transition("q0", '0', "qa", 'x', Direction::Stay)
            .build();

        assert_eq!(result.unwrap_err(), TableError::UndeclaredSymbols(vec!['x']));
    }

    #[test]
    fn error_display_names_the_offending_rule() {
        let error = TableError::DuplicateRule {
            state: "scan".to_string(),
            symbol: 'a',
        };

        let message = error.to_string();
        assert!(message.contains("scan"));
        assert!(message.contains('a'));
    }
}
