//! The immutable transition table: the ordered rule sequence, the declared
//! alphabets, and the distinguished states. Built once through
//! [`TableBuilder`], read-only afterwards, and safe to share across
//! engines (wrap it in an `Arc` to run many inputs in parallel).

use crate::types::{AutomatonError, Direction, Transition};
use crate::validate::{self, TableError};
use std::collections::HashSet;

/// A validated, immutable automaton definition.
///
/// Answers "what happens next" for a `(state, symbol)` pair and exposes
/// the special states and alphabets for callers that validate input words
/// before a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    pub(crate) transitions: Vec<Transition>,
    pub(crate) machine_alphabet: HashSet<char>,
    pub(crate) tape_alphabet: HashSet<char>,
    pub(crate) stop_states: HashSet<String>,
    pub(crate) init_state: String,
    pub(crate) accept_state: String,
    pub(crate) reject_state: Option<String>,
}

impl TransitionTable {
    /// Starts building a table.
    pub fn builder() -> TableBuilder {
        TableBuilder::new()
    }

    /// Returns the first rule matching `(state, symbol)` in insertion
    /// order.
    ///
    /// Failing with [`AutomatonError::NoMatchingTransition`] is not
    /// necessarily an error for the caller: it is how an automaton halts
    /// without reaching an explicit accept or reject state.
    pub fn lookup(&self, state: &str, symbol: char) -> Result<&Transition, AutomatonError> {
        self.transitions
            .iter()
            .find(|transition| transition.from_state == state && transition.read == symbol)
            .ok_or_else(|| AutomatonError::NoMatchingTransition {
                state: state.to_string(),
                symbol,
            })
    }

    /// True iff `state` is the accept state.
    pub fn is_accept(&self, state: &str) -> bool {
        self.accept_state == state
    }

    /// True iff a reject state is declared and equals `state`.
    pub fn is_reject(&self, state: &str) -> bool {
        self.reject_state.as_deref() == Some(state)
    }

    /// True iff `state` is in the stop set. Stop states pause a run for
    /// step-by-step inspection; they are not verdicts.
    pub fn is_stop(&self, state: &str) -> bool {
        self.stop_states.contains(state)
    }

    /// The state every run starts from.
    pub fn init_state(&self) -> &str {
        &self.init_state
    }

    /// The accepting state.
    pub fn accept_state(&self) -> &str {
        &self.accept_state
    }

    /// The rejecting state, if one is declared.
    pub fn reject_state(&self) -> Option<&str> {
        self.reject_state.as_deref()
    }

    /// The states that pause a run.
    pub fn stop_states(&self) -> &HashSet<String> {
        &self.stop_states
    }

    /// Symbols allowed in input words.
    pub fn machine_alphabet(&self) -> &HashSet<char> {
        &self.machine_alphabet
    }

    /// Symbols the machine may write on the tape.
    pub fn tape_alphabet(&self) -> &HashSet<char> {
        &self.tape_alphabet
    }

    /// The rules in insertion order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }
}

/// Fluent, consuming builder for [`TransitionTable`].
///
/// `build` runs every construction-time check; see
/// [`TableError`](crate::validate::TableError) for what gets rejected.
#[derive(Debug, Default)]
pub struct TableBuilder {
    transitions: Vec<Transition>,
    machine_alphabet: HashSet<char>,
    tape_alphabet: HashSet<char>,
    stop_states: HashSet<String>,
    init_state: Option<String>,
    accept_state: Option<String>,
    reject_state: Option<String>,
}

impl TableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial state (required).
    pub fn init_state(mut self, state: impl Into<String>) -> Self {
        self.init_state = Some(state.into());
        self
    }

    /// Sets the accept state (required).
    pub fn accept_state(mut self, state: impl Into<String>) -> Self {
        self.accept_state = Some(state.into());
        self
    }

    /// Sets the reject state. Leaving it unset means the machine can only
    /// halt implicitly, through a missing transition.
    pub fn reject_state(mut self, state: impl Into<String>) -> Self {
        self.reject_state = Some(state.into());
        self
    }

    /// Adds a state to the stop set.
    pub fn stop_state(mut self, state: impl Into<String>) -> Self {
        self.stop_states.insert(state.into());
        self
    }

    /// Declares input-word symbols.
    pub fn machine_alphabet(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.machine_alphabet.extend(symbols);
        self
    }

    /// Declares tape symbols. When never called, the tape alphabet is
    /// inferred from the machine alphabet and the rules at build time.
    pub fn tape_alphabet(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.tape_alphabet.extend(symbols);
        self
    }

    /// Adds a rule.
    pub fn transition(
        mut self,
        from: impl Into<String>,
        read: char,
        to: impl Into<String>,
        write: char,
        direction: Direction,
    ) -> Self {
        self.transitions.push(Transition {
            from_state: from.into(),
            read,
            to_state: to.into(),
            write,
            direction,
        });
        self
    }

    /// Adds a pre-built rule.
    pub fn push(mut self, transition: Transition) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Validates and constructs the table.
    pub fn build(self) -> Result<TransitionTable, TableError> {
        let init_state = self.init_state.ok_or(TableError::MissingInitState)?;
        let accept_state = self.accept_state.ok_or(TableError::MissingAcceptState)?;

        let mut tape_alphabet = self.tape_alphabet;
        if tape_alphabet.is_empty() {
            tape_alphabet.extend(&self.machine_alphabet);
            for transition in &self.transitions {
                tape_alphabet.insert(transition.read);
                tape_alphabet.insert(transition.write);
            }
        }

        let table = TransitionTable {
            transitions: self.transitions,
            machine_alphabet: self.machine_alphabet,
            tape_alphabet,
            stop_states: self.stop_states,
            init_state,
            accept_state,
            reject_state: self.reject_state,
        };

        validate::validate(&table)?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rule_table() -> TransitionTable {
        TransitionTable::builder()
            .init_state("q0")
            .accept_state("qa")
            .reject_state("qr")
            .stop_state("pause")
            .machine_alphabet(['0', '1'])
            .tape_alphabet(['0', '1', '_'])
            .transition("q0", '0', "qa", '1', Direction::Right)
            .transition("q0", '1', "qr", '1', Direction::Stay)
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_finds_the_unique_rule() {
        let table = two_rule_table();

        let transition = table.lookup("q0", '0').unwrap();
        assert_eq!(transition.to_state, "qa");
        assert_eq!(transition.write, '1');
        assert_eq!(transition.direction, Direction::Right);

        let other = table.lookup("q0", '1').unwrap();
        assert_eq!(other.to_state, "qr");
    }

    #[test]
    fn lookup_fails_for_absent_pairs() {
        let table = two_rule_table();

        let error = table.lookup("q0", '_').unwrap_err();
        assert_eq!(
            error,
            AutomatonError::NoMatchingTransition {
                state: "q0".to_string(),
                symbol: '_',
            }
        );

        assert!(table.lookup("missing", '0').is_err());
    }

    #[test]
    fn verdict_predicates() {
        let table = two_rule_table();

        assert!(table.is_accept("qa"));
        assert!(!table.is_accept("qr"));
        assert!(table.is_reject("qr"));
        assert!(!table.is_reject("qa"));
        assert!(table.is_stop("pause"));
        assert!(!table.is_stop("q0"));
    }

    #[test]
    fn absent_reject_state_rejects_nothing() {
        let table = TransitionTable::builder()
            .init_state("q0")
            .accept_state("qa")
            .transition("q0", '1', "qa", '1', Direction::Stay)
            .build()
            .unwrap();

        assert_eq!(table.reject_state(), None);
        assert!(!table.is_reject("qa"));
        assert!(!table.is_reject("anything"));
    }

    #[test]
    fn missing_required_states() {
        let missing_init = TransitionTable::builder().accept_state("qa").build();
        assert_eq!(missing_init.unwrap_err(), TableError::MissingInitState);

        let missing_accept = TransitionTable::builder().init_state("q0").build();
        assert_eq!(missing_accept.unwrap_err(), TableError::MissingAcceptState);
    }

    #[test]
    fn tape_alphabet_inferred_from_rules() {
        let table = TransitionTable::builder()
            .init_state("q0")
            .accept_state("qa")
            .machine_alphabet(['1'])
            .transition("q0", '1', "qa", '0', Direction::Right)
            .transition("q0", '_', "qa", '1', Direction::Stay)
            .build()
            .unwrap();

        let expected: HashSet<char> = ['0', '1', '_'].into_iter().collect();
        assert_eq!(table.tape_alphabet(), &expected);
    }

    #[test]
    fn accessors_expose_declared_shape() {
        let table = two_rule_table();

        assert_eq!(table.init_state(), "q0");
        assert_eq!(table.accept_state(), "qa");
        assert_eq!(table.reject_state(), Some("qr"));
        assert_eq!(table.transitions().len(), 2);
        assert!(table.machine_alphabet().contains(&'0'));
        assert!(table.stop_states().contains("pause"));
    }
}
