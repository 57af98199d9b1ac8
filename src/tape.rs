//! The machine's read/write storage: a logically unbounded tape addressed
//! by integer position, stored as a finite cell window that grows on
//! demand.

use crate::types::{Direction, DEFAULT_BLANK_SYMBOL};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A bidirectional tape with a single read/write head.
///
/// Cells outside the recorded window read as the blank symbol without
/// growing storage; writing extends the window as needed. The head
/// position is an absolute integer and goes negative when the head moves
/// left of the initial cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tape {
    cells: Vec<char>,
    /// Tape position of `cells[0]`.
    origin: i64,
    head: i64,
    blank: char,
}

impl Tape {
    /// Creates a tape holding `content` starting at position 0, with the
    /// head at `head` and [`DEFAULT_BLANK_SYMBOL`] for unwritten cells.
    pub fn new(content: &str, head: i64) -> Self {
        Self::with_blank(content, head, DEFAULT_BLANK_SYMBOL)
    }

    /// Creates a tape with an explicit blank symbol.
    pub fn with_blank(content: &str, head: i64, blank: char) -> Self {
        Self {
            cells: content.chars().collect(),
            origin: 0,
            head,
            blank,
        }
    }

    /// The symbol under the head.
    pub fn read(&self) -> char {
        self.get(self.head)
    }

    /// The symbol at an arbitrary position, blank outside the window.
    pub fn get(&self, pos: i64) -> char {
        if pos < self.origin {
            return self.blank;
        }

        self.cells
            .get((pos - self.origin) as usize)
            .copied()
            .unwrap_or(self.blank)
    }

    /// Writes `symbol` at the head, extending the window if the head is
    /// outside it.
    pub fn write(&mut self, symbol: char) {
        let index = self.ensure(self.head);
        self.cells[index] = symbol;
    }

    /// Moves the head one cell in `direction`. The window is left alone;
    /// it grows lazily on the next write.
    pub fn move_head(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.head -= 1,
            Direction::Right => self.head += 1,
            Direction::Stay => {}
        }
    }

    /// Absolute head position.
    pub fn head(&self) -> i64 {
        self.head
    }

    /// Tape position of the first recorded cell.
    pub fn origin(&self) -> i64 {
        self.origin
    }

    /// The blank symbol for unwritten cells.
    pub fn blank(&self) -> char {
        self.blank
    }

    /// The recorded cells, leftmost first.
    pub fn symbols(&self) -> &[char] {
        &self.cells
    }

    /// Grows the window to cover `pos` and returns its index into `cells`.
    fn ensure(&mut self, pos: i64) -> usize {
        if pos < self.origin {
            let pad = (self.origin - pos) as usize;
            self.cells
                .splice(0..0, std::iter::repeat(self.blank).take(pad));
            self.origin = pos;
        }

        let index = (pos - self.origin) as usize;
        if index >= self.cells.len() {
            self.cells.resize(index + 1, self.blank);
        }

        index
    }
}

impl fmt::Display for Tape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cells.iter().collect::<String>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_symbol_under_head() {
        let tape = Tape::new("abc", 1);
        assert_eq!(tape.read(), 'b');
    }

    #[test]
    fn read_outside_window_is_blank() {
        let tape = Tape::new("abc", 5);
        assert_eq!(tape.read(), '_');
        assert_eq!(tape.get(-3), '_');
        // Reads never grow the window.
        assert_eq!(tape.symbols(), &['a', 'b', 'c']);
    }

    #[test]
    fn write_extends_window_to_the_right() {
        let mut tape = Tape::new("a", 2);
        tape.write('x');

        assert_eq!(tape.symbols(), &['a', '_', 'x']);
        assert_eq!(tape.origin(), 0);
    }

    #[test]
    fn write_extends_window_to_the_left() {
        let mut tape = Tape::new("a", -2);
        tape.write('x');

        assert_eq!(tape.symbols(), &['x', '_', 'a']);
        assert_eq!(tape.origin(), -2);
        assert_eq!(tape.get(-2), 'x');
        assert_eq!(tape.get(0), 'a');
    }

    #[test]
    fn move_head_deltas() {
        let mut tape = Tape::new("abc", 0);

        tape.move_head(Direction::Right);
        assert_eq!(tape.head(), 1);

        tape.move_head(Direction::Stay);
        assert_eq!(tape.head(), 1);

        tape.move_head(Direction::Left);
        tape.move_head(Direction::Left);
        assert_eq!(tape.head(), -1);
    }

    #[test]
    fn custom_blank_symbol() {
        let mut tape = Tape::with_blank("a", 3, '.');
        assert_eq!(tape.read(), '.');

        tape.write('b');
        assert_eq!(tape.symbols(), &['a', '.', '.', 'b']);
    }

    #[test]
    fn display_renders_recorded_cells() {
        let tape = Tape::new("101", 0);
        assert_eq!(tape.to_string(), "101");
    }
}
