pub mod notation;

use std::fmt;

use serde::{Deserialize, Serialize};
use crate::error::{Error, Result};

pub const CELLS: usize = 9;

// Rows, columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2], [3, 4, 5], [6, 7, 8],
    [0, 3, 6], [1, 4, 7], [2, 5, 8],
    [0, 4, 8], [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self { Mark::X => Mark::O, Mark::O => Mark::X }
    }

    pub fn to_char(self) -> char {
        match self { Mark::X => 'X', Mark::O => 'O' }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

/// A 3x3 board, row-major (`row = idx / 3`, `col = idx % 3`).
///
/// `Board` is `Copy`: search hands every child its own copy instead of
/// mutating and reverting a shared one. Serde goes through the bare cells so
/// a decoded `winner` is always recomputed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Option<Mark>; 9]", into = "[Option<Mark>; 9]")]
pub struct Board {
    cells: [Option<Mark>; CELLS],
    winner: Option<Mark>,
}

impl Board {
    pub fn new() -> Self { Self::default() }

    pub fn cell(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cells(&self) -> &[Option<Mark>; CELLS] { &self.cells }

    pub fn winner(&self) -> Option<Mark> { self.winner }

    /// Empty cells in ascending index order. Search tie-breaks depend on this order.
    pub fn available_moves(&self) -> Vec<usize> {
        (0..CELLS).filter(|&i| self.cells[i].is_none()).collect()
    }

    pub fn is_empty(&self, index: usize) -> bool {
        index < CELLS && self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn is_terminal(&self) -> bool {
        self.winner.is_some() || self.is_full()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(m) => Some(Outcome::Win(m)),
            None if self.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    /// Places `mark` at `index` if that cell is empty. Returns `false` and
    /// leaves the board untouched otherwise.
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> bool {
        if !self.is_empty(index) { return false; }
        self.cells[index] = Some(mark);
        if self.winner.is_none() && self.completes_line(index, mark) {
            self.winner = Some(mark);
        }
        true
    }

    /// Same as [`Board::apply_move`], reporting why a move was refused.
    pub fn play(&mut self, index: usize, mark: Mark) -> Result<()> {
        if index >= CELLS { return Err(Error::OutOfRange { index }); }
        if !self.apply_move(index, mark) { return Err(Error::Occupied { index }); }
        Ok(())
    }

    // Only the lines through `index` can have changed. The diagonals pass
    // through the even cells alone.
    fn completes_line(&self, index: usize, mark: Mark) -> bool {
        let row = (index / 3) * 3;
        let col = index % 3;
        let owns = |i: usize| self.cells[i] == Some(mark);
        if (row..row + 3).all(owns) { return true; }
        if (0..3).map(|r| col + r * 3).all(owns) { return true; }
        if index % 2 == 0 {
            if [0, 4, 8].into_iter().all(owns) { return true; }
            if [2, 4, 6].into_iter().all(owns) { return true; }
        }
        false
    }

    /// Full rescan of all eight lines. Fails when both marks own a line.
    pub fn scan_winner(cells: &[Option<Mark>; CELLS]) -> Result<Option<Mark>> {
        let mut found: Option<Mark> = None;
        for line in LINES.iter() {
            let first = cells[line[0]];
            if let Some(m) = first {
                if line.iter().all(|&i| cells[i] == first) {
                    match found {
                        Some(prev) if prev != m => return Err(Error::ConflictingWinners),
                        _ => found = Some(m),
                    }
                }
            }
        }
        Ok(found)
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Whose turn it is, given which mark opened the game.
    pub fn side_to_move(&self, first: Mark) -> Mark {
        if self.count(first) > self.count(first.opponent()) { first.opponent() } else { first }
    }
}
