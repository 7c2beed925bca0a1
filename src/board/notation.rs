use std::fmt;
use std::str::FromStr;

use super::{Board, Mark, CELLS};
use crate::error::Error;

impl Board {
    /// Compact row notation, e.g. `XO./.X./...`.
    pub fn notation(&self) -> String {
        let mut s = String::with_capacity(CELLS + 2);
        for (i, c) in self.cells.iter().enumerate() {
            if i > 0 && i % 3 == 0 { s.push('/'); }
            s.push(c.map_or('.', Mark::to_char));
        }
        s
    }

    /// Builds a board from cells, rescanning every line for a winner.
    pub fn from_cells(cells: [Option<Mark>; CELLS]) -> Result<Self, Error> {
        let winner = Board::scan_winner(&cells)?;
        Ok(Self { cells, winner })
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = |reason: String| Error::InvalidNotation { notation: s.to_string(), reason };
        let mut cells = [None; CELLS];
        let mut n = 0usize;
        for ch in s.chars().filter(|c| *c != '/' && !c.is_whitespace()) {
            let cell = match ch {
                'X' | 'x' => Some(Mark::X),
                'O' | 'o' => Some(Mark::O),
                '.' | '-' | '_' => None,
                other => return Err(bad(format!("unexpected character '{other}'"))),
            };
            if n >= CELLS { return Err(bad(format!("more than {CELLS} cells"))); }
            cells[n] = cell;
            n += 1;
        }
        if n != CELLS { return Err(bad(format!("expected {CELLS} cells, got {n}"))); }
        Board::from_cells(cells)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let c = |col: usize| self.cells[row * 3 + col].map_or('.', Mark::to_char);
            writeln!(f, " {} | {} | {}", c(0), c(1), c(2))?;
            if row < 2 { writeln!(f, "-----------")?; }
        }
        Ok(())
    }
}

impl TryFrom<[Option<Mark>; CELLS]> for Board {
    type Error = Error;

    fn try_from(cells: [Option<Mark>; CELLS]) -> Result<Self, Self::Error> {
        Board::from_cells(cells)
    }
}

impl From<Board> for [Option<Mark>; CELLS] {
    fn from(b: Board) -> Self { b.cells }
}
