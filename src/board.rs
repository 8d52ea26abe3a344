use std::fmt;

use crate::types::{BOARD_SIZE, Cell, DiskCount, NUM_SQUARES, Player, Position};

/// Reversi board: an 8x8 grid of cells indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates the initial board:
    /// d4=white, e4=black, d5=black, e5=white.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.cells[3][3] = Cell::White;
        board.cells[3][4] = Cell::Black;
        board.cells[4][3] = Cell::Black;
        board.cells[4][4] = Cell::White;
        board
    }

    /// Parses eight rows of `.`, `B` and `W`. Returns `None` on any other shape.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        if rows.len() != BOARD_SIZE {
            return None;
        }

        let mut board = Self::empty();
        for (row, line) in rows.iter().enumerate() {
            let bytes = line.as_bytes();
            if bytes.len() != BOARD_SIZE {
                return None;
            }
            for (col, ch) in bytes.iter().enumerate() {
                board.cells[row][col] = match ch {
                    b'.' => Cell::Empty,
                    b'B' => Cell::Black,
                    b'W' => Cell::White,
                    _ => return None,
                };
            }
        }
        Some(board)
    }

    /// Panics when `pos` lies off the board; build positions with
    /// `Position::try_new` when the coordinates are untrusted.
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Panics when `pos` lies off the board.
    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Black and White disk totals, recounted by full scan on every call.
    pub fn count(&self) -> DiskCount {
        let mut counts = DiskCount::default();
        for cell in self.cells.iter().flatten() {
            match cell.owner() {
                Some(Player::Black) => counts.black += 1,
                Some(Player::White) => counts.white += 1,
                None => {}
            }
        }
        counts
    }

    /// Returns the number of empty squares.
    pub fn empty_count(&self) -> u8 {
        NUM_SQUARES as u8 - self.count().total()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Converts board to `[u8; 64]` where 0=empty, 1=black, 2=white.
    pub fn to_array(&self) -> [u8; NUM_SQUARES] {
        let mut out = [0u8; NUM_SQUARES];
        for (slot, cell) in out.iter_mut().zip(self.cells.iter().flatten()) {
            *slot = cell.owner().map_or(0, Player::code);
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text grid: `●` black, `○` white, `・` empty, one row per line.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let glyph = match cell {
                    Cell::Black => '●',
                    Cell::White => '○',
                    Cell::Empty => '・',
                };
                write!(f, "{glyph}")?;
            }
        }
        Ok(())
    }
}
