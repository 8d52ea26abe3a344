use std::fmt;
use std::ops::Not;

use serde::Serialize;

use crate::error::MoveError;

pub const BOARD_SIZE: usize = 8;
pub const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;

const FILE_LETTERS: &[u8; BOARD_SIZE] = b"abcdefgh";

/// One of the two sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn name(self) -> &'static str {
        match self {
            Player::Black => "Black",
            Player::White => "White",
        }
    }

    /// Wire code used by the flat board array: 1=black, 2=white.
    pub fn code(self) -> u8 {
        match self {
            Player::Black => 1,
            Player::White => 2,
        }
    }
}

impl Not for Player {
    type Output = Player;

    fn not(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// A board coordinate. Ordered row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Builds a position, rejecting anything outside the 8x8 grid.
    pub fn try_new(row: u8, col: u8) -> Result<Self, MoveError> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Ok(Self { row, col })
        } else {
            Err(MoveError::OutOfRange { row, col })
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            Some(Self {
                row: (index / BOARD_SIZE) as u8,
                col: (index % BOARD_SIZE) as u8,
            })
        } else {
            None
        }
    }

    /// Packed square index (0..=63).
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Steps one square in `(dr, dc)`. `None` past the edge; never wraps.
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if (0..BOARD_SIZE as i16).contains(&row) && (0..BOARD_SIZE as i16).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

/// Formats as algebraic notation: file letter then 1-based rank, e.g. `d3`.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = FILE_LETTERS
            .get(self.col as usize)
            .map(|&b| b as char)
            .unwrap_or('?');
        write!(f, "{}{}", file, self.row + 1)
    }
}

/// Display label for a `(row, col)` pair, `None` when off the board.
pub fn format_coordinate(row: u8, col: u8) -> Option<String> {
    Position::try_new(row, col).ok().map(|pos| pos.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiskCount {
    pub black: u8,
    pub white: u8,
}

impl DiskCount {
    pub fn total(self) -> u8 {
        self.black + self.white
    }

    pub fn of(self, player: Player) -> u8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Black,
    White,
    Draw,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub winner: Winner,
    pub black_count: u8,
    pub white_count: u8,
}

impl Outcome {
    pub fn from_counts(counts: DiskCount) -> Self {
        let winner = if counts.black > counts.white {
            Winner::Black
        } else if counts.white > counts.black {
            Winner::White
        } else {
            Winner::Draw
        };
        Self {
            winner,
            black_count: counts.black,
            white_count: counts.white,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.winner {
            Winner::Black => write!(f, "Black wins ({} - {})", self.black_count, self.white_count),
            Winner::White => write!(f, "White wins ({} - {})", self.white_count, self.black_count),
            Winner::Draw => write!(f, "Draw ({} - {})", self.black_count, self.white_count),
        }
    }
}

/// Presentation-only data for driving placement and flip visuals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnimationHints {
    pub placed: Position,
    pub flipped: Vec<Position>,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// Row-major, 0=empty, 1=black, 2=white.
    pub board: Vec<u8>,
    pub current_player: Player,
    pub black_count: u8,
    pub white_count: u8,
    pub is_game_over: bool,
    pub consecutive_passes: u8,
    /// Square indices (0..=63) playable by `current_player`. Empty after game over.
    pub legal_moves: Vec<u8>,
    /// Square indices flipped by the most recent placement.
    /// Empty before the first placement of a game.
    pub flipped: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opponent_is_negation() {
        assert_eq!(!Player::Black, Player::White);
        assert_eq!(!Player::White, Player::Black);
        assert_eq!(!!Player::Black, Player::Black);
    }

    #[test]
    fn position_display_uses_file_letter_and_one_based_rank() {
        assert_eq!(Position { row: 2, col: 3 }.to_string(), "d3");
        assert_eq!(Position { row: 0, col: 0 }.to_string(), "a1");
        assert_eq!(Position { row: 7, col: 7 }.to_string(), "h8");
        assert_eq!(format_coordinate(4, 5).as_deref(), Some("f5"));
        assert_eq!(format_coordinate(8, 0), None);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Position::try_new(7, 7).is_ok());
        assert_eq!(
            Position::try_new(8, 1),
            Err(MoveError::OutOfRange { row: 8, col: 1 })
        );
    }

    #[test]
    fn offset_stops_at_edges_without_wrapping() {
        let corner = Position { row: 0, col: 7 };
        assert_eq!(corner.offset(0, 1), None);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(1, -1), Some(Position { row: 1, col: 6 }));
    }

    #[test]
    fn index_round_trips_through_from_index() {
        let pos = Position { row: 5, col: 4 };
        assert_eq!(pos.index(), 44);
        assert_eq!(Position::from_index(44), Some(pos));
        assert_eq!(Position::from_index(64), None);
    }

    #[test]
    fn outcome_picks_higher_count_or_draw() {
        let black_win = Outcome::from_counts(DiskCount { black: 40, white: 24 });
        assert_eq!(black_win.winner, Winner::Black);
        assert_eq!(black_win.to_string(), "Black wins (40 - 24)");

        let white_win = Outcome::from_counts(DiskCount { black: 10, white: 54 });
        assert_eq!(white_win.winner, Winner::White);
        assert_eq!(white_win.to_string(), "White wins (54 - 10)");

        let draw = Outcome::from_counts(DiskCount { black: 32, white: 32 });
        assert_eq!(draw.winner, Winner::Draw);
    }
}
