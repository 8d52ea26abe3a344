use thiserror::Error;

use crate::types::Position;

/// Reasons a move is rejected. A rejected move never mutates the game.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },

    /// The square is occupied or captures nothing for the side to move.
    #[error("illegal move at {position}")]
    IllegalMove { position: Position },

    #[error("game is already over")]
    GameOver,
}
