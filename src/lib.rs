use wasm_bindgen::prelude::*;

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::Settings;
pub use error::MoveError;
pub use game::{GameEvent, GameState, MoveResult, Status, apply_move};
pub use rules::{LegalMoves, compute_legal_moves};
pub use types::{
    AnimationHints, Cell, DiskCount, GameSnapshot, Outcome, Player, Position, Winner,
    format_coordinate,
};

/// Lets the JS host confirm the module finished instantiating.
#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
