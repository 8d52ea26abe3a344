use std::fmt;

use log::{debug, info, warn};

use crate::board::Board;
use crate::error::MoveError;
use crate::rules::{LegalMoves, compute_legal_moves};
use crate::types::{AnimationHints, GameSnapshot, Outcome, Player, Position};

const PASSES_TO_END: u8 = 2;

/// Resting state of a game between inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    AwaitingMove(Player),
    Finished(Outcome),
}

/// One line of the game log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Placed {
        player: Player,
        position: Position,
        flipped: usize,
    },
    Passed {
        player: Player,
    },
    Finished(Outcome),
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::Placed {
                player,
                position,
                flipped,
            } => {
                let noun = if *flipped == 1 { "disk" } else { "disks" };
                write!(f, "{player} played {position} and flipped {flipped} {noun}.")
            }
            GameEvent::Passed { player } => write!(f, "{player} has no legal move and passes."),
            GameEvent::Finished(outcome) => write!(f, "Game over: {outcome}"),
        }
    }
}

/// A whole game: board, side to move, pass bookkeeping and log.
///
/// The value is owned by the caller and every transition runs to completion,
/// including any forced passes it triggers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    consecutive_passes: u8,
    status: Status,
    legal_moves: LegalMoves,
    last_flipped: Vec<Position>,
    history: Vec<GameEvent>,
}

impl GameState {
    /// Standard opening, Black to move.
    pub fn new() -> Self {
        info!("new game");
        Self::from_position(Board::new(), Player::Black)
    }

    /// Starts from an arbitrary position. Forced passes are resolved
    /// immediately, so the result may already be finished.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut state = Self {
            board,
            current_player: to_move,
            consecutive_passes: 0,
            status: Status::AwaitingMove(to_move),
            legal_moves: LegalMoves::default(),
            last_flipped: Vec::new(),
            history: Vec::new(),
        };
        state.prepare_turn();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn consecutive_passes(&self) -> u8 {
        self.consecutive_passes
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished(_))
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Finished(outcome) => Some(outcome),
            Status::AwaitingMove(_) => None,
        }
    }

    /// Moves available to the side to move. Empty once finished.
    pub fn legal_moves(&self) -> &LegalMoves {
        &self.legal_moves
    }

    pub fn history(&self) -> &[GameEvent] {
        &self.history
    }

    /// Validates `(row, col)` and applies it.
    pub fn play(&mut self, row: u8, col: u8) -> Result<AnimationHints, MoveError> {
        let pos = Position::try_new(row, col)?;
        self.apply_move(pos)
    }

    /// Places a disk for the side to move and flips its captures.
    ///
    /// On error nothing is changed.
    pub fn apply_move(&mut self, pos: Position) -> Result<AnimationHints, MoveError> {
        if self.is_finished() {
            warn!("move at {pos} rejected: game is over");
            return Err(MoveError::GameOver);
        }

        let Some(captures) = self.legal_moves.get(pos) else {
            warn!("move at {pos} rejected for {}", self.current_player);
            return Err(MoveError::IllegalMove { position: pos });
        };
        let flipped = captures.to_vec();

        let player = self.current_player;
        self.board.set(pos, player.into());
        for &square in &flipped {
            self.board.set(square, player.into());
        }
        self.consecutive_passes = 0;
        self.last_flipped = flipped.clone();
        self.history.push(GameEvent::Placed {
            player,
            position: pos,
            flipped: flipped.len(),
        });
        debug!("{player} played {pos}, flipped {}", flipped.len());

        // A full board ends the game without another legality pass.
        if self.board.is_full() {
            self.finish();
        } else {
            self.current_player = !player;
            self.prepare_turn();
        }

        Ok(AnimationHints {
            placed: pos,
            flipped,
        })
    }

    /// Serializable view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        let counts = self.board.count();
        GameSnapshot {
            board: self.board.to_array().to_vec(),
            current_player: self.current_player,
            black_count: counts.black,
            white_count: counts.white,
            is_game_over: self.is_finished(),
            consecutive_passes: self.consecutive_passes,
            legal_moves: to_indices(self.legal_moves.positions()),
            flipped: to_indices(self.last_flipped.iter().copied()),
        }
    }

    /// Counts line, status line, then the board grid.
    pub fn board_text(&self) -> String {
        let counts = self.board.count();
        let status = match self.status {
            Status::AwaitingMove(player) => format!("Turn: {player}"),
            Status::Finished(_) => "Game over".to_string(),
        };
        format!(
            "Black: {} / White: {}\n{}\n{}",
            counts.black, counts.white, status, self.board
        )
    }

    /// Resolves the side to move, passing as many times as forced.
    ///
    /// Terminates within two iterations: each one either returns or bumps
    /// the pass counter, and a counter of two finishes the game.
    fn prepare_turn(&mut self) {
        while !self.is_finished() {
            let legal = compute_legal_moves(&self.board, self.current_player);
            if !legal.is_empty() {
                self.legal_moves = legal;
                self.status = Status::AwaitingMove(self.current_player);
                return;
            }

            self.consecutive_passes += 1;
            self.history.push(GameEvent::Passed {
                player: self.current_player,
            });
            debug!(
                "{} passes ({} consecutive)",
                self.current_player, self.consecutive_passes
            );

            if self.consecutive_passes >= PASSES_TO_END || self.board.is_full() {
                self.finish();
            } else {
                self.current_player = !self.current_player;
            }
        }
    }

    fn finish(&mut self) {
        let outcome = Outcome::from_counts(self.board.count());
        self.legal_moves = LegalMoves::default();
        self.status = Status::Finished(outcome);
        self.history.push(GameEvent::Finished(outcome));
        info!("game over: {outcome}");
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of [`apply_move`]: the state is always handed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub success: bool,
    pub state: GameState,
    pub animation_hints: Option<AnimationHints>,
    pub error: Option<MoveError>,
}

/// Applies `(row, col)` to `state` and returns the resulting state.
/// A rejected move returns the input state unchanged.
pub fn apply_move(mut state: GameState, row: u8, col: u8) -> MoveResult {
    match state.play(row, col) {
        Ok(hints) => MoveResult {
            success: true,
            state,
            animation_hints: Some(hints),
            error: None,
        },
        Err(err) => MoveResult {
            success: false,
            state,
            animation_hints: None,
            error: Some(err),
        },
    }
}

fn to_indices(positions: impl IntoIterator<Item = Position>) -> Vec<u8> {
    positions.into_iter().map(|p| p.index() as u8).collect()
}
