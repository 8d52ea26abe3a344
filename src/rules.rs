use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::board::Board;
use crate::types::{BOARD_SIZE, NUM_SQUARES, Player, Position};

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Legal moves for one side, each mapped to the disks it would flip.
///
/// Every entry has a non-empty capture list. Iteration is row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LegalMoves {
    moves: BTreeMap<Position, Vec<Position>>,
}

impl LegalMoves {
    pub fn get(&self, pos: Position) -> Option<&[Position]> {
        self.moves.get(&pos).map(Vec::as_slice)
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.moves.contains_key(&pos)
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn positions(&self) -> Vec<Position> {
        self.moves.keys().copied().collect()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, Position, Vec<Position>> {
        self.moves.iter()
    }
}

impl<'a> IntoIterator for &'a LegalMoves {
    type Item = (&'a Position, &'a Vec<Position>);
    type IntoIter = btree_map::Iter<'a, Position, Vec<Position>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Computes every legal move for `player` and the disks each one captures.
pub fn compute_legal_moves(board: &Board, player: Player) -> LegalMoves {
    let mut moves = BTreeMap::new();

    for index in 0..NUM_SQUARES {
        let Some(pos) = Position::from_index(index) else {
            continue;
        };
        if !board.get(pos).is_empty() {
            continue;
        }

        let flips = collect_flips(board, pos, player);
        if !flips.is_empty() {
            moves.insert(pos, flips);
        }
    }

    LegalMoves { moves }
}

/// Walks from `from` (exclusive) in `direction` and returns the opponent run
/// bracketed by a `player` disk. Empty when the run hits an empty square or
/// the edge first.
pub fn collect_line(board: &Board, from: Position, direction: (i8, i8), player: Player) -> Vec<Position> {
    let (dr, dc) = direction;
    let mut line = Vec::with_capacity(BOARD_SIZE - 2);
    let mut cursor = from.offset(dr, dc);

    while let Some(pos) = cursor {
        match board.get(pos).owner() {
            Some(owner) if owner == !player => line.push(pos),
            Some(_) => return line,
            None => break,
        }
        cursor = pos.offset(dr, dc);
    }

    Vec::new()
}

fn collect_flips(board: &Board, pos: Position, player: Player) -> Vec<Position> {
    let mut flips = Vec::new();
    for direction in DIRECTIONS {
        flips.extend(collect_line(board, pos, direction, player));
    }
    flips
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Cell;

    fn pos(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    fn play(board: &mut Board, at: Position, player: Player) {
        let moves = compute_legal_moves(board, player);
        let flips = moves.get(at).expect("move must be legal").to_vec();
        board.set(at, player.into());
        for p in flips {
            board.set(p, player.into());
        }
    }

    #[test]
    fn t01_initial_black_legal_moves_are_four_expected_squares() {
        let moves = compute_legal_moves(&Board::new(), Player::Black);

        // d3, c4, f5, e6
        assert_eq!(moves.positions(), vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)]);
        for (_, flips) in &moves {
            assert_eq!(flips.len(), 1);
        }
        assert_eq!(moves.get(pos(2, 3)), Some(&[pos(3, 3)][..]));
    }

    #[test]
    fn white_replies_after_black_opens_on_d3() {
        let mut board = Board::new();
        play(&mut board, pos(2, 3), Player::Black);

        assert_eq!(board.count().black, 4);
        assert_eq!(board.count().white, 1);

        let moves = compute_legal_moves(&board, Player::White);
        assert!(moves.contains(pos(2, 2)));
        assert!(moves.contains(pos(2, 4)));
        assert!(moves.contains(pos(4, 2)));
    }

    #[test]
    fn captures_concatenate_across_directions() {
        let board = Board::from_rows(&[
            "B.B.....",
            ".WW.....",
            "BW......",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        let moves = compute_legal_moves(&board, Player::Black);
        assert!(!moves.contains(pos(1, 0)));

        // Up-left, up and left each bracket one white disk.
        let flips = moves.get(pos(2, 2)).unwrap();
        assert_eq!(flips, &[pos(1, 1), pos(1, 2), pos(2, 1)]);
    }

    #[test]
    fn run_ending_at_edge_or_gap_captures_nothing() {
        let board = Board::from_rows(&[
            "WWWWWWW.",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ])
        .unwrap();

        assert!(collect_line(&board, pos(0, 7), (0, -1), Player::Black).is_empty());
        assert!(compute_legal_moves(&board, Player::Black).is_empty());
    }

    #[test]
    fn walk_does_not_wrap_around_row_ends() {
        // A white run at the end of row 0 followed by a black disk at the
        // start of row 1 must not count as a bracketed line.
        let mut board = Board::empty();
        board.set(pos(0, 6), Cell::White);
        board.set(pos(0, 7), Cell::White);
        board.set(pos(1, 0), Cell::Black);

        assert!(collect_line(&board, pos(0, 5), (0, 1), Player::Black).is_empty());
        assert!(!compute_legal_moves(&board, Player::Black).contains(pos(0, 5)));
    }

    #[test]
    fn occupied_squares_are_never_legal() {
        let board = Board::new();
        let moves = compute_legal_moves(&board, Player::White);

        for (p, flips) in &moves {
            assert!(board.get(*p).is_empty());
            assert!(!flips.is_empty());
        }
        assert!(!moves.contains(pos(3, 3)));
    }

    #[test]
    fn computation_is_pure_and_repeatable() {
        let board = Board::new();
        let before = board;

        let first = compute_legal_moves(&board, Player::Black);
        let second = compute_legal_moves(&board, Player::Black);

        assert_eq!(first, second);
        assert_eq!(board, before);
    }
}
