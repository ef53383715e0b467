//! Queen sliding move generation: the rook and bishop rays combined.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::pieces::piece::{sliding_moves, Piece};

const MOVE_DIRECTIONS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn pseudo_legal_moves(queen: &Piece, board: &Board) -> Vec<Move> {
    sliding_moves(queen, board, &MOVE_DIRECTIONS)
}
