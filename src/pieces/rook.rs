//! Rook sliding move generation along ranks and files.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::pieces::piece::{sliding_moves, Piece};

const MOVE_DIRECTIONS: [i8; 4] = [-8, -1, 1, 8];

pub fn pseudo_legal_moves(rook: &Piece, board: &Board) -> Vec<Move> {
    sliding_moves(rook, board, &MOVE_DIRECTIONS)
}
