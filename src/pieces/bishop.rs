//! Bishop sliding move generation along the four diagonals.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::pieces::piece::{sliding_moves, Piece};

const MOVE_DIRECTIONS: [i8; 4] = [-9, -7, 7, 9];

pub fn pseudo_legal_moves(bishop: &Piece, board: &Board) -> Vec<Move> {
    sliding_moves(bishop, board, &MOVE_DIRECTIONS)
}
