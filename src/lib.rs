//! Crate root module declarations for the Quince chess engine.
//!
//! This file exposes the board model, per-piece move generators, the player
//! legality layer, and the alpha-beta search stack so tests, benches, and
//! host applications can import stable module paths.

pub mod errors;

pub mod board {
    pub mod board;
    pub mod chess_move;
    pub mod move_transition;
    pub mod square;
}

pub mod pieces {
    pub mod bishop;
    pub mod king;
    pub mod knight;
    pub mod pawn;
    pub mod piece;
    pub mod queen;
    pub mod rook;
}

pub mod player {
    pub mod player;
}

pub mod search {
    pub mod alpha_beta;
    pub mod board_scoring;
    pub mod move_ordering;
    pub mod transposition_table;
    pub mod zobrist;
}

pub mod utils {
    pub mod fen;
}
