//! Zobrist hashing for position identity.
//!
//! Keys are drawn from a seeded generator so two instances built with the
//! same seed agree on every hash. Each engine owns its own key set; nothing
//! here is global.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::board::Board;
use crate::board::square::{self, NUM_SQUARES, SQUARES_PER_RANK};
use crate::pieces::piece::Color;

/// Seed used when no explicit one is configured.
pub const DEFAULT_SEED: u64 = 1_234_567_890;

#[derive(Debug, Clone)]
pub struct ZobristKeys {
    piece_square: [[[u64; NUM_SQUARES]; 6]; 2],
    castling: [u64; 4],
    en_passant_file: [u64; SQUARES_PER_RANK],
    black_to_move: u64,
}

impl ZobristKeys {
    pub fn new(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        let mut piece_square = [[[0u64; NUM_SQUARES]; 6]; 2];
        for color in &mut piece_square {
            for kind in color {
                for key in kind {
                    *key = rng.random::<u64>();
                }
            }
        }

        let mut castling = [0u64; 4];
        for key in &mut castling {
            *key = rng.random::<u64>();
        }

        let mut en_passant_file = [0u64; SQUARES_PER_RANK];
        for key in &mut en_passant_file {
            *key = rng.random::<u64>();
        }

        let black_to_move = rng.random::<u64>();

        ZobristKeys {
            piece_square,
            castling,
            en_passant_file,
            black_to_move,
        }
    }

    /// Hash the full position: piece placement, side to move, castling
    /// rights, and the en-passant file when a capture window is open.
    pub fn hash(&self, board: &Board) -> u64 {
        let mut key = 0u64;

        for color in [Color::White, Color::Black] {
            for piece in board.pieces(color) {
                key ^= self.piece_square[color.index()][piece.kind.index()]
                    [piece.position as usize];
            }
        }

        if board.side_to_move() == Color::Black {
            key ^= self.black_to_move;
        }

        let rights = board.castling_rights();
        for (index, held) in rights.iter().enumerate() {
            if *held {
                key ^= self.castling[index];
            }
        }

        if let Some(pawn) = board.en_passant_pawn() {
            key ^= self.en_passant_file[square::file_of(pawn.position) as usize];
        }

        key
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        ZobristKeys::new(DEFAULT_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_move::Move;
    use crate::pieces::piece::{Piece, PieceKind};
    use crate::player::player::Player;

    #[test]
    fn same_seed_yields_identical_hashes() {
        let a = ZobristKeys::new(42);
        let b = ZobristKeys::new(42);
        let board = Board::standard();
        assert_eq!(a.hash(&board), b.hash(&board));
    }

    #[test]
    fn different_seeds_yield_different_hashes() {
        let a = ZobristKeys::new(1);
        let b = ZobristKeys::new(2);
        let board = Board::standard();
        assert_ne!(a.hash(&board), b.hash(&board));
    }

    #[test]
    fn structurally_identical_boards_hash_alike() {
        let keys = ZobristKeys::default();
        let a = Board::standard();
        let b = Board::standard();
        assert_eq!(keys.hash(&a), keys.hash(&b));
    }

    #[test]
    fn side_to_move_changes_the_hash() {
        let keys = ZobristKeys::default();
        let base = Board::builder()
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .side_to_move(Color::White)
            .build()
            .expect("valid position");
        let flipped = Board::builder()
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .side_to_move(Color::Black)
            .build()
            .expect("valid position");
        assert_ne!(keys.hash(&base), keys.hash(&flipped));
    }

    #[test]
    fn moving_a_piece_changes_the_hash() {
        let keys = ZobristKeys::default();
        let board = Board::standard();
        let mv = Move::create_move(&board, 52, 44).expect("coordinates in range");
        let next = Player::current(&board)
            .make_move(&mv)
            .expect("make_move should run")
            .board;
        assert_ne!(keys.hash(&board), keys.hash(&next));
    }

    #[test]
    fn en_passant_window_changes_the_hash() {
        let keys = ZobristKeys::default();
        let board = Board::standard();
        let jump = Move::create_move(&board, 52, 36).expect("coordinates in range");
        let after_jump = Player::current(&board)
            .make_move(&jump)
            .expect("make_move should run")
            .board;

        // Same placement without the marker hashes differently.
        let mut builder = Board::builder().side_to_move(Color::Black);
        for color in [Color::White, Color::Black] {
            for piece in after_jump.pieces(color) {
                builder = builder.piece(*piece);
            }
        }
        let no_window = builder.build().expect("valid position");
        assert_ne!(keys.hash(&after_jump), keys.hash(&no_window));
    }
}
