//! Rank-by-rank board placement export with run-length-encoded gaps.
//!
//! A derived textual surface only; nothing in the engine parses it back.

use crate::board::board::Board;
use crate::board::square::SQUARES_PER_RANK;
use crate::pieces::piece::Color;

/// The placement field, ranks 8 down to 1 separated by '/'. White pieces
/// are uppercase, empty runs collapse to their count.
pub fn placement(board: &Board) -> String {
    let mut out = String::new();
    for rank in 0..SQUARES_PER_RANK {
        if rank > 0 {
            out.push('/');
        }
        let mut empty_run = 0;
        for file in 0..SQUARES_PER_RANK {
            let coordinate = (rank * SQUARES_PER_RANK + file) as i8;
            match board.tile(coordinate) {
                None => empty_run += 1,
                Some(piece) => {
                    if empty_run > 0 {
                        out.push_str(&empty_run.to_string());
                        empty_run = 0;
                    }
                    let symbol = piece.kind.symbol();
                    out.push(match piece.color {
                        Color::White => symbol.to_ascii_uppercase(),
                        Color::Black => symbol.to_ascii_lowercase(),
                    });
                }
            }
        }
        if empty_run > 0 {
            out.push_str(&empty_run.to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::chess_move::Move;
    use crate::pieces::piece::{Piece, PieceKind};
    use crate::player::player::Player;

    #[test]
    fn starting_position_placement() {
        let board = Board::standard();
        assert_eq!(
            placement(&board),
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
        );
    }

    #[test]
    fn empty_runs_are_collapsed() {
        let board = Board::builder()
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .piece(Piece::placed(PieceKind::Rook, Color::White, 27, false))
            .build()
            .expect("valid position");
        assert_eq!(placement(&board), "4k3/8/8/3R4/8/8/8/4K3");
    }

    #[test]
    fn placement_tracks_played_moves() {
        let board = Board::standard();
        let mv = Move::create_move(&board, 52, 36).expect("coordinates in range");
        let board = Player::current(&board)
            .make_move(&mv)
            .expect("make_move should run")
            .board;
        assert_eq!(
            placement(&board),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR"
        );
    }
}
