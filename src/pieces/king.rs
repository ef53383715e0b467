//! King single-step move generation. Castling lives in the player layer
//! because it needs the opponent's full attack picture.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::square::{self, FILE_A, FILE_H};
use crate::pieces::piece::Piece;

const MOVE_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

pub fn pseudo_legal_moves(king: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();

    for offset in MOVE_OFFSETS {
        if wraps_file_edge(king.position, offset) {
            continue;
        }
        let destination = king.position + offset;
        if !square::is_valid(destination) {
            continue;
        }

        match board.tile(destination) {
            None => moves.push(Move::Basic {
                piece: *king,
                destination,
            }),
            Some(occupant) => {
                if occupant.color != king.color {
                    moves.push(Move::Capture {
                        piece: *king,
                        destination,
                        captured: occupant,
                    });
                }
            }
        }
    }

    moves
}

fn wraps_file_edge(position: i8, offset: i8) -> bool {
    let index = position as usize;
    (FILE_A[index] && matches!(offset, -9 | -1 | 7))
        || (FILE_H[index] && matches!(offset, -7 | 1 | 9))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece::{Color, PieceKind};

    #[test]
    fn king_in_the_center_has_eight_moves() {
        let king = Piece::new(PieceKind::King, Color::White, 35);
        let board = Board::builder()
            .piece(king)
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .build()
            .expect("valid position");
        assert_eq!(pseudo_legal_moves(&king, &board).len(), 8);
    }

    #[test]
    fn king_in_the_corner_has_three_moves() {
        let king = Piece::new(PieceKind::King, Color::White, 63);
        let board = Board::builder()
            .piece(king)
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .build()
            .expect("valid position");

        let mut destinations: Vec<i8> = pseudo_legal_moves(&king, &board)
            .iter()
            .map(|mv| mv.destination().expect("generated move"))
            .collect();
        destinations.sort_unstable();
        assert_eq!(destinations, vec![54, 55, 62]);
    }

    #[test]
    fn king_on_the_a_file_never_wraps() {
        let king = Piece::new(PieceKind::King, Color::White, 32);
        let board = Board::builder()
            .piece(king)
            .piece(Piece::new(PieceKind::King, Color::Black, 7))
            .build()
            .expect("valid position");

        for mv in pseudo_legal_moves(&king, &board) {
            let file = square::file_of(mv.destination().expect("generated move"));
            assert!(file <= 1, "move to file {} wrapped the edge", file);
        }
    }
}
