//! Knight move generation from a fixed leap-offset table.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::square::{self, FILE_A, FILE_B, FILE_G, FILE_H};
use crate::pieces::piece::Piece;

const MOVE_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];

pub fn pseudo_legal_moves(knight: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();

    for offset in MOVE_OFFSETS {
        if wraps_file_edge(knight.position, offset) {
            continue;
        }
        let destination = knight.position + offset;
        if !square::is_valid(destination) {
            continue;
        }

        match board.tile(destination) {
            None => moves.push(Move::Basic {
                piece: *knight,
                destination,
            }),
            Some(occupant) => {
                if occupant.color != knight.color {
                    moves.push(Move::Capture {
                        piece: *knight,
                        destination,
                        captured: occupant,
                    });
                }
            }
        }
    }

    moves
}

/// Offsets whose arithmetic would land on the far side of the board when the
/// knight stands near a file edge.
fn wraps_file_edge(position: i8, offset: i8) -> bool {
    let index = position as usize;
    (FILE_A[index] && matches!(offset, -17 | -10 | 6 | 15))
        || (FILE_B[index] && matches!(offset, -10 | 6))
        || (FILE_G[index] && matches!(offset, -6 | 10))
        || (FILE_H[index] && matches!(offset, -15 | -6 | 10 | 17))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece::{Color, PieceKind};

    fn lone_knight_board(position: i8) -> (Board, Piece) {
        let knight = Piece::new(PieceKind::Knight, Color::White, position);
        let board = Board::builder()
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .piece(knight)
            .build()
            .expect("valid position");
        (board, knight)
    }

    #[test]
    fn knight_in_the_center_has_eight_moves() {
        let (board, knight) = lone_knight_board(35);
        assert_eq!(pseudo_legal_moves(&knight, &board).len(), 8);
    }

    #[test]
    fn knight_in_the_corner_has_two_moves() {
        let (board, knight) = lone_knight_board(56);
        let moves = pseudo_legal_moves(&knight, &board);
        let mut destinations: Vec<i8> = moves
            .iter()
            .map(|mv| mv.destination().expect("generated move"))
            .collect();
        destinations.sort_unstable();
        assert_eq!(destinations, vec![41, 50]);
    }

    #[test]
    fn knight_on_the_h_file_never_wraps() {
        let (board, knight) = lone_knight_board(39);
        for mv in pseudo_legal_moves(&knight, &board) {
            let destination = mv.destination().expect("generated move");
            let file = square::file_of(destination);
            assert!(file >= 5, "move to file {} wrapped the edge", file);
        }
    }

    #[test]
    fn knight_captures_enemies_but_not_friends() {
        let knight = Piece::new(PieceKind::Knight, Color::White, 35);
        let board = Board::builder()
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .piece(knight)
            .piece(Piece::new(PieceKind::Pawn, Color::Black, 18))
            .piece(Piece::new(PieceKind::Pawn, Color::White, 20))
            .build()
            .expect("valid position");

        let moves = pseudo_legal_moves(&knight, &board);
        assert_eq!(moves.len(), 7);
        assert!(moves
            .iter()
            .any(|mv| mv.is_capture() && mv.destination() == Some(18)));
        assert!(!moves.iter().any(|mv| mv.destination() == Some(20)));
    }
}
