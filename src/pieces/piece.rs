//! Core piece types shared by every move generator.
//!
//! Pieces are small immutable values; moving one produces a fresh `Piece`
//! with the first-move flag cleared rather than mutating anything in place.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::square::{self, FILE_A, FILE_H, RANK_1, RANK_8};
use crate::pieces::{bishop, king, knight, pawn, queen, rook};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Rank-index travel direction for this side's pawns: White advances
    /// toward index 0, Black toward index 63.
    #[inline]
    pub const fn direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// True when a pawn of this color reaching `coordinate` promotes.
    #[inline]
    pub fn is_promotion_square(self, coordinate: i8) -> bool {
        match self {
            Color::White => RANK_8[coordinate as usize],
            Color::Black => RANK_1[coordinate as usize],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10_000,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    pub const fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// An immutable piece snapshot. Equality covers kind, color, position, and
/// the first-move flag, which is what move legality and execution compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: i8,
    pub is_first_move: bool,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color, position: i8) -> Self {
        Piece {
            kind,
            color,
            position,
            is_first_move: true,
        }
    }

    pub const fn placed(kind: PieceKind, color: Color, position: i8, is_first_move: bool) -> Self {
        Piece {
            kind,
            color,
            position,
            is_first_move,
        }
    }

    /// Successor piece after this one moves to `destination`.
    #[inline]
    pub const fn moved_to(self, destination: i8) -> Self {
        Piece {
            kind: self.kind,
            color: self.color,
            position: destination,
            is_first_move: false,
        }
    }

    /// Queen this pawn becomes on promotion. Underpromotion is out of scope.
    #[inline]
    pub const fn promoted_to_queen(self, destination: i8) -> Self {
        Piece {
            kind: PieceKind::Queen,
            color: self.color,
            position: destination,
            is_first_move: false,
        }
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }

    /// Pseudo-legal moves for this piece. Self-check filtering happens later
    /// in the player layer.
    pub fn pseudo_legal_moves(&self, board: &Board) -> Vec<Move> {
        match self.kind {
            PieceKind::Pawn => pawn::pseudo_legal_moves(self, board),
            PieceKind::Knight => knight::pseudo_legal_moves(self, board),
            PieceKind::Bishop => bishop::pseudo_legal_moves(self, board),
            PieceKind::Rook => rook::pseudo_legal_moves(self, board),
            PieceKind::Queen => queen::pseudo_legal_moves(self, board),
            PieceKind::King => king::pseudo_legal_moves(self, board),
        }
    }
}

/// Shared walker for the sliding pieces. Each direction is followed until the
/// board ends, a file wrap would occur, or an occupied square stops the ray.
pub(crate) fn sliding_moves(piece: &Piece, board: &Board, directions: &[i8]) -> Vec<Move> {
    let mut moves = Vec::new();

    for &direction in directions {
        let mut candidate = piece.position;
        loop {
            if wraps_file_edge(candidate, direction) {
                break;
            }
            candidate += direction;
            if !square::is_valid(candidate) {
                break;
            }
            match board.tile(candidate) {
                None => moves.push(Move::Basic {
                    piece: *piece,
                    destination: candidate,
                }),
                Some(occupant) => {
                    if occupant.color != piece.color {
                        moves.push(Move::Capture {
                            piece: *piece,
                            destination: candidate,
                            captured: occupant,
                        });
                    }
                    break;
                }
            }
        }
    }

    moves
}

#[inline]
fn wraps_file_edge(position: i8, direction: i8) -> bool {
    (FILE_A[position as usize] && matches!(direction, -9 | -1 | 7))
        || (FILE_H[position as usize] && matches!(direction, -7 | 1 | 9))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moved_piece_clears_first_move_flag() {
        let knight = Piece::new(PieceKind::Knight, Color::White, 57);
        assert!(knight.is_first_move);
        let moved = knight.moved_to(40);
        assert_eq!(moved.position, 40);
        assert!(!moved.is_first_move);
        assert_eq!(moved.kind, PieceKind::Knight);
    }

    #[test]
    fn promotion_always_yields_a_queen() {
        let pawn = Piece::placed(PieceKind::Pawn, Color::White, 8, false);
        let promoted = pawn.promoted_to_queen(0);
        assert_eq!(promoted.kind, PieceKind::Queen);
        assert_eq!(promoted.color, Color::White);
        assert_eq!(promoted.position, 0);
        assert!(!promoted.is_first_move);
    }

    #[test]
    fn equality_tracks_the_first_move_flag() {
        let fresh = Piece::new(PieceKind::Rook, Color::Black, 0);
        let moved = Piece::placed(PieceKind::Rook, Color::Black, 0, false);
        assert_ne!(fresh, moved);
    }

    #[test]
    fn colors_report_opposing_directions() {
        assert_eq!(Color::White.direction(), -Color::Black.direction());
        assert_eq!(Color::White.opponent(), Color::Black);
        assert!(Color::White.is_promotion_square(3));
        assert!(!Color::White.is_promotion_square(60));
        assert!(Color::Black.is_promotion_square(60));
    }
}
