//! One side's legality view over a board.
//!
//! A `Player` is derived fresh from a board: its own pseudo-legal moves plus
//! any available castles, whether the king is currently attacked, and the
//! two-phase `make_move` that rejects candidates leaving the own king in
//! check. Nothing here mutates the board.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::move_transition::{MoveStatus, MoveTransition};
use crate::errors::Errors;
use crate::pieces::piece::{Color, Piece, PieceKind};

/// True when any move in `moves` targets `square`. Pawn pushes count as
/// attacks here on purpose: this mirrors how castling transit squares are
/// guarded, and a push can never target an occupied king square anyway.
pub fn is_square_attacked(square: i8, moves: &[Move]) -> bool {
    moves.iter().any(|mv| mv.destination() == Some(square))
}

#[derive(Debug)]
pub struct Player<'a> {
    board: &'a Board,
    color: Color,
    king: Piece,
    legal_moves: Vec<Move>,
    is_in_check: bool,
}

impl<'a> Player<'a> {
    /// Build the legality view for `color` on `board`.
    pub fn derive(board: &'a Board, color: Color) -> Player<'a> {
        let opponent_moves = board.pseudo_legal_moves(color.opponent());
        let king = board.king(color);
        let is_in_check = is_square_attacked(king.position, &opponent_moves);

        let mut legal_moves = board.pseudo_legal_moves(color);
        legal_moves.extend(castle_moves(board, color, &king, &opponent_moves, is_in_check));

        Player {
            board,
            color,
            king,
            legal_moves,
            is_in_check,
        }
    }

    /// The view for whoever is to move on `board`.
    pub fn current(board: &'a Board) -> Player<'a> {
        Player::derive(board, board.side_to_move())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn king(&self) -> Piece {
        self.king
    }

    pub fn legal_moves(&self) -> &[Move] {
        &self.legal_moves
    }

    pub fn capture_moves(&self) -> Vec<Move> {
        self.legal_moves
            .iter()
            .copied()
            .filter(Move::is_capture)
            .collect()
    }

    pub fn is_move_legal(&self, mv: &Move) -> bool {
        self.legal_moves.contains(mv)
    }

    pub fn is_in_check(&self) -> bool {
        self.is_in_check
    }

    pub fn is_in_checkmate(&self) -> Result<bool, Errors> {
        Ok(self.is_in_check && !self.has_escape_moves()?)
    }

    pub fn is_in_stalemate(&self) -> Result<bool, Errors> {
        Ok(!self.is_in_check && !self.has_escape_moves()?)
    }

    /// Whether the player appears to have castled: the king sits moved on a
    /// castle destination square with a moved rook on the adjacent square the
    /// castle would have put it on.
    pub fn is_castled(&self) -> bool {
        if self.king.is_first_move {
            return false;
        }
        let (kingside_king, kingside_rook, queenside_king, queenside_rook) = match self.color {
            Color::White => (62, 61, 58, 59),
            Color::Black => (6, 5, 2, 3),
        };
        let rook_moved_to = |square: i8| {
            matches!(
                self.board.tile(square),
                Some(piece)
                    if piece.kind == PieceKind::Rook
                        && piece.color == self.color
                        && !piece.is_first_move
            )
        };
        (self.king.position == kingside_king && rook_moved_to(kingside_rook))
            || (self.king.position == queenside_king && rook_moved_to(queenside_rook))
    }

    /// Two-phase move application. Phase one rejects anything outside the
    /// precomputed legal set; phase two executes and rejects the move after
    /// the fact if the opponent could then capture the mover's king.
    pub fn make_move(&self, mv: &Move) -> Result<MoveTransition, Errors> {
        if !self.is_move_legal(mv) {
            return Ok(MoveTransition {
                board: self.board.clone(),
                played: *mv,
                status: MoveStatus::IllegalMove,
            });
        }

        let next = mv.execute(self.board)?;
        let own_king = next.king(self.color);
        let replies = next.pseudo_legal_moves(self.color.opponent());
        if is_square_attacked(own_king.position, &replies) {
            return Ok(MoveTransition {
                board: self.board.clone(),
                played: *mv,
                status: MoveStatus::LeavesPlayerInCheck,
            });
        }

        Ok(MoveTransition {
            board: next,
            played: *mv,
            status: MoveStatus::Done,
        })
    }

    fn has_escape_moves(&self) -> Result<bool, Errors> {
        for mv in &self.legal_moves {
            if self.make_move(mv)?.status.is_done() {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Castle moves currently available to `color`, mirrored for both sides.
/// The king must be unmoved and out of check, the squares between king and
/// rook empty, the rook unmoved, and no square the king crosses or lands on
/// attacked. The queenside b-square only needs to be empty, not safe.
fn castle_moves(
    board: &Board,
    color: Color,
    king: &Piece,
    opponent_moves: &[Move],
    is_in_check: bool,
) -> Vec<Move> {
    let mut castles = Vec::new();

    let (king_start, f, g, h, d, c, b, a) = match color {
        Color::White => (60, 61, 62, 63, 59, 58, 57, 56),
        Color::Black => (4, 5, 6, 7, 3, 2, 1, 0),
    };

    if !king.is_first_move || is_in_check || king.position != king_start {
        return castles;
    }

    // Kingside.
    if board.tile(f).is_none() && board.tile(g).is_none() {
        if let Some(rook) = unmoved_rook(board, color, h) {
            if !is_square_attacked(f, opponent_moves) && !is_square_attacked(g, opponent_moves) {
                castles.push(Move::KingsideCastle {
                    king: *king,
                    destination: g,
                    rook,
                    rook_destination: f,
                });
            }
        }
    }

    // Queenside.
    if board.tile(d).is_none() && board.tile(c).is_none() && board.tile(b).is_none() {
        if let Some(rook) = unmoved_rook(board, color, a) {
            if !is_square_attacked(c, opponent_moves) && !is_square_attacked(d, opponent_moves) {
                castles.push(Move::QueensideCastle {
                    king: *king,
                    destination: c,
                    rook,
                    rook_destination: d,
                });
            }
        }
    }

    castles
}

fn unmoved_rook(board: &Board, color: Color, square: i8) -> Option<Piece> {
    board.tile(square).filter(|piece| {
        piece.kind == PieceKind::Rook && piece.color == color && piece.is_first_move
    })
}
