//! The move variants and how each one derives the next board.
//!
//! One tagged union covers every state transition in the game. Executing a
//! move never touches the source board: the surviving pieces of both sides
//! are copied into a fresh `BoardBuilder`, the mover is re-inserted at its
//! destination with the first-move flag cleared, and the side to move flips.

use std::fmt;

use crate::board::board::Board;
use crate::board::square::{self, file_of};
use crate::errors::Errors;
use crate::pieces::piece::{Color, Piece};
use crate::player::player::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Basic {
        piece: Piece,
        destination: i8,
    },
    Capture {
        piece: Piece,
        destination: i8,
        captured: Piece,
    },
    PawnJump {
        pawn: Piece,
        destination: i8,
    },
    PawnPromotion {
        pawn: Piece,
        destination: i8,
    },
    PawnCapturePromotion {
        pawn: Piece,
        destination: i8,
        captured: Piece,
    },
    EnPassantCapture {
        pawn: Piece,
        destination: i8,
        captured: Piece,
    },
    KingsideCastle {
        king: Piece,
        destination: i8,
        rook: Piece,
        rook_destination: i8,
    },
    QueensideCastle {
        king: Piece,
        destination: i8,
        rook: Piece,
        rook_destination: i8,
    },
    /// Sentinel for "no matching move". Never executable.
    Null,
}

impl Move {
    pub fn moved_piece(&self) -> Option<Piece> {
        match *self {
            Move::Basic { piece, .. } | Move::Capture { piece, .. } => Some(piece),
            Move::PawnJump { pawn, .. }
            | Move::PawnPromotion { pawn, .. }
            | Move::PawnCapturePromotion { pawn, .. }
            | Move::EnPassantCapture { pawn, .. } => Some(pawn),
            Move::KingsideCastle { king, .. } | Move::QueensideCastle { king, .. } => Some(king),
            Move::Null => None,
        }
    }

    pub fn origin(&self) -> Option<i8> {
        self.moved_piece().map(|piece| piece.position)
    }

    pub fn destination(&self) -> Option<i8> {
        match *self {
            Move::Basic { destination, .. }
            | Move::Capture { destination, .. }
            | Move::PawnJump { destination, .. }
            | Move::PawnPromotion { destination, .. }
            | Move::PawnCapturePromotion { destination, .. }
            | Move::EnPassantCapture { destination, .. }
            | Move::KingsideCastle { destination, .. }
            | Move::QueensideCastle { destination, .. } => Some(destination),
            Move::Null => None,
        }
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        match *self {
            Move::Capture { captured, .. }
            | Move::PawnCapturePromotion { captured, .. }
            | Move::EnPassantCapture { captured, .. } => Some(captured),
            _ => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece().is_some()
    }

    #[inline]
    pub fn is_castle(&self) -> bool {
        matches!(
            self,
            Move::KingsideCastle { .. } | Move::QueensideCastle { .. }
        )
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(
            self,
            Move::PawnPromotion { .. } | Move::PawnCapturePromotion { .. }
        )
    }

    /// Derive the successor board from `board`, which must be the pre-move
    /// position this move was generated on.
    ///
    /// # Panics
    ///
    /// Executing `Move::Null` is a contract violation: the sentinel only
    /// stands in for "no matching move" and must never reach execution.
    pub fn execute(&self, board: &Board) -> Result<Board, Errors> {
        let mover = match *self {
            Move::Null => panic!("attempted to execute the null move"),
            _ => self
                .moved_piece()
                .expect("every non-null move carries its mover"),
        };

        let mut builder = Board::builder().side_to_move(board.side_to_move().opponent());

        let excluded_rook = match *self {
            Move::KingsideCastle { rook, .. } | Move::QueensideCastle { rook, .. } => Some(rook),
            _ => None,
        };
        let captured = self.captured_piece();

        for color in [Color::White, Color::Black] {
            for piece in board.pieces(color) {
                if *piece == mover {
                    continue;
                }
                if captured == Some(*piece) {
                    continue;
                }
                if excluded_rook == Some(*piece) {
                    continue;
                }
                builder = builder.piece(*piece);
            }
        }

        match *self {
            Move::Basic { destination, .. } | Move::Capture { destination, .. } => {
                builder = builder.piece(mover.moved_to(destination));
            }
            Move::PawnJump { destination, .. } => {
                let jumped = mover.moved_to(destination);
                builder = builder.piece(jumped).en_passant_pawn(jumped);
            }
            Move::PawnPromotion { destination, .. }
            | Move::PawnCapturePromotion { destination, .. } => {
                builder = builder.piece(mover.promoted_to_queen(destination));
            }
            Move::EnPassantCapture { destination, .. } => {
                builder = builder.piece(mover.moved_to(destination));
            }
            Move::KingsideCastle {
                destination,
                rook,
                rook_destination,
                ..
            }
            | Move::QueensideCastle {
                destination,
                rook,
                rook_destination,
                ..
            } => {
                builder = builder
                    .piece(mover.moved_to(destination))
                    .piece(rook.moved_to(rook_destination));
            }
            Move::Null => unreachable!(),
        }

        builder.build()
    }

    /// Look up the legal move between two coordinates on either side of the
    /// board. Returns `Move::Null` when nothing matches; rejects coordinates
    /// outside 0..63 outright.
    pub fn create_move(board: &Board, from: i8, to: i8) -> Result<Move, Errors> {
        if !square::is_valid(from) || !square::is_valid(to) {
            return Err(Errors::OutOfBounds);
        }

        for color in [Color::White, Color::Black] {
            let player = Player::derive(board, color);
            for candidate in player.legal_moves() {
                if candidate.origin() == Some(from) && candidate.destination() == Some(to) {
                    return Ok(*candidate);
                }
            }
        }
        Ok(Move::Null)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = |coordinate: i8| square::algebraic(coordinate).map_err(|_| fmt::Error);
        match *self {
            Move::Basic { piece, destination } => {
                if piece.kind == crate::pieces::piece::PieceKind::Pawn {
                    write!(f, "{}", name(destination)?)
                } else {
                    write!(f, "{}{}", piece.kind.symbol(), name(destination)?)
                }
            }
            Move::Capture {
                piece, destination, ..
            } => {
                if piece.kind == crate::pieces::piece::PieceKind::Pawn {
                    let file = (b'a' + file_of(piece.position) as u8) as char;
                    write!(f, "{}x{}", file, name(destination)?)
                } else {
                    write!(f, "{}x{}", piece.kind.symbol(), name(destination)?)
                }
            }
            Move::PawnJump { destination, .. } => write!(f, "{}", name(destination)?),
            Move::PawnPromotion { destination, .. } => write!(f, "{}=Q", name(destination)?),
            Move::PawnCapturePromotion {
                pawn, destination, ..
            } => {
                let file = (b'a' + file_of(pawn.position) as u8) as char;
                write!(f, "{}x{}=Q", file, name(destination)?)
            }
            Move::EnPassantCapture {
                pawn, destination, ..
            } => {
                let file = (b'a' + file_of(pawn.position) as u8) as char;
                write!(f, "{}x{}", file, name(destination)?)
            }
            Move::KingsideCastle { .. } => write!(f, "O-O"),
            Move::QueensideCastle { .. } => write!(f, "O-O-O"),
            Move::Null => write!(f, "--"),
        }
    }
}
