//! Immutable board snapshot and its builder.
//!
//! A `Board` is a 64-tile array plus per-color active-piece sets, the
//! optional en-passant pawn, and the side to move. Boards are never mutated;
//! executing a move builds the successor board from scratch through
//! `BoardBuilder`, which is also the construction path for test positions.

use std::fmt;

use crate::board::chess_move::Move;
use crate::board::square::{self, NUM_SQUARES, SQUARES_PER_RANK};
use crate::errors::Errors;
use crate::pieces::piece::{Color, Piece, PieceKind};

/// A single square: empty or occupied by one piece.
pub type Tile = Option<Piece>;

#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; NUM_SQUARES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_king: Piece,
    black_king: Piece,
    en_passant_pawn: Option<Piece>,
    side_to_move: Color,
}

impl Board {
    pub fn builder() -> BoardBuilder {
        BoardBuilder::new()
    }

    /// The standard 32-piece starting position with White to move.
    pub fn standard() -> Board {
        let mut builder = BoardBuilder::new().side_to_move(Color::White);

        builder = builder
            .piece(Piece::new(PieceKind::Rook, Color::Black, 0))
            .piece(Piece::new(PieceKind::Knight, Color::Black, 1))
            .piece(Piece::new(PieceKind::Bishop, Color::Black, 2))
            .piece(Piece::new(PieceKind::Queen, Color::Black, 3))
            .piece(Piece::new(PieceKind::King, Color::Black, 4))
            .piece(Piece::new(PieceKind::Bishop, Color::Black, 5))
            .piece(Piece::new(PieceKind::Knight, Color::Black, 6))
            .piece(Piece::new(PieceKind::Rook, Color::Black, 7));
        for file in 0..SQUARES_PER_RANK as i8 {
            builder = builder.piece(Piece::new(PieceKind::Pawn, Color::Black, 8 + file));
        }

        for file in 0..SQUARES_PER_RANK as i8 {
            builder = builder.piece(Piece::new(PieceKind::Pawn, Color::White, 48 + file));
        }
        builder = builder
            .piece(Piece::new(PieceKind::Rook, Color::White, 56))
            .piece(Piece::new(PieceKind::Knight, Color::White, 57))
            .piece(Piece::new(PieceKind::Bishop, Color::White, 58))
            .piece(Piece::new(PieceKind::Queen, Color::White, 59))
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .piece(Piece::new(PieceKind::Bishop, Color::White, 61))
            .piece(Piece::new(PieceKind::Knight, Color::White, 62))
            .piece(Piece::new(PieceKind::Rook, Color::White, 63));

        builder
            .build()
            .expect("the standard layout must have one king per side")
    }

    /// Bounds-checked public tile access.
    pub fn piece_at(&self, coordinate: i8) -> Result<Tile, Errors> {
        if !square::is_valid(coordinate) {
            return Err(Errors::OutOfBounds);
        }
        Ok(self.tiles[coordinate as usize])
    }

    /// Internal tile access for callers that already validated `coordinate`.
    #[inline]
    pub(crate) fn tile(&self, coordinate: i8) -> Tile {
        self.tiles[coordinate as usize]
    }

    pub fn pieces(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_pieces,
            Color::Black => &self.black_pieces,
        }
    }

    pub fn king(&self, color: Color) -> Piece {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub fn en_passant_pawn(&self) -> Option<Piece> {
        self.en_passant_pawn
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Pseudo-legal moves for every active piece of one color, in piece-set
    /// order. Castles are appended later by the player layer.
    pub fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::new();
        for piece in self.pieces(color) {
            moves.extend(piece.pseudo_legal_moves(self));
        }
        moves
    }

    /// Castling rights still held, derived from first-move flags:
    /// `[white kingside, white queenside, black kingside, black queenside]`.
    pub fn castling_rights(&self) -> [bool; 4] {
        [
            self.right_held(Color::White, 60, 63),
            self.right_held(Color::White, 60, 56),
            self.right_held(Color::Black, 4, 7),
            self.right_held(Color::Black, 4, 0),
        ]
    }

    fn right_held(&self, color: Color, king_square: i8, rook_square: i8) -> bool {
        let king_unmoved = matches!(
            self.tile(king_square),
            Some(piece) if piece.kind == PieceKind::King && piece.color == color && piece.is_first_move
        );
        let rook_unmoved = matches!(
            self.tile(rook_square),
            Some(piece) if piece.kind == PieceKind::Rook && piece.color == color && piece.is_first_move
        );
        king_unmoved && rook_unmoved
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank_row in 0..SQUARES_PER_RANK {
            write!(f, "{} |", SQUARES_PER_RANK - rank_row)?;
            for file in 0..SQUARES_PER_RANK {
                match self.tiles[rank_row * SQUARES_PER_RANK + file] {
                    Some(piece) => {
                        let symbol = piece.kind.symbol();
                        let shown = match piece.color {
                            Color::White => symbol,
                            Color::Black => symbol.to_ascii_lowercase(),
                        };
                        write!(f, " {}", shown)?;
                    }
                    None => write!(f, " -")?,
                }
            }
            writeln!(f)?;
        }
        writeln!(f, "   ----------------")?;
        write!(f, "    a b c d e f g h")
    }
}

/// Collects a placement before validating it into an immutable `Board`.
#[derive(Debug, Clone)]
pub struct BoardBuilder {
    placements: Vec<Piece>,
    side_to_move: Color,
    en_passant_pawn: Option<Piece>,
}

impl BoardBuilder {
    pub fn new() -> Self {
        BoardBuilder {
            placements: Vec::new(),
            side_to_move: Color::White,
            en_passant_pawn: None,
        }
    }

    pub fn piece(mut self, piece: Piece) -> Self {
        self.placements.push(piece);
        self
    }

    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    pub fn en_passant_pawn(mut self, pawn: Piece) -> Self {
        self.en_passant_pawn = Some(pawn);
        self
    }

    /// Validate the placement and freeze it. A board with an out-of-range
    /// position, a doubly occupied square, or anything other than exactly one
    /// king per color is rejected outright.
    pub fn build(self) -> Result<Board, Errors> {
        let mut tiles: [Tile; NUM_SQUARES] = [None; NUM_SQUARES];
        for piece in &self.placements {
            if !square::is_valid(piece.position) {
                return Err(Errors::OutOfBounds);
            }
            let slot = &mut tiles[piece.position as usize];
            if slot.is_some() {
                return Err(Errors::SquareOccupied(piece.position));
            }
            *slot = Some(*piece);
        }

        let mut white_pieces = Vec::new();
        let mut black_pieces = Vec::new();
        for tile in tiles.iter().flatten() {
            match tile.color {
                Color::White => white_pieces.push(*tile),
                Color::Black => black_pieces.push(*tile),
            }
        }

        let white_king = Self::single_king(&white_pieces, Color::White)?;
        let black_king = Self::single_king(&black_pieces, Color::Black)?;

        Ok(Board {
            tiles,
            white_pieces,
            black_pieces,
            white_king,
            black_king,
            en_passant_pawn: self.en_passant_pawn,
            side_to_move: self.side_to_move,
        })
    }

    fn single_king(pieces: &[Piece], color: Color) -> Result<Piece, Errors> {
        let mut found = None;
        for piece in pieces {
            if piece.kind == PieceKind::King {
                if found.is_some() {
                    return Err(Errors::ExtraKing(color));
                }
                found = Some(*piece);
            }
        }
        found.ok_or(Errors::MissingKing(color))
    }
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
