//! Pluggable board evaluation interfaces and the standard implementation.
//!
//! Search delegates static position scoring to a trait so alternate
//! heuristics can be swapped without touching search code. Scores are
//! always White minus Black, in centipawns.

use crate::board::board::Board;
use crate::board::square::{self, SQUARES_PER_RANK};
use crate::errors::Errors;
use crate::pieces::piece::{Color, PieceKind};
use crate::player::player::Player;

const CHECK_BONUS: i32 = 50;
const CHECK_MATE_BONUS: i32 = 500;
const DEPTH_BONUS: i32 = 100;
const CASTLE_BONUS: i32 = 60;
const TWO_BISHOPS_BONUS: i32 = 25;
const PAWN_STRUCTURE_PENALTY: i32 = 10;

pub trait BoardEvaluator {
    /// Score `board` from White's point of view. `depth` is the remaining
    /// search depth, used to prefer faster mates.
    fn evaluate(&self, board: &Board, depth: u8) -> Result<i32, Errors>;
}

/// Material, piece placement, mobility, pawn structure, and king state.
/// Stateless: the same board always produces the same score.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEvaluator;

impl BoardEvaluator for StandardEvaluator {
    fn evaluate(&self, board: &Board, depth: u8) -> Result<i32, Errors> {
        let white = Player::derive(board, Color::White);
        let black = Player::derive(board, Color::Black);
        Ok(score_player(board, &white, &black, depth)?
            - score_player(board, &black, &white, depth)?)
    }
}

fn score_player(
    board: &Board,
    player: &Player,
    opponent: &Player,
    depth: u8,
) -> Result<i32, Errors> {
    Ok(material_and_placement(board, player.color())
        + mobility(player, opponent)
        + favorable_captures(player)
        + pawn_structure(board, player.color())
        + check(opponent)
        + checkmate(opponent, depth)?
        + castled(player))
}

fn material_and_placement(board: &Board, color: Color) -> i32 {
    let mut score = 0;
    let mut bishops = 0;
    for piece in board.pieces(color) {
        score += piece.value() + placement_bonus(piece.kind, piece.position, color);
        if piece.kind == PieceKind::Bishop {
            bishops += 1;
        }
    }
    if bishops >= 2 {
        score += TWO_BISHOPS_BONUS;
    }
    score
}

/// Own legal move count over the opponent's, integer-truncated. The
/// truncation collapses the term to zero in most positions; kept as is
/// rather than rescaled.
fn mobility(player: &Player, opponent: &Player) -> i32 {
    player.legal_moves().len() as i32 / (opponent.legal_moves().len() as i32).max(1)
}

/// One point per capture where the mover is worth no more than its target.
fn favorable_captures(player: &Player) -> i32 {
    player
        .legal_moves()
        .iter()
        .filter(|mv| {
            match (mv.moved_piece(), mv.captured_piece()) {
                (Some(mover), Some(captured)) => mover.value() <= captured.value(),
                _ => false,
            }
        })
        .count() as i32
}

/// Doubled and isolated pawn penalties, counted per offending pawn.
fn pawn_structure(board: &Board, color: Color) -> i32 {
    let mut pawns_per_file = [0i32; SQUARES_PER_RANK];
    for piece in board.pieces(color) {
        if piece.kind == PieceKind::Pawn {
            pawns_per_file[square::file_of(piece.position) as usize] += 1;
        }
    }

    let mut penalty = 0;
    for (file, count) in pawns_per_file.iter().enumerate() {
        if *count > 1 {
            penalty += count * PAWN_STRUCTURE_PENALTY;
        }
        if *count > 0 {
            let left = if file == 0 { 0 } else { pawns_per_file[file - 1] };
            let right = if file == SQUARES_PER_RANK - 1 {
                0
            } else {
                pawns_per_file[file + 1]
            };
            if left == 0 && right == 0 {
                penalty += count * PAWN_STRUCTURE_PENALTY;
            }
        }
    }
    -penalty
}

fn check(opponent: &Player) -> i32 {
    if opponent.is_in_check() {
        CHECK_BONUS
    } else {
        0
    }
}

fn checkmate(opponent: &Player, depth: u8) -> Result<i32, Errors> {
    if opponent.is_in_checkmate()? {
        Ok(CHECK_MATE_BONUS * depth_bonus(depth))
    } else {
        Ok(0)
    }
}

/// Mates found higher in the tree score more, so the engine prefers the
/// fastest one.
fn depth_bonus(depth: u8) -> i32 {
    if depth == 0 {
        1
    } else {
        DEPTH_BONUS * depth as i32
    }
}

fn castled(player: &Player) -> i32 {
    if player.is_castled() {
        CASTLE_BONUS
    } else {
        0
    }
}

/// Placement bonus for `color`'s piece of `kind` on `position`. Tables are
/// laid out from White's side; Black reads the rank-mirrored square.
fn placement_bonus(kind: PieceKind, position: i8, color: Color) -> i32 {
    let index = match color {
        Color::White => position as usize,
        Color::Black => (position ^ 56) as usize,
    };
    match kind {
        PieceKind::Pawn => PAWN_TABLE[index],
        PieceKind::Knight => KNIGHT_TABLE[index],
        PieceKind::Bishop => BISHOP_TABLE[index],
        PieceKind::Rook => ROOK_TABLE[index],
        PieceKind::Queen => QUEEN_TABLE[index],
        PieceKind::King => KING_TABLE[index],
    }
}

#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];
