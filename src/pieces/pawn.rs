//! Pawn move generation: pushes, double jumps, diagonal captures,
//! en-passant, and promotion on the far rank.
//!
//! Offsets are scaled by the color's travel direction, so one code path
//! serves both sides. Promotion always yields a queen.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::board::square::{self, FILE_A, FILE_H, RANK_2, RANK_7, SQUARES_PER_RANK};
use crate::pieces::piece::{Color, Piece};

const PUSH_OFFSET: i8 = 8;
const JUMP_OFFSET: i8 = 16;
const CAPTURE_OFFSETS: [i8; 2] = [7, 9];

pub fn pseudo_legal_moves(pawn: &Piece, board: &Board) -> Vec<Move> {
    let mut moves = Vec::new();
    let direction = pawn.color.direction();

    // Single push, promoting on the far rank.
    let push = pawn.position + PUSH_OFFSET * direction;
    if square::is_valid(push) && board.tile(push).is_none() {
        if pawn.color.is_promotion_square(push) {
            moves.push(Move::PawnPromotion {
                pawn: *pawn,
                destination: push,
            });
        } else {
            moves.push(Move::Basic {
                piece: *pawn,
                destination: push,
            });
        }

        // Two-square jump from the starting rank, both squares empty.
        let jump = pawn.position + JUMP_OFFSET * direction;
        if pawn.is_first_move
            && on_starting_rank(pawn)
            && square::is_valid(jump)
            && board.tile(jump).is_none()
        {
            moves.push(Move::PawnJump {
                pawn: *pawn,
                destination: jump,
            });
        }
    }

    // Diagonal captures, including en passant and capture-promotions.
    for offset in CAPTURE_OFFSETS {
        if wraps_file_edge(pawn, offset) {
            continue;
        }
        let destination = pawn.position + offset * direction;
        if !square::is_valid(destination) {
            continue;
        }

        match board.tile(destination) {
            Some(target) if target.color != pawn.color => {
                if pawn.color.is_promotion_square(destination) {
                    moves.push(Move::PawnCapturePromotion {
                        pawn: *pawn,
                        destination,
                        captured: target,
                    });
                } else {
                    moves.push(Move::Capture {
                        piece: *pawn,
                        destination,
                        captured: target,
                    });
                }
            }
            Some(_) => {}
            None => {
                // The recorded en-passant pawn sits beside the destination,
                // one rank short of it from the mover's point of view.
                if let Some(en_passant_pawn) = board.en_passant_pawn() {
                    let bypass_square =
                        en_passant_pawn.position + SQUARES_PER_RANK as i8 * direction;
                    if en_passant_pawn.color != pawn.color && destination == bypass_square {
                        moves.push(Move::EnPassantCapture {
                            pawn: *pawn,
                            destination,
                            captured: en_passant_pawn,
                        });
                    }
                }
            }
        }
    }

    moves
}

fn on_starting_rank(pawn: &Piece) -> bool {
    match pawn.color {
        Color::White => RANK_2[pawn.position as usize],
        Color::Black => RANK_7[pawn.position as usize],
    }
}

/// Capture offsets that would cross a file edge once scaled by direction:
/// offset 7 bends toward the h-file for White and the a-file for Black,
/// offset 9 the other way around.
fn wraps_file_edge(pawn: &Piece, offset: i8) -> bool {
    let index = pawn.position as usize;
    match offset {
        7 => match pawn.color {
            Color::White => FILE_H[index],
            Color::Black => FILE_A[index],
        },
        9 => match pawn.color {
            Color::White => FILE_A[index],
            Color::Black => FILE_H[index],
        },
        _ => false,
    }
}
