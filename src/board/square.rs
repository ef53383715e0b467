//! Coordinate law for the 64-square board.
//!
//! Squares are numbered 0..63 in row-major order with rank 8 at index 0, so
//! `a8 == 0` and `h1 == 63`. The per-file and per-rank boolean masks exist so
//! move generators can suppress offsets that would wrap a board edge.

use crate::errors::Errors;

pub const NUM_SQUARES: usize = 64;
pub const SQUARES_PER_RANK: usize = 8;

pub const FILE_A: [bool; NUM_SQUARES] = file_mask(0);
pub const FILE_B: [bool; NUM_SQUARES] = file_mask(1);
pub const FILE_G: [bool; NUM_SQUARES] = file_mask(6);
pub const FILE_H: [bool; NUM_SQUARES] = file_mask(7);

pub const RANK_8: [bool; NUM_SQUARES] = rank_mask(0);
pub const RANK_7: [bool; NUM_SQUARES] = rank_mask(1);
pub const RANK_2: [bool; NUM_SQUARES] = rank_mask(6);
pub const RANK_1: [bool; NUM_SQUARES] = rank_mask(7);

#[rustfmt::skip]
const ALGEBRAIC_NAMES: [&str; NUM_SQUARES] = [
    "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7",
    "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5",
    "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3",
    "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1",
];

const fn file_mask(file: usize) -> [bool; NUM_SQUARES] {
    let mut mask = [false; NUM_SQUARES];
    let mut square = file;
    while square < NUM_SQUARES {
        mask[square] = true;
        square += SQUARES_PER_RANK;
    }
    mask
}

const fn rank_mask(rank_row: usize) -> [bool; NUM_SQUARES] {
    let mut mask = [false; NUM_SQUARES];
    let mut square = rank_row * SQUARES_PER_RANK;
    let end = square + SQUARES_PER_RANK;
    while square < end {
        mask[square] = true;
        square += 1;
    }
    mask
}

#[inline]
pub const fn is_valid(coordinate: i8) -> bool {
    coordinate >= 0 && coordinate < NUM_SQUARES as i8
}

#[inline]
pub const fn file_of(coordinate: i8) -> i8 {
    coordinate % SQUARES_PER_RANK as i8
}

/// Return the algebraic name ("a1".."h8") for a coordinate.
pub fn algebraic(coordinate: i8) -> Result<&'static str, Errors> {
    if !is_valid(coordinate) {
        return Err(Errors::OutOfBounds);
    }
    Ok(ALGEBRAIC_NAMES[coordinate as usize])
}

/// Parse an algebraic square name back to its 0..63 coordinate.
pub fn coordinate(name: &str) -> Result<i8, Errors> {
    let mut chars = name.chars();
    let file_char = chars.next();
    let rank_char = chars.next();
    if chars.next().is_some() {
        return Err(Errors::InvalidAlgebraic(name.to_string()));
    }
    match (file_char, rank_char) {
        (Some(file @ 'a'..='h'), Some(rank @ '1'..='8')) => {
            let file_index = file as i8 - 'a' as i8;
            let rank_index = rank as i8 - '1' as i8;
            Ok((7 - rank_index) * SQUARES_PER_RANK as i8 + file_index)
        }
        _ => Err(Errors::InvalidAlgebraic(name.to_string())),
    }
}
