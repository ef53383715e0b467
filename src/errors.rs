use crate::pieces::piece::Color;

/// Represents all failure modes surfaced by the engine.
/// Illegal chess moves are *not* errors; they are reported through
/// `MoveStatus` so callers can tell rule rejections apart from API misuse.
#[derive(Debug, PartialEq, Eq)]
pub enum Errors {
    /// A raw coordinate fell outside the 0..63 board range.
    OutOfBounds,
    /// Two pieces were placed on the same square while building a board.
    SquareOccupied(i8),
    /// A board was built with no king for the given color.
    MissingKing(Color),
    /// A board was built with more than one king for the given color.
    ExtraKing(Color),
    /// An algebraic square name could not be parsed.
    InvalidAlgebraic(String),
}
