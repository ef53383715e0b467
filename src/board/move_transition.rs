//! Outcome of asking a player to make a move.
//!
//! Illegal moves are reported through `MoveStatus` rather than errors so the
//! search loop and host applications can probe candidates cheaply.

use crate::board::board::Board;
use crate::board::chess_move::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveStatus {
    /// The move was applied; the transition board is the successor position.
    Done,
    /// The move is not in the player's legal-move set.
    IllegalMove,
    /// The move is in the set but would leave the mover's own king attacked;
    /// the transition board is the unchanged pre-move board.
    LeavesPlayerInCheck,
}

impl MoveStatus {
    #[inline]
    pub fn is_done(self) -> bool {
        matches!(self, MoveStatus::Done)
    }
}

#[derive(Debug, Clone)]
pub struct MoveTransition {
    pub board: Board,
    pub played: Move,
    pub status: MoveStatus,
}
