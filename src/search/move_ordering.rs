//! Deterministic move ordering for better alpha-beta cutoffs.
//!
//! Promotions and high-value captures are searched first, castles before
//! quiet moves. The sort is stable, so ties keep generation order and a
//! fixed comparator gives reproducible search results.

use crate::board::chess_move::Move;

/// Larger keys sort earlier.
fn ordering_key(mv: &Move) -> i32 {
    let mut key = 0;

    if mv.is_promotion() {
        key += 2_000;
    }

    // MVV-LVA: most valuable victim first, least valuable attacker breaking
    // ties.
    if let (Some(mover), Some(captured)) = (mv.moved_piece(), mv.captured_piece()) {
        key += 1_000 + captured.value() - mover.value() / 100;
    }

    if mv.is_castle() {
        key += 500;
    }

    key
}

/// Sort `moves` in place, best candidates first.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| -ordering_key(mv));
}
