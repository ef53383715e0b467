//! Fixed-depth alpha-beta minimax over immutable boards.
//!
//! White maximizes and Black minimizes the evaluator's White-minus-Black
//! score. A transposition table caches scores by Zobrist hash; each engine
//! instance owns its table and key set, so independently seeded engines
//! never share state.

use crate::board::board::Board;
use crate::board::chess_move::Move;
use crate::errors::Errors;
use crate::pieces::piece::Color;
use crate::player::player::Player;
use crate::search::board_scoring::{BoardEvaluator, StandardEvaluator};
use crate::search::move_ordering::order_moves;
use crate::search::transposition_table::{Bound, TableEntry, TableStats, TranspositionTable};
use crate::search::zobrist::{ZobristKeys, DEFAULT_SEED};

/// A search strategy picks one move for the side to move.
pub trait MoveStrategy {
    /// Returns `Move::Null` when the side to move has no playable move.
    fn best_move(&mut self, board: &Board, depth: u8) -> Result<Move, Errors>;
}

#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    pub table_size_mb: usize,
    pub zobrist_seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            table_size_mb: 16,
            zobrist_seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug)]
pub struct AlphaBeta<E: BoardEvaluator = StandardEvaluator> {
    evaluator: E,
    zobrist: ZobristKeys,
    table: TranspositionTable,
    nodes: u64,
}

impl AlphaBeta<StandardEvaluator> {
    pub fn with_default_evaluator(config: SearchConfig) -> Self {
        AlphaBeta::new(StandardEvaluator, config)
    }
}

impl<E: BoardEvaluator> AlphaBeta<E> {
    pub fn new(evaluator: E, config: SearchConfig) -> Self {
        AlphaBeta {
            evaluator,
            zobrist: ZobristKeys::new(config.zobrist_seed),
            table: TranspositionTable::new_with_mb(config.table_size_mb),
            nodes: 0,
        }
    }

    /// Nodes visited since construction or the last `reset`.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn table_stats(&self) -> TableStats {
        self.table.stats()
    }

    pub fn reset(&mut self) {
        self.table.clear();
        self.nodes = 0;
    }

    /// Recursive scorer. `depth` is plies remaining; the window `(alpha,
    /// beta)` bounds the scores still relevant to the caller.
    fn search(&mut self, board: &Board, depth: u8, alpha: i32, beta: i32) -> Result<i32, Errors> {
        self.nodes += 1;

        let key = self.zobrist.hash(board);
        let mut alpha = alpha;
        let mut beta = beta;
        if let Some(entry) = self.table.probe(key, depth) {
            match entry.bound {
                Bound::Exact => return Ok(entry.score),
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return Ok(entry.score);
            }
        }

        if depth == 0 {
            let score = self.evaluator.evaluate(board, depth)?;
            self.table.store(TableEntry {
                key,
                depth,
                score,
                bound: Bound::Exact,
            });
            return Ok(score);
        }

        let original_alpha = alpha;
        let original_beta = beta;
        let maximizing = board.side_to_move() == Color::White;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };
        let mut any_done = false;

        let player = Player::current(board);
        let mut moves = player.legal_moves().to_vec();
        order_moves(&mut moves);

        for mv in &moves {
            let transition = player.make_move(mv)?;
            if !transition.status.is_done() {
                continue;
            }
            any_done = true;

            let score = self.search(&transition.board, depth - 1, alpha, beta)?;
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if alpha >= beta {
                break;
            }
        }

        // Checkmate or stalemate: the evaluator scores the terminal board,
        // with the mate bonus scaled by the remaining depth.
        if !any_done {
            best = self.evaluator.evaluate(board, depth)?;
        }

        let bound = if best <= original_alpha {
            Bound::Upper
        } else if best >= original_beta {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.table.store(TableEntry {
            key,
            depth,
            score: best,
            bound,
        });

        Ok(best)
    }
}

impl<E: BoardEvaluator> MoveStrategy for AlphaBeta<E> {
    /// Root driver: scores every playable move one ply down and keeps the
    /// first one attaining the extremum, so ties resolve by move order.
    fn best_move(&mut self, board: &Board, depth: u8) -> Result<Move, Errors> {
        let player = Player::current(board);
        let maximizing = player.color() == Color::White;

        let mut moves = player.legal_moves().to_vec();
        order_moves(&mut moves);

        let mut alpha = i32::MIN;
        let mut beta = i32::MAX;
        let mut best_move = Move::Null;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

        for mv in &moves {
            let transition = player.make_move(mv)?;
            if !transition.status.is_done() {
                continue;
            }

            let score = self.search(&transition.board, depth.saturating_sub(1), alpha, beta)?;
            if maximizing {
                if score > best_score || best_move == Move::Null {
                    best_score = score;
                    best_move = *mv;
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score || best_move == Move::Null {
                    best_score = score;
                    best_move = *mv;
                }
                beta = beta.min(best_score);
            }
        }

        Ok(best_move)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::move_transition::MoveStatus;
    use crate::pieces::piece::{Piece, PieceKind};

    fn play(board: &Board, from: i8, to: i8) -> Board {
        let mv = Move::create_move(board, from, to).expect("coordinates in range");
        let transition = Player::current(board)
            .make_move(&mv)
            .expect("make_move should run");
        assert_eq!(transition.status, MoveStatus::Done, "move {} rejected", mv);
        transition.board
    }

    #[test]
    fn fools_mate_is_found_at_depth_four() {
        let board = Board::standard();
        let board = play(&board, 53, 45); // f2-f3
        let board = play(&board, 12, 28); // e7-e5
        let board = play(&board, 54, 38); // g2-g4

        let mut engine = AlphaBeta::with_default_evaluator(SearchConfig::default());
        let mv = engine.best_move(&board, 4).expect("search should run");
        assert_eq!(mv.origin(), Some(3), "expected the queen on d8 to move");
        assert_eq!(mv.destination(), Some(39), "expected Qd8-h4");

        let mated = Player::current(&board)
            .make_move(&mv)
            .expect("make_move should run")
            .board;
        let white = Player::current(&mated);
        assert!(white.is_in_checkmate().expect("mate check should run"));
    }

    #[test]
    fn back_rank_mate_in_one_is_found() {
        // Black's own pawns box the king in; Rh8 is mate.
        let board = Board::builder()
            .piece(Piece::new(PieceKind::King, Color::Black, 0))
            .piece(Piece::placed(PieceKind::Pawn, Color::Black, 8, false))
            .piece(Piece::placed(PieceKind::Pawn, Color::Black, 9, false))
            .piece(Piece::placed(PieceKind::Rook, Color::White, 63, false))
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .side_to_move(Color::White)
            .build()
            .expect("valid position");

        let mut engine = AlphaBeta::with_default_evaluator(SearchConfig::default());
        let mv = engine.best_move(&board, 2).expect("search should run");
        assert_eq!(mv.origin(), Some(63));
        assert_eq!(mv.destination(), Some(7));
    }

    #[test]
    fn search_is_deterministic_for_a_fixed_seed() {
        let board = Board::standard();
        let mut first = AlphaBeta::with_default_evaluator(SearchConfig::default());
        let mut second = AlphaBeta::with_default_evaluator(SearchConfig::default());
        assert_eq!(
            first.best_move(&board, 3).expect("search should run"),
            second.best_move(&board, 3).expect("search should run")
        );
    }

    #[test]
    fn a_position_with_no_playable_move_yields_the_null_move() {
        // Stalemate: Black to move has nothing.
        let board = Board::builder()
            .piece(Piece::new(PieceKind::King, Color::Black, 0))
            .piece(Piece::placed(PieceKind::Queen, Color::White, 17, false))
            .piece(Piece::new(PieceKind::King, Color::White, 60))
            .side_to_move(Color::Black)
            .build()
            .expect("valid position");

        let mut engine = AlphaBeta::with_default_evaluator(SearchConfig::default());
        let mv = engine.best_move(&board, 3).expect("search should run");
        assert_eq!(mv, Move::Null);
    }

    #[test]
    fn node_counter_tracks_work() {
        let board = Board::standard();
        let mut engine = AlphaBeta::with_default_evaluator(SearchConfig::default());
        engine.best_move(&board, 2).expect("search should run");
        assert!(engine.nodes() > 0);
        engine.reset();
        assert_eq!(engine.nodes(), 0);
    }
}
