use crate::engine::config::EngineConfig;
use crate::engine::{Move, SearchStats, Searcher};
use crate::logic::board::{Board, BoardCoordinate, Player};
use crate::logic::rules::{capture_total, is_valid_move};
use std::sync::Arc;

/// Shallow greedy move evaluator.
///
/// Not a minimax search: the lookahead deliberately scores opponent replies
/// on the unchanged board (the candidate disc is never placed during
/// evaluation) and subtracts the opponent's *minimum* reply score. Both
/// quirks are kept for compatibility with the long-standing scoring
/// behavior and are pinned by tests.
pub struct GreedyEngine {
    config: Arc<EngineConfig>,
    nodes_searched: u32,
}

impl GreedyEngine {
    #[must_use]
    pub const fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            config,
            nodes_searched: 0,
        }
    }

    /// Scores placing at `pos` for `player`: discs flipped immediately,
    /// minus the weakest opponent reply when `depth > 0`.
    ///
    /// If the opponent has no legal reply the min accumulator stays at its
    /// `i32::MAX` sentinel and the (saturating) subtraction drives the score
    /// hard negative.
    fn evaluate_move(
        &mut self,
        board: &Board,
        pos: BoardCoordinate,
        player: Player,
        depth: u8,
    ) -> i32 {
        self.nodes_searched += 1;
        let mut score = capture_total(board, pos, player) as i32;
        if depth > 0 {
            let opponent = player.opposite();
            let mut best_reply = i32::MAX;
            for reply in Board::coordinates() {
                if is_valid_move(board, reply, opponent) {
                    let reply_score = self.evaluate_move(board, reply, opponent, depth - 1);
                    best_reply = best_reply.min(reply_score);
                }
            }
            score = score.saturating_sub(best_reply);
        }
        score
    }
}

impl Searcher for GreedyEngine {
    fn search(&mut self, board: &Board, player: Player) -> Option<(Move, SearchStats)> {
        self.nodes_searched = 0;
        let depth = self.config.lookahead_depth;

        // Row-major scan; strict comparison, so ties keep the first
        // (lexicographically smallest) coordinate.
        let mut best: Option<Move> = None;
        for pos in Board::coordinates() {
            if !is_valid_move(board, pos, player) {
                continue;
            }
            let score = self.evaluate_move(board, pos, player, depth);
            if best.map_or(true, |b| score > b.score) {
                best = Some(Move { coord: pos, score });
            }
        }

        best.map(|mv| {
            let stats = SearchStats {
                depth,
                nodes: self.nodes_searched,
            };
            log::debug!(
                "selected {} score={} depth={} nodes={}",
                mv.coord,
                mv.score,
                stats.depth,
                stats.nodes
            );
            (mv, stats)
        })
    }
}
