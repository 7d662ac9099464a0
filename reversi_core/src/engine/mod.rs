use crate::logic::board::{Board, BoardCoordinate, Player};
use serde::{Deserialize, Serialize};

pub mod config;
pub mod search;

/// A scored placement produced by a [`Searcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub coord: BoardCoordinate,
    pub score: i32,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SearchStats {
    pub depth: u8,
    pub nodes: u32,
}

pub trait Searcher {
    /// Picks a placement for `player`, or `None` if no legal move exists.
    fn search(&mut self, board: &Board, player: Player) -> Option<(Move, SearchStats)>;
}
