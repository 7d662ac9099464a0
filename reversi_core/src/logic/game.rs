use crate::engine::config::EngineConfig;
use crate::engine::search::GreedyEngine;
use crate::engine::Searcher;
use crate::logic::board::{Board, BoardCoordinate, Player, Score};
use crate::logic::rules::{has_any_legal_move, place_disc, validate_move, MoveError};
use std::sync::Arc;

/// Whose turn the controller is in. The human always moves first (Black
/// opens the game).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Human,
    Computer,
}

/// One game of Reversi: the board, the turn, and the computer opponent.
/// Owns all mutable game state; callers drive it through the transition
/// methods and read the board for rendering.
pub struct GameSession {
    pub board: Board,
    pub turn: Turn,
    pub human: Player,
    pub last_move: Option<BoardCoordinate>,
    engine: GreedyEngine,
}

impl GameSession {
    #[must_use]
    pub fn new(config: Arc<EngineConfig>) -> Self {
        Self {
            board: Board::new(),
            turn: Turn::Human,
            human: Player::Black,
            last_move: None,
            engine: GreedyEngine::new(config),
        }
    }

    /// Discards the board wholesale and starts over. The engine and its
    /// configuration are kept.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.turn = Turn::Human;
        self.last_move = None;
        log::debug!("game restarted");
    }

    #[must_use]
    pub const fn computer(&self) -> Player {
        self.human.opposite()
    }

    #[must_use]
    pub const fn current_player(&self) -> Player {
        match self.turn {
            Turn::Human => self.human,
            Turn::Computer => self.human.opposite(),
        }
    }

    /// Attempts the human's placement. On success the turn passes to the
    /// computer; on failure nothing changes.
    pub fn play_human(&mut self, pos: BoardCoordinate) -> Result<(), MoveError> {
        if self.turn != Turn::Human {
            return Err(MoveError::NotYourTurn);
        }
        validate_move(&self.board, pos, self.human)?;
        place_disc(&mut self.board, pos, self.human);
        self.last_move = Some(pos);
        self.turn = Turn::Computer;
        log::debug!("human played {pos}");
        Ok(())
    }

    /// Runs the computer's turn. Returns the placement, or `None` when the
    /// computer has no legal move; in both cases the turn passes back to
    /// the human (a move-less computer turn is skipped silently).
    pub fn play_computer(&mut self) -> Option<BoardCoordinate> {
        if self.turn != Turn::Computer {
            return None;
        }
        let player = self.computer();
        let result = self.engine.search(&self.board, player);
        self.turn = Turn::Human;
        match result {
            Some((mv, stats)) => {
                place_disc(&mut self.board, mv.coord, player);
                self.last_move = Some(mv.coord);
                log::debug!(
                    "computer played {} (score={}, nodes={})",
                    mv.coord,
                    mv.score,
                    stats.nodes
                );
                Some(mv.coord)
            }
            None => {
                log::debug!("computer has no legal move, passing");
                None
            }
        }
    }

    /// Hands the turn to the other side without a placement. For front ends
    /// that let a move-less human pass.
    pub fn skip_turn(&mut self) {
        self.turn = match self.turn {
            Turn::Human => Turn::Computer,
            Turn::Computer => Turn::Human,
        };
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// True once neither side has a legal placement left.
    #[must_use]
    pub fn is_over(&self) -> bool {
        !has_any_legal_move(&self.board, Player::Black)
            && !has_any_legal_move(&self.board, Player::White)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::board::Cell;

    fn coord(row: usize, col: usize) -> BoardCoordinate {
        BoardCoordinate::new(row, col).unwrap()
    }

    fn session() -> GameSession {
        GameSession::new(Arc::new(EngineConfig::default()))
    }

    #[test]
    fn test_human_move_switches_turn() {
        let mut game = session();
        assert_eq!(game.turn, Turn::Human);
        assert_eq!(game.current_player(), Player::Black);

        game.play_human(coord(2, 3)).unwrap();
        assert_eq!(game.turn, Turn::Computer);
        assert_eq!(game.current_player(), Player::White);
        assert_eq!(game.last_move, Some(coord(2, 3)));
    }

    #[test]
    fn test_illegal_human_move_changes_nothing() {
        let mut game = session();
        let snapshot = game.board.clone();

        assert_eq!(game.play_human(coord(3, 3)), Err(MoveError::Occupied));
        assert_eq!(game.play_human(coord(0, 0)), Err(MoveError::NoCapture));
        assert_eq!(game.board, snapshot);
        assert_eq!(game.turn, Turn::Human);
    }

    #[test]
    fn test_out_of_turn_human_move_is_rejected() {
        let mut game = session();
        game.play_human(coord(2, 3)).unwrap();
        assert_eq!(game.play_human(coord(2, 2)), Err(MoveError::NotYourTurn));
    }

    #[test]
    fn test_computer_replies_and_returns_turn() {
        let mut game = session();
        game.play_human(coord(2, 3)).unwrap();

        let reply = game.play_computer();
        assert!(reply.is_some());
        assert_eq!(game.turn, Turn::Human);
        assert_eq!(game.last_move, reply);

        let score = game.score();
        assert_eq!(score.black + score.white, 6);
    }

    #[test]
    fn test_computer_out_of_turn_does_nothing() {
        let mut game = session();
        let snapshot = game.board.clone();
        assert_eq!(game.play_computer(), None);
        assert_eq!(game.board, snapshot);
        assert_eq!(game.turn, Turn::Human);
    }

    #[test]
    fn test_moveless_computer_turn_is_skipped_silently() {
        let mut game = session();
        for pos in Board::coordinates() {
            game.board.set(pos, Cell::Empty);
        }
        // White (the computer) has nothing to capture anywhere.
        game.board.set(coord(0, 0), Cell::Black);
        game.turn = Turn::Computer;

        let snapshot = game.board.clone();
        assert_eq!(game.play_computer(), None);
        assert_eq!(game.board, snapshot);
        assert_eq!(game.turn, Turn::Human);
    }

    #[test]
    fn test_restart_reseeds_board() {
        let mut game = session();
        game.play_human(coord(2, 3)).unwrap();
        game.play_computer();

        game.restart();
        assert_eq!(game.board, Board::new());
        assert_eq!(game.turn, Turn::Human);
        assert_eq!(game.last_move, None);
    }

    #[test]
    fn test_skip_turn_toggles() {
        let mut game = session();
        game.skip_turn();
        assert_eq!(game.turn, Turn::Computer);
        game.skip_turn();
        assert_eq!(game.turn, Turn::Human);
    }

    #[test]
    fn test_game_over_detection() {
        let mut game = session();
        assert!(!game.is_over());

        // A board holding only black discs leaves neither side a move.
        for pos in Board::coordinates() {
            game.board.set(pos, Cell::Black);
        }
        assert!(game.is_over());
    }
}
