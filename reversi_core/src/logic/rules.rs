use crate::logic::board::{Board, BoardCoordinate, Cell, Player};

/// The eight scan directions around a placement (the zero vector excluded).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    Occupied,
    NoCapture,
    NotYourTurn,
}

/// Checks whether placing a disc at `pos` is legal for `player`.
///
/// A placement is legal iff the cell is empty and at least one direction
/// holds a contiguous run of opponent discs terminated by a `player` disc.
pub fn validate_move(board: &Board, pos: BoardCoordinate, player: Player) -> Result<(), MoveError> {
    if board.get(pos) != Cell::Empty {
        return Err(MoveError::Occupied);
    }
    for dir in DIRECTIONS {
        if capture_count(board, pos, dir, player) > 0 {
            return Ok(());
        }
    }
    Err(MoveError::NoCapture)
}

pub fn is_valid_move(board: &Board, pos: BoardCoordinate, player: Player) -> bool {
    validate_move(board, pos, player).is_ok()
}

/// Places a disc at `pos` and flips every captured run. Directions are
/// resolved independently; a direction whose run ends at an empty cell or
/// the board edge flips nothing. Callers are expected to have validated the
/// move first -- a zero-capture placement simply places the disc.
pub fn place_disc(board: &mut Board, pos: BoardCoordinate, player: Player) {
    board.set(pos, player.disc());
    for (dr, dc) in DIRECTIONS {
        let run = capture_count(board, pos, (dr, dc), player);
        let mut cur = pos;
        for _ in 0..run {
            if let Some(next) = cur.offset(dr, dc) {
                board.set(next, player.disc());
                cur = next;
            }
        }
    }
}

/// Number of discs a placement at `pos` would flip, summed over all eight
/// directions. Pure simulation: the board is never touched. This is the
/// evaluator's immediate scoring term.
#[must_use]
pub fn capture_total(board: &Board, pos: BoardCoordinate, player: Player) -> usize {
    DIRECTIONS
        .iter()
        .map(|&dir| capture_count(board, pos, dir, player))
        .sum()
}

/// Length of the opponent run starting adjacent to `pos` along `dir`,
/// or 0 if the run is not terminated by a `player` disc.
fn capture_count(
    board: &Board,
    pos: BoardCoordinate,
    (dr, dc): (isize, isize),
    player: Player,
) -> usize {
    let own = player.disc();
    let opponent = player.opposite().disc();
    let mut run = 0;
    let mut cur = pos;
    while let Some(next) = cur.offset(dr, dc) {
        let cell = board.get(next);
        if cell == opponent {
            run += 1;
        } else if cell == own {
            return run;
        } else {
            return 0;
        }
        cur = next;
    }
    // Ran off the edge without a terminating disc.
    0
}

/// All legal placements for `player`, in row-major order.
#[must_use]
pub fn legal_moves(board: &Board, player: Player) -> Vec<BoardCoordinate> {
    Board::coordinates()
        .filter(|&pos| is_valid_move(board, pos, player))
        .collect()
}

#[must_use]
pub fn has_any_legal_move(board: &Board, player: Player) -> bool {
    Board::coordinates().any(|pos| is_valid_move(board, pos, player))
}
