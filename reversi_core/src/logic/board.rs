use serde::{Deserialize, Serialize};
use serde_big_array::BigArray;
use std::fmt;

pub const BOARD_SIZE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    Black,
    White,
}

impl Player {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Black => Self::White,
            Self::White => Self::Black,
        }
    }

    /// The cell value a disc of this player occupies.
    pub const fn disc(self) -> Cell {
        match self {
            Self::Black => Cell::Black,
            Self::White => Cell::White,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

/// A validated (row, col) pair. Both components are always in `[0, 7]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardCoordinate {
    pub row: usize,
    pub col: usize,
}

impl BoardCoordinate {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Steps by (dr, dc), returning `None` past the board edge.
    #[must_use]
    pub fn offset(self, dr: isize, dc: isize) -> Option<Self> {
        let row = self.row as isize + dr;
        let col = self.col as isize + dc;
        if (0..BOARD_SIZE as isize).contains(&row) && (0..BOARD_SIZE as isize).contains(&col) {
            Some(Self {
                row: row as usize,
                col: col as usize,
            })
        } else {
            None
        }
    }
}

impl fmt::Display for BoardCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Disc counts per player, derived by scanning the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub black: u32,
    pub white: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    #[serde(with = "BigArray")]
    cells: [Cell; BOARD_SIZE * BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A fresh board with the four center cells seeded, two discs each,
    /// diagonally opposite.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Self {
            cells: [Cell::Empty; BOARD_SIZE * BOARD_SIZE],
        };
        board.cells[Self::square_index(3, 3)] = Cell::White;
        board.cells[Self::square_index(3, 4)] = Cell::Black;
        board.cells[Self::square_index(4, 3)] = Cell::Black;
        board.cells[Self::square_index(4, 4)] = Cell::White;
        board
    }

    #[must_use]
    pub const fn square_index(row: usize, col: usize) -> usize {
        row * BOARD_SIZE + col
    }

    #[must_use]
    pub const fn index_to_coord(sq: usize) -> (usize, usize) {
        (sq / BOARD_SIZE, sq % BOARD_SIZE)
    }

    #[must_use]
    pub fn get(&self, pos: BoardCoordinate) -> Cell {
        self.cells[Self::square_index(pos.row, pos.col)]
    }

    pub fn set(&mut self, pos: BoardCoordinate, cell: Cell) {
        self.cells[Self::square_index(pos.row, pos.col)] = cell;
    }

    #[must_use]
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for cell in &self.cells {
            match cell {
                Cell::Black => score.black += 1,
                Cell::White => score.white += 1,
                Cell::Empty => {}
            }
        }
        score
    }

    /// All 64 coordinates in row-major order. Move enumeration relies on
    /// this order for deterministic tie-breaking.
    pub fn coordinates() -> impl Iterator<Item = BoardCoordinate> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| BoardCoordinate { row, col }))
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  0 1 2 3 4 5 6 7")?;
        for row in 0..BOARD_SIZE {
            write!(f, "{row}")?;
            for col in 0..BOARD_SIZE {
                let glyph = match self.cells[Self::square_index(row, col)] {
                    Cell::Empty => '.',
                    Cell::Black => 'X',
                    Cell::White => 'O',
                };
                write!(f, " {glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
