//! Core domain types for the board and match outcome.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Player {
    /// Player X (moves first).
    #[display("X")]
    X,
    /// Player O (moves second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

/// Supported board dimensions.
///
/// A closed set, so a malformed dimension is unrepresentable. The size is
/// fixed for the lifetime of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum BoardSize {
    /// Classic 3x3 board.
    #[display("3x3")]
    Three,
    /// 4x4 board.
    #[display("4x4")]
    Four,
    /// 5x5 board.
    #[display("5x5")]
    Five,
}

impl BoardSize {
    /// Side length of the board.
    pub fn dim(self) -> usize {
        match self {
            BoardSize::Three => 3,
            BoardSize::Four => 4,
            BoardSize::Five => 5,
        }
    }

    /// Total number of cells (dim squared).
    pub fn cell_count(self) -> usize {
        self.dim() * self.dim()
    }

    /// The four corner cell indices.
    pub(crate) fn corners(self) -> [usize; 4] {
        let n = self.dim();
        [0, n - 1, n * (n - 1), n * n - 1]
    }

    /// Exact center cell index, present only on odd side lengths.
    pub(crate) fn center(self) -> Option<usize> {
        let n = self.dim();
        (n % 2 == 1).then(|| n * n / 2)
    }
}

/// N×N board with cells in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Cell>,
    size: BoardSize,
}

impl Board {
    /// Creates a new empty board of the given size.
    pub fn new(size: BoardSize) -> Self {
        Self {
            cells: vec![Cell::Empty; size.cell_count()],
            size,
        }
    }

    /// Returns the board size.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Gets the cell at the given index.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indices of all empty cells, in ascending order.
    ///
    /// Empty result means the board is full.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Returns a copy of the board with `player`'s mark at `index`.
    ///
    /// Does not validate legality: callers are responsible for only playing
    /// empty cells. An out-of-range index returns an unchanged copy. The
    /// input board is never mutated, which keeps the primitive safe to use
    /// inside search.
    pub fn with_move(&self, index: usize, player: Player) -> Self {
        let mut next = self.clone();
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Cell::Occupied(player);
        }
        next
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty cells show their one-based index so a reader can name a move.
    pub fn display(&self) -> String {
        let n = self.size.dim();
        let mut result = String::new();
        for row in 0..n {
            for col in 0..n {
                let index = row * n + col;
                let symbol = match self.cells[index] {
                    Cell::Empty => (index + 1).to_string(),
                    Cell::Occupied(player) => player.to_string(),
                };
                result.push_str(&format!("{symbol:>2}"));
                if col < n - 1 {
                    result.push('|');
                }
            }
            if row < n - 1 {
                result.push('\n');
                result.push_str(&"--+".repeat(n - 1));
                result.push_str("--\n");
            }
        }
        result
    }
}

/// Terminal result of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player completed a line.
    Won(Player),
    /// The board filled with no line completed.
    Draw,
}

/// Win-check report for a terminal board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    /// How the match ended.
    pub outcome: Outcome,
    /// Cell indices of the completed line, `None` on a draw.
    pub winning_line: Option<Vec<usize>>,
}
