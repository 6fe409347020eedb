//! Generalized win detection.

use crate::types::{Board, Cell, Player};
use tracing::instrument;

/// All candidate winning lines for an N×N board, as index sequences of
/// length N: every row, then every column, then the main diagonal and the
/// anti-diagonal.
pub(crate) fn lines(dim: usize) -> Vec<Vec<usize>> {
    let mut lines = Vec::with_capacity(2 * dim + 2);
    for row in 0..dim {
        lines.push((0..dim).map(|col| row * dim + col).collect());
    }
    for col in 0..dim {
        lines.push((0..dim).map(|row| row * dim + col).collect());
    }
    lines.push((0..dim).map(|i| i * dim + i).collect());
    lines.push((1..=dim).map(|i| i * dim - i).collect());
    lines
}

/// Returns the winning mark and its completed line, if any.
///
/// Lines are checked rows first, then columns, then diagonals, and the
/// first fully-marked line is reported. At most one winning line can exist
/// in a position reached by legal play, so callers must not rely on which
/// line comes back from a hand-built board holding several.
#[instrument(skip(board))]
pub(crate) fn winning_line(board: &Board) -> Option<(Player, Vec<usize>)> {
    for line in lines(board.size().dim()) {
        let first = board.get(line[0]);
        if let Some(Cell::Occupied(mark)) = first {
            if line.iter().all(|&index| board.get(index) == first) {
                return Some((mark, line));
            }
        }
    }
    None
}
