//! Heuristic ladders: random, offensive, and defensive play.

use crate::types::{Board, Outcome, Player};
use rand::prelude::IndexedRandom;

/// Uniformly random empty cell.
pub(super) fn random_move(board: &Board) -> Option<usize> {
    board.available_moves().choose(&mut rand::rng()).copied()
}

/// First available move that completes a line for `mark`.
///
/// Also serves as threat detection: called with the opponent's mark, it
/// finds the cell the opponent would win on, which is the cell to block.
fn winning_move(board: &Board, mark: Player) -> Option<usize> {
    board.available_moves().into_iter().find(|&index| {
        board
            .with_move(index, mark)
            .verdict()
            .is_some_and(|verdict| verdict.outcome == Outcome::Won(mark))
    })
}

/// Center if empty, else a random empty corner.
///
/// Even side lengths have no exact center cell, so that rung is skipped
/// on the 4x4 board.
fn positional_move(board: &Board) -> Option<usize> {
    if let Some(center) = board.size().center() {
        if board.is_empty(center) {
            return Some(center);
        }
    }
    let corners: Vec<usize> = board
        .size()
        .corners()
        .into_iter()
        .filter(|&index| board.is_empty(index))
        .collect();
    corners.choose(&mut rand::rng()).copied()
}

/// Attack first: own win, block, center, corner, random.
pub(super) fn offensive_move(board: &Board, player: Player) -> Option<usize> {
    winning_move(board, player)
        .or_else(|| winning_move(board, player.opponent()))
        .or_else(|| positional_move(board))
        .or_else(|| random_move(board))
}

/// Defend first: block, own win, center, corner, random.
pub(super) fn defensive_move(board: &Board, player: Player) -> Option<usize> {
    winning_move(board, player.opponent())
        .or_else(|| winning_move(board, player))
        .or_else(|| positional_move(board))
        .or_else(|| random_move(board))
}
