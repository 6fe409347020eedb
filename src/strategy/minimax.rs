//! Depth-limited minimax search.
//!
//! On the 3x3 board the search runs to the natural terminal depth and plays
//! provably optimal moves. Larger boards cap the ply depth to bound latency,
//! scoring any subtree left unexplored at the cap as a neutral `0`. The
//! neutral cutoff score is deliberate: odds calibration assumes this exact
//! behavior, so it must not be replaced with an evaluation heuristic.

use crate::types::{Board, BoardSize, Outcome, Player};
use tracing::instrument;

/// Ply cap per board size. `None` searches to the natural terminal depth.
fn depth_cap(size: BoardSize) -> Option<i32> {
    match size {
        BoardSize::Three => None,
        BoardSize::Four => Some(4),
        BoardSize::Five => Some(3),
    }
}

/// Picks the move with the highest minimax score for `player`.
///
/// Ties keep the first move in enumeration order, making the choice
/// deterministic for a given board.
#[instrument(skip(board), fields(size = %board.size()))]
pub(super) fn best_move(board: &Board, player: Player) -> Option<usize> {
    let cap = depth_cap(board.size());
    let mut best: Option<(usize, i32)> = None;
    for index in board.available_moves() {
        let next = board.with_move(index, player);
        let score = score(&next, player, false, 0, cap);
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }
    best.map(|(index, _)| index)
}

/// Recursive score of a position from `player`'s point of view.
///
/// Terminal positions score `10 - depth` for an own win, `depth - 10` for
/// an opponent win, and `0` for a draw, so quicker wins and slower losses
/// are preferred. `maximizing` alternates each ply: `player` maximizes,
/// the simulated opponent minimizes.
fn score(board: &Board, player: Player, maximizing: bool, depth: i32, cap: Option<i32>) -> i32 {
    if let Some(verdict) = board.verdict() {
        return match verdict.outcome {
            Outcome::Won(winner) if winner == player => 10 - depth,
            Outcome::Won(_) => depth - 10,
            Outcome::Draw => 0,
        };
    }
    if cap.is_some_and(|cap| depth >= cap) {
        // Neutral score for unexplored subtrees at the cap.
        return 0;
    }

    let mover = if maximizing {
        player
    } else {
        player.opponent()
    };
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for index in board.available_moves() {
        let next = board.with_move(index, mover);
        let value = score(&next, player, !maximizing, depth + 1, cap);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_immediate_win() {
        // X X _ / O O _ / _ _ _: winning at 2 beats blocking at 5.
        let board = Board::new(BoardSize::Three)
            .with_move(0, Player::X)
            .with_move(1, Player::X)
            .with_move(3, Player::O)
            .with_move(4, Player::O);
        assert_eq!(best_move(&board, Player::X), Some(2));
    }

    #[test]
    fn test_blocks_opponent_threat() {
        // O threatens 0-1-2; X has no win of its own.
        let board = Board::new(BoardSize::Three)
            .with_move(0, Player::O)
            .with_move(1, Player::O)
            .with_move(4, Player::X);
        assert_eq!(best_move(&board, Player::X), Some(2));
    }

    #[test]
    fn test_prefers_faster_win() {
        // X can win immediately at 2, or set up slower wins elsewhere.
        let board = Board::new(BoardSize::Three)
            .with_move(0, Player::X)
            .with_move(1, Player::X)
            .with_move(4, Player::X)
            .with_move(3, Player::O)
            .with_move(5, Player::O)
            .with_move(7, Player::O);
        assert_eq!(best_move(&board, Player::X), Some(2));
    }

    #[test]
    fn test_none_on_full_board() {
        let mut board = Board::new(BoardSize::Three);
        for index in 0..9 {
            let mark = if index % 2 == 0 { Player::X } else { Player::O };
            board = board.with_move(index, mark);
        }
        assert_eq!(best_move(&board, Player::X), None);
    }

    #[test]
    fn test_capped_search_blocks_on_large_board() {
        // O has four in a row on the 5x5 top row; even the shallow capped
        // search must see the immediate loss and block at 4.
        let board = Board::new(BoardSize::Five)
            .with_move(0, Player::O)
            .with_move(1, Player::O)
            .with_move(2, Player::O)
            .with_move(3, Player::O)
            .with_move(12, Player::X)
            .with_move(17, Player::X)
            .with_move(22, Player::X);
        assert_eq!(best_move(&board, Player::O), Some(4));
        assert_eq!(best_move(&board, Player::X), Some(4));
    }

    #[test]
    fn test_cutoff_scores_neutral() {
        // A quiet 5x5 opening has no reachable terminal inside the cap, so
        // every move scores 0 and enumeration order picks the first cell.
        let board = Board::new(BoardSize::Five).with_move(12, Player::O);
        assert_eq!(best_move(&board, Player::X), Some(0));
    }
}
