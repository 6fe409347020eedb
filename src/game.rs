//! Match driver: runs two strategies against each other to a verdict.

use crate::strategy::Strategy;
use crate::types::{Board, BoardSize, Outcome, Player, Verdict};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Plays a full match between two strategies on a fresh board.
///
/// X moves first; turns alternate until the board reports a verdict. Pacing
/// between plies (animation delays and the like) is a presentation concern:
/// this loop runs the match synchronously to completion.
#[instrument]
pub fn play_match(strategy_x: Strategy, strategy_o: Strategy, size: BoardSize) -> Verdict {
    let mut board = Board::new(size);
    let mut to_move = Player::X;
    loop {
        let strategy = match to_move {
            Player::X => strategy_x,
            Player::O => strategy_o,
        };
        let Some(index) = strategy.choose(&board, to_move) else {
            // No legal move without a verdict is unreachable from legal
            // play; report the full-board draw it implies.
            return Verdict {
                outcome: Outcome::Draw,
                winning_line: None,
            };
        };
        board = board.with_move(index, to_move);
        if let Some(verdict) = board.verdict() {
            return verdict;
        }
        to_move = to_move.opponent();
    }
}

/// Session scoreboard across matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    /// Matches won by X.
    pub x_wins: u64,
    /// Matches won by O.
    pub o_wins: u64,
    /// Drawn matches.
    pub draws: u64,
}

impl GameStats {
    /// Records one finished match.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }
}
