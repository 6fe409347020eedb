//! Move-selection strategies.
//!
//! Each strategy is a pure function of (board, player): no memory of prior
//! calls, no shared state, and the only failure signal is `None` when the
//! board has no empty cell. Callers must treat `None` as "match already
//! terminal", not as an error to recover from.

mod minimax;
mod tactics;

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use strum::EnumIter;
use tracing::instrument;

/// Closed set of move-selection strategies.
///
/// Dispatch is an exhaustive match over the four variants. The strength
/// ranking feeds odds pricing only and never alters how a strategy plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
pub enum Strategy {
    /// Uniformly random legal move.
    Random,
    /// Win now, block second, then center and corners.
    Offensive,
    /// Block now, win second, then center and corners.
    Defensive,
    /// Depth-limited adversarial search.
    Minimax,
}

impl Strategy {
    /// Display name for this strategy.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Random => "Random",
            Strategy::Offensive => "Offensive",
            Strategy::Defensive => "Defensive",
            Strategy::Minimax => "Perfect (Minimax)",
        }
    }

    /// Fixed strength rank, used only to price bets.
    pub fn strength(self) -> u32 {
        match self {
            Strategy::Minimax => 10,
            Strategy::Offensive => 6,
            Strategy::Defensive => 6,
            Strategy::Random => 1,
        }
    }

    /// Picks a move for `player`, or `None` when no legal move exists.
    #[instrument(skip(board), fields(size = %board.size()))]
    pub fn choose(self, board: &Board, player: Player) -> Option<usize> {
        match self {
            Strategy::Random => tactics::random_move(board),
            Strategy::Offensive => tactics::offensive_move(board, player),
            Strategy::Defensive => tactics::defensive_move(board, player),
            Strategy::Minimax => minimax::best_move(board, player),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
