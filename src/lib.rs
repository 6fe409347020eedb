//! Matchbook - rules, strategies, and wagering for generalized tic-tac-toe.
//!
//! Two automated strategies play tic-tac-toe on a 3x3, 4x4, or 5x5 board
//! while a wagering layer prices the match from the strategies' relative
//! strength and settles stakes against the result.
//!
//! # Architecture
//!
//! - **Rules**: board state, legal moves, generalized win/draw detection
//! - **Strategies**: four move-selection algorithms, from uniformly random
//!   to depth-limited minimax
//! - **Betting**: odds pricing, bet settlement, aggregate statistics
//!
//! Everything is a synchronous pure function over immutable value
//! snapshots; the library performs no I/O and holds no state between calls.
//!
//! # Example
//!
//! ```
//! use matchbook::{Bet, BoardSize, Odds, Player, Strategy, play_match};
//!
//! let odds = Odds::calculate(Strategy::Minimax, Strategy::Random);
//! let bet = Bet::new(Player::X, 100, odds.x);
//!
//! let verdict = play_match(Strategy::Minimax, Strategy::Random, BoardSize::Three);
//! let result = bet.settle(Some(verdict.outcome));
//! assert!(result.profit() == 0 || result.profit() >= 100);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod betting;
mod game;
mod rules;
mod strategy;
mod types;

// Crate-level exports - Betting
pub use betting::{Bet, BetResult, BettingStats, Odds};

// Crate-level exports - Match driver
pub use game::{GameStats, play_match};

// Crate-level exports - Strategies
pub use strategy::Strategy;

// Crate-level exports - Board and rules types
pub use types::{Board, BoardSize, Cell, Outcome, Player, Verdict};
