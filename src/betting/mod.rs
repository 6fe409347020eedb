//! Bet lifecycle: creation, settlement, and aggregate statistics.

mod odds;

pub use odds::Odds;

use crate::types::{Outcome, Player};
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A wager on one side of a match.
///
/// Created once before the match starts and immutable thereafter; the odds
/// locked in at creation are what the bet settles at, regardless of any
/// later repricing. Amount and odds are stored verbatim: balance checks
/// and stake limits are the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bet {
    id: String,
    player: Player,
    amount: u64,
    odds: f64,
    timestamp: DateTime<Utc>,
}

impl Bet {
    /// Creates a bet on `player` with a fresh unique id.
    #[instrument]
    pub fn new(player: Player, amount: u64, odds: f64) -> Self {
        let timestamp = Utc::now();
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(9)
            .map(char::from)
            .collect();
        Self {
            id: format!("bet-{}-{}", timestamp.timestamp_millis(), suffix),
            player,
            amount,
            odds,
            timestamp,
        }
    }

    /// Opaque unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The side this bet backs.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Stake amount.
    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// Locked-in payout multiplier.
    pub fn odds(&self) -> f64 {
        self.odds
    }

    /// Creation time.
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Payout for a realized winner.
    ///
    /// `None` (no result) pays nothing. A draw refunds the stake without
    /// multiplying it; a bet placed on the draw itself is a caller-level
    /// construct settled with the draw odds directly, never through this
    /// function. A win on the backed side pays `round(amount * odds)`;
    /// a win for the other side pays nothing.
    #[instrument]
    pub fn payout(&self, winner: Option<Outcome>) -> u64 {
        match winner {
            None => 0,
            Some(Outcome::Draw) => self.amount,
            Some(Outcome::Won(player)) if player == self.player => {
                (self.amount as f64 * self.odds).round() as u64
            }
            Some(Outcome::Won(_)) => 0,
        }
    }

    /// Settles the bet against the match result.
    ///
    /// Consumes the bet, so a bet can only ever settle once.
    #[instrument]
    pub fn settle(self, winner: Option<Outcome>) -> BetResult {
        let profit = self.payout(winner);
        BetResult {
            bet: self,
            outcome: winner,
            profit,
        }
    }
}

/// A settled bet together with the realized match outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BetResult {
    bet: Bet,
    outcome: Option<Outcome>,
    profit: u64,
}

impl BetResult {
    /// The original bet.
    pub fn bet(&self) -> &Bet {
        &self.bet
    }

    /// Outcome the bet settled against.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Amount paid out (gross of stake; zero on a loss).
    pub fn profit(&self) -> u64 {
        self.profit
    }
}

/// Aggregate bookkeeping over settled bets.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BettingStats {
    /// Number of settled bets.
    pub total_bets: u64,
    /// Sum of stakes.
    pub total_wagered: u64,
    /// Sum of payouts.
    pub total_won: u64,
    /// Payouts net of stakes; negative when the bettor is down.
    pub net_profit: i64,
}

impl BettingStats {
    /// Folds a betting history into aggregate totals.
    #[instrument(skip(results), fields(count = results.len()))]
    pub fn from_results(results: &[BetResult]) -> Self {
        results.iter().fold(Self::default(), |mut stats, result| {
            stats.total_bets += 1;
            stats.total_wagered += result.bet.amount;
            stats.total_won += result.profit;
            stats.net_profit += result.profit as i64 - result.bet.amount as i64;
            stats
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_on_backed_winner() {
        let bet = Bet::new(Player::X, 100, 2.5);
        assert_eq!(bet.payout(Some(Outcome::Won(Player::X))), 250);
    }

    #[test]
    fn test_payout_on_losing_side() {
        let bet = Bet::new(Player::X, 100, 2.5);
        assert_eq!(bet.payout(Some(Outcome::Won(Player::O))), 0);
    }

    #[test]
    fn test_payout_draw_refunds_stake() {
        let bet = Bet::new(Player::X, 100, 2.5);
        assert_eq!(bet.payout(Some(Outcome::Draw)), 100);
    }

    #[test]
    fn test_payout_no_result() {
        let bet = Bet::new(Player::X, 100, 2.5);
        assert_eq!(bet.payout(None), 0);
    }

    #[test]
    fn test_payout_rounds_to_nearest() {
        let bet = Bet::new(Player::O, 100, 1.1);
        assert_eq!(bet.payout(Some(Outcome::Won(Player::O))), 110);
        let bet = Bet::new(Player::O, 3, 1.1);
        // 3.3 rounds down.
        assert_eq!(bet.payout(Some(Outcome::Won(Player::O))), 3);
    }

    #[test]
    fn test_settle_carries_bet_and_profit() {
        let bet = Bet::new(Player::X, 40, 2.0);
        let id = bet.id().to_string();
        let result = bet.settle(Some(Outcome::Won(Player::X)));
        assert_eq!(result.bet().id(), id);
        assert_eq!(result.outcome(), Some(Outcome::Won(Player::X)));
        assert_eq!(result.profit(), 80);
    }

    #[test]
    fn test_bet_ids_are_unique() {
        let a = Bet::new(Player::X, 10, 2.0);
        let b = Bet::new(Player::X, 10, 2.0);
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_stats_fold() {
        let results = vec![
            Bet::new(Player::X, 100, 2.5).settle(Some(Outcome::Won(Player::X))),
            Bet::new(Player::O, 50, 2.0).settle(Some(Outcome::Won(Player::X))),
            Bet::new(Player::X, 30, 1.5).settle(Some(Outcome::Draw)),
        ];
        let stats = BettingStats::from_results(&results);
        assert_eq!(stats.total_bets, 3);
        assert_eq!(stats.total_wagered, 180);
        assert_eq!(stats.total_won, 280);
        // (250 - 100) + (0 - 50) + (30 - 30) = 100
        assert_eq!(stats.net_profit, 100);
    }

    #[test]
    fn test_stats_empty_history() {
        assert_eq!(BettingStats::from_results(&[]), BettingStats::default());
    }
}
