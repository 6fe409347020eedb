//! Odds pricing from strategy strength.

use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Margin factor kept by the house on every priced outcome.
const HOUSE_MARGIN: f64 = 0.9;

/// Floor multiplier; no outcome is ever priced at or below break-even
/// for the house.
const MIN_ODDS: f64 = 1.1;

/// Payout multipliers for the three outcomes of a match.
///
/// Fixed at pricing time and never recomputed once the match starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Odds {
    /// Multiplier on a winning X bet.
    pub x: f64,
    /// Multiplier on a winning O bet.
    pub o: f64,
    /// Multiplier on a winning draw bet.
    pub draw: f64,
}

impl Odds {
    /// Prices a match between the two selected strategies.
    ///
    /// Equal strengths price both sides at exactly 2.0. Otherwise each
    /// side's implied win probability is its share of the combined
    /// strength, converted to a multiplier with the house margin applied
    /// and floored at 1.1. Strength is always at least 1, so the
    /// denominator is never zero.
    ///
    /// Draw odds step on the average strength: strong, deterministic
    /// pairings draw more often, so the draw pays less.
    #[instrument]
    pub fn calculate(strategy_x: Strategy, strategy_o: Strategy) -> Self {
        let x_strength = f64::from(strategy_x.strength());
        let o_strength = f64::from(strategy_o.strength());

        let (x, o) = if x_strength == o_strength {
            (2.0, 2.0)
        } else {
            let total = x_strength + o_strength;
            (
                (HOUSE_MARGIN / (x_strength / total)).max(MIN_ODDS),
                (HOUSE_MARGIN / (o_strength / total)).max(MIN_ODDS),
            )
        };

        let average = (x_strength + o_strength) / 2.0;
        let draw = if average >= 9.0 {
            2.5
        } else if average >= 6.0 {
            3.5
        } else {
            5.0
        };

        Self {
            x: round2(x),
            o: round2(o),
            draw,
        }
    }
}

/// Rounds to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
