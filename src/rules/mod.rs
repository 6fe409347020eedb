//! Win and draw rules composed into a single verdict check.

mod draw;
mod win;

use crate::types::{Board, Outcome, Verdict};
use tracing::instrument;

impl Board {
    /// Checks the board for a terminal result.
    ///
    /// A pure function of the current cell contents: `Some(Verdict)` when a
    /// line is complete or the board is full, `None` while play continues.
    /// History plays no part, so any two boards with equal cells get equal
    /// verdicts.
    #[instrument(skip(self))]
    pub fn verdict(&self) -> Option<Verdict> {
        if let Some((winner, line)) = win::winning_line(self) {
            return Some(Verdict {
                outcome: Outcome::Won(winner),
                winning_line: Some(line),
            });
        }
        if draw::is_full(self) {
            return Some(Verdict {
                outcome: Outcome::Draw,
                winning_line: None,
            });
        }
        None
    }
}
