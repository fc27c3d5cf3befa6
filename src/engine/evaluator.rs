//! Match evaluation.
//!
//! A pair matches when the two upward values reach the target sum and a
//! route connects the tiles. The sum is checked first so that mismatched
//! pairs never pay for a path search.

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::core::{Position, ELIMINATED};
use crate::pathfinding::{Connectivity, Path, PathFinder};

/// Why a pair did not match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MismatchReason {
    /// Upward values do not reach the target (or one face is gone).
    SumMismatch,
    /// No unobstructed route joins the tiles.
    NoPath,
}

impl std::fmt::Display for MismatchReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MismatchReason::SumMismatch => write!(f, "values do not sum to target"),
            MismatchReason::NoPath => write!(f, "no connecting path"),
        }
    }
}

/// Outcome of evaluating a pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchVerdict {
    /// The tiles match; carries the route for presentation.
    Success(Path),
    /// The tiles do not match.
    Failure(MismatchReason),
}

impl MatchVerdict {
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, MatchVerdict::Success(_))
    }
}

/// Combines the sum rule with a connectivity oracle.
#[derive(Clone, Debug)]
pub struct MatchEvaluator<C = PathFinder> {
    connectivity: C,
    target_sum: u8,
}

impl MatchEvaluator {
    /// Create an evaluator backed by [`PathFinder`].
    #[must_use]
    pub fn new(target_sum: u8) -> Self {
        Self::with_connectivity(PathFinder::new(), target_sum)
    }
}

impl<C: Connectivity> MatchEvaluator<C> {
    /// Create an evaluator with a custom connectivity oracle.
    #[must_use]
    pub fn with_connectivity(connectivity: C, target_sum: u8) -> Self {
        Self {
            connectivity,
            target_sum,
        }
    }

    /// Target sum for a match.
    #[must_use]
    pub fn target_sum(&self) -> u8 {
        self.target_sum
    }

    /// Check if two upward values reach the target.
    #[must_use]
    pub fn sums_to_target(&self, first: u8, second: u8) -> bool {
        first != ELIMINATED
            && second != ELIMINATED
            && u16::from(first) + u16::from(second) == u16::from(self.target_sum)
    }

    /// Evaluate the tiles at `first` and `second` on `board`.
    ///
    /// Eliminated tiles are open floor for the route; the endpoints are
    /// always enterable.
    pub fn evaluate(&self, board: &BoardState, first: Position, second: Position) -> MatchVerdict {
        if !self.sums_to_target(board.upward_value(first), board.upward_value(second)) {
            return MatchVerdict::Failure(MismatchReason::SumMismatch);
        }

        match self
            .connectivity
            .find_path(first, second, |pos| board.is_eliminated(pos))
        {
            Some(path) => MatchVerdict::Success(path),
            None => MatchVerdict::Failure(MismatchReason::NoPath),
        }
    }
}
