//! Selection state machine.
//!
//! ## States
//!
//! - `Idle`: nothing chosen
//! - `OneSelected(pos)`: one tile chosen, waiting for its partner
//!
//! Every completed match attempt, successful or not, returns the engine to
//! `Idle` with no selection flags left behind. Selected tiles keep their
//! orientation through [`SelectionEngine::flip_all`].
//!
//! Invalid input is never an error: out-of-range or eliminated tiles are
//! reported as [`SelectionResult::Ignored`].

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::board::BoardState;
use crate::core::Position;
use crate::pathfinding::Path;

use super::evaluator::{MatchEvaluator, MatchVerdict, MismatchReason};

/// Selection cursor state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionState {
    #[default]
    Idle,
    OneSelected(Position),
}

impl SelectionState {
    /// The remembered first selection, if any.
    #[must_use]
    pub const fn selected(self) -> Option<Position> {
        match self {
            SelectionState::Idle => None,
            SelectionState::OneSelected(pos) => Some(pos),
        }
    }
}

/// Outcome of a selection intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionResult {
    /// Out of range or already eliminated; nothing changed.
    Ignored,
    /// First tile of a pair chosen.
    FirstSelected(Position),
    /// The remembered tile was chosen again and released.
    Deselected(Position),
    /// Both tiles matched and their upward faces are eliminated.
    MatchSuccess {
        first: Position,
        second: Position,
        path: Path,
    },
    /// The pair did not match; both selections are released.
    MatchFailed {
        first: Position,
        second: Position,
        reason: MismatchReason,
    },
}

/// Tracks the selection cursor and applies match verdicts to the board.
#[derive(Clone, Debug)]
pub struct SelectionEngine {
    board: BoardState,
    state: SelectionState,
    evaluator: MatchEvaluator,
}

impl SelectionEngine {
    /// Take ownership of a board. Any selection flags on it are cleared.
    #[must_use]
    pub fn new(board: BoardState, target_sum: u8) -> Self {
        let mut engine = Self {
            board,
            state: SelectionState::Idle,
            evaluator: MatchEvaluator::new(target_sum),
        };
        engine.board.clear_selection();
        engine
    }

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Get the selection state.
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Get the match evaluator.
    #[must_use]
    pub fn evaluator(&self) -> &MatchEvaluator {
        &self.evaluator
    }

    /// Swap in a new board, returning to `Idle`.
    pub fn replace_board(&mut self, board: BoardState) -> BoardState {
        let old = std::mem::replace(&mut self.board, board);
        self.board.clear_selection();
        self.state = SelectionState::Idle;
        old
    }

    /// Value showing at `pos` (0 if eliminated or out of range).
    #[must_use]
    pub fn upward_value(&self, pos: Position) -> u8 {
        self.board.upward_value(pos)
    }

    /// True once every face of every tile is eliminated.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.board.is_round_complete()
    }

    /// Process a selection intent.
    pub fn select(&mut self, pos: Position) -> SelectionResult {
        if !pos.is_interior() || self.board.is_eliminated(pos) {
            trace!(%pos, "selection ignored");
            return SelectionResult::Ignored;
        }

        match self.state {
            SelectionState::OneSelected(prev) if prev == pos => {
                self.deselect(pos);
                SelectionResult::Deselected(pos)
            }
            SelectionState::Idle => {
                self.board.set_selected(pos, true);
                self.state = SelectionState::OneSelected(pos);
                trace!(%pos, "first tile selected");
                SelectionResult::FirstSelected(pos)
            }
            SelectionState::OneSelected(prev) => self.attempt_match(prev, pos),
        }
    }

    fn attempt_match(&mut self, first: Position, second: Position) -> SelectionResult {
        let verdict = self.evaluator.evaluate(&self.board, first, second);

        self.board.set_selected(first, false);
        self.board.set_selected(second, false);
        self.state = SelectionState::Idle;

        match verdict {
            MatchVerdict::Success(path) => {
                self.board.eliminate_upward(first);
                self.board.eliminate_upward(second);
                trace!(%first, %second, steps = path.len() - 1, "match");
                SelectionResult::MatchSuccess {
                    first,
                    second,
                    path,
                }
            }
            MatchVerdict::Failure(reason) => {
                trace!(%first, %second, %reason, "mismatch");
                SelectionResult::MatchFailed {
                    first,
                    second,
                    reason,
                }
            }
        }
    }

    /// Release the remembered selection.
    ///
    /// Returns false unless `pos` is the remembered selection.
    pub fn deselect(&mut self, pos: Position) -> bool {
        if self.state.selected() != Some(pos) {
            return false;
        }
        self.board.set_selected(pos, false);
        self.state = SelectionState::Idle;
        trace!(%pos, "deselected");
        true
    }

    /// Turn every unselected tile to the requested face.
    ///
    /// Face values are untouched; only orientation changes. Returns the
    /// positions whose orientation actually changed.
    pub fn flip_all(&mut self, show_a_side: bool) -> FxHashSet<Position> {
        let flipped = self.board.orient_unselected(show_a_side);
        trace!(show_a_side, flipped = flipped.len(), "flip all");
        flipped
    }
}
