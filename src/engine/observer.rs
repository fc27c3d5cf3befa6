//! Presentation-side collaborator.
//!
//! Rendering, animation and audio live outside the core. They implement
//! `RoundObserver` and are handed to a [`Round`](super::Round) explicitly.
//! Every callback fires after the state change it reports is complete, and
//! the core never waits on what the observer does with it.

use rustc_hash::FxHashSet;

use crate::board::BoardState;
use crate::core::Position;

use super::evaluator::MismatchReason;
use super::round::MatchRecord;

/// Receives round events. All methods default to doing nothing.
pub trait RoundObserver {
    /// A first tile was chosen.
    fn on_first_selected(&mut self, _pos: Position) {}

    /// The chosen tile was released.
    fn on_deselected(&mut self, _pos: Position) {}

    /// A pair was eliminated.
    fn on_match(&mut self, _record: &MatchRecord) {}

    /// A pair was rejected.
    fn on_mismatch(&mut self, _first: Position, _second: Position, _reason: MismatchReason) {}

    /// Tiles changed orientation.
    fn on_flip(&mut self, _flipped: &FxHashSet<Position>) {}

    /// Every face on the board has been eliminated.
    fn on_round_complete(&mut self) {}

    /// A fresh or restored board replaced the previous one.
    fn on_new_board(&mut self, _board: &BoardState) {}
}

/// Observer that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl RoundObserver for NoopObserver {}
