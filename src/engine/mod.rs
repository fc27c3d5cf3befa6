//! Selection, match evaluation, and the round facade.
//!
//! ## Key Types
//!
//! - `MatchEvaluator`: Sum rule plus path connectivity
//! - `SelectionEngine`: `Idle` / `OneSelected` state machine over a board
//! - `Round`: Lifecycle, history, hints, persistence hooks
//! - `RoundObserver`: Presentation collaborator (animation, audio)
//! - `SnapshotStore`: Persistence collaborator

pub mod evaluator;
pub mod selection;
pub mod observer;
pub mod store;
pub mod round;

pub use evaluator::{MatchEvaluator, MatchVerdict, MismatchReason};
pub use selection::{SelectionEngine, SelectionResult, SelectionState};
pub use observer::{NoopObserver, RoundObserver};
pub use store::{MemoryStore, SnapshotStore};
pub use round::{Hint, HintStep, MatchRecord, Round};
