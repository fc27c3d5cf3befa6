//! # rust-elevens
//!
//! Engine for a pair-elimination tile puzzle.
//!
//! A 10×10 board holds double-sided tiles: an even A-side and an odd
//! B-side. The player picks two tiles whose showing faces sum to 11; if an
//! unobstructed orthogonal route joins them (over eliminated tiles or around
//! the outside of the board) both showing faces are eliminated. Flipping the
//! board turns every unselected tile to the same face.
//!
//! ## Design Principles
//!
//! 1. **Total operations**: Gameplay calls never fail or panic. Invalid
//!    input is reported through return values (`Ignored`, `false`, `0`).
//!
//! 2. **Deterministic generation**: A seed fully determines a board.
//!
//! 3. **Explicit collaborators**: Presentation and persistence plug in
//!    through `RoundObserver` and `SnapshotStore`; the core never renders,
//!    waits, or writes to storage itself.
//!
//! ## Modules
//!
//! - `core`: Positions, tiles, RNG, configuration, errors
//! - `board`: Board state, generation, snapshots
//! - `pathfinding`: BFS connectivity over the bordered grid
//! - `engine`: Match evaluation, selection state machine, round facade

pub mod core;
pub mod board;
pub mod pathfinding;
pub mod engine;

// Re-export commonly used types
pub use crate::core::{
    Position, BOARD_SIZE, TILE_COUNT,
    Face, TileContent,
    GameRng, GameConfig,
    ConfigError, RestoreError, StoreError,
};

pub use crate::board::{BoardGenerator, BoardState, BoardSnapshot, TileRecord};

pub use crate::pathfinding::{Connectivity, Path, PathFinder};

pub use crate::engine::{
    MatchEvaluator, MatchVerdict, MismatchReason,
    SelectionEngine, SelectionResult, SelectionState,
    Round, Hint, HintStep, MatchRecord,
    RoundObserver, NoopObserver,
    SnapshotStore, MemoryStore,
};
