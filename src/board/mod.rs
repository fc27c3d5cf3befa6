//! The board: generation, per-round state, and snapshots.
//!
//! ## Key Types
//!
//! - `BoardGenerator`: Builds a shuffled, rule-compliant layout
//! - `BoardState`: Tile contents, orientation and selection flags
//! - `BoardSnapshot`: Serializable capture for external persistence

pub mod state;
pub mod generator;
pub mod snapshot;

pub use state::{BoardState, Cell};
pub use generator::BoardGenerator;
pub use snapshot::{BoardSnapshot, TileRecord};
