//! Path connectivity between two tiles.
//!
//! Two tiles can only be matched if an unobstructed orthogonal route joins
//! them, travelling over eliminated tiles or around the outside of the board.
//! The search is bounded by the 12×12 routing grid, so every call is cheap
//! and runs to completion synchronously.

pub mod finder;

pub use finder::{Connectivity, Path, PathFinder};
