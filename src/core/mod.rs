//! Core types: positions, tiles, RNG, configuration, errors.
//!
//! These are the leaf building blocks shared by the board, path finder and
//! selection engine.

pub mod position;
pub mod tile;
pub mod rng;
pub mod config;
pub mod error;

pub use position::{Position, BOARD_SIZE, TILE_COUNT};
pub use tile::{Face, TileContent, ELIMINATED, EVEN_FACES, ODD_FACES};
pub use rng::GameRng;
pub use config::GameConfig;
pub use error::{ConfigError, RestoreError, StoreError};
