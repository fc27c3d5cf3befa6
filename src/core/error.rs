//! Error types for operations that consume data from outside the core.
//!
//! Gameplay operations never fail: out-of-range or eliminated selections are
//! reported through their return values. Only configuration, snapshot restore
//! and persistence can produce errors.

use thiserror::Error;

use super::position::Position;

/// Invalid face tables in a [`GameConfig`](super::GameConfig).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{side}-side face table is empty")]
    EmptyFaces { side: char },

    #[error("A-side value {value} must be a non-zero even number")]
    InvalidEvenFace { value: u8 },

    #[error("B-side value {value} must be an odd number")]
    InvalidOddFace { value: u8 },

    #[error("face value {value} appears more than once")]
    DuplicateFace { value: u8 },

    #[error("copies per partner must be at least 1")]
    ZeroCopies,

    #[error("face tables produce {found} tiles, the board needs {expected}")]
    TileCount { expected: usize, found: usize },
}

/// A snapshot that cannot be turned back into a board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RestoreError {
    #[error("snapshot has {found} tiles, the board needs {expected}")]
    TileCount { expected: usize, found: usize },

    #[error("snapshot position {position} is outside the board")]
    OutOfRange { position: Position },

    #[error("snapshot lists position {position} twice")]
    Duplicate { position: Position },

    #[error("tile at {position} has invalid faces {a_side}/{b_side}")]
    InvalidFace {
        position: Position,
        a_side: u8,
        b_side: u8,
    },
}

/// Failure inside a [`SnapshotStore`](crate::engine::SnapshotStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snapshot encoding failed: {0}")]
    Codec(#[from] bincode::Error),

    #[error(transparent)]
    Restore(#[from] RestoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::TileCount { expected: 100, found: 80 };
        assert_eq!(err.to_string(), "face tables produce 80 tiles, the board needs 100");

        let err = ConfigError::EmptyFaces { side: 'B' };
        assert_eq!(err.to_string(), "B-side face table is empty");
    }

    #[test]
    fn test_restore_error_messages() {
        let err = RestoreError::InvalidFace {
            position: Position::new(1, 2),
            a_side: 3,
            b_side: 4,
        };
        assert_eq!(err.to_string(), "tile at (1, 2) has invalid faces 3/4");
    }

    #[test]
    fn test_store_error_wraps_restore() {
        let err: StoreError = RestoreError::Duplicate { position: Position::new(0, 0) }.into();
        assert!(matches!(err, StoreError::Restore(_)));
        assert_eq!(err.to_string(), "snapshot lists position (0, 0) twice");
    }
}
