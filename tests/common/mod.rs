//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use rust_elevens::{BoardState, Position, TileContent};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Initialize tracing output for tests.
///
/// Idempotent. Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Shorthand for `Position::new`.
pub fn p(row: i8, col: i8) -> Position {
    Position::new(row, col)
}

/// Board where every tile is an occupied 4/3 showing its A-side.
pub fn occupied_board() -> BoardState {
    BoardState::from_fn(|_| TileContent::new(4, 3))
}

/// Occupied board with `open` cells eliminated and the given upward values
/// placed at the listed positions.
///
/// Even values sit on the A-side, odd values on the B-side with the tile
/// turned over.
pub fn board_with(open: &[Position], tiles: &[(Position, u8)]) -> BoardState {
    BoardState::from_layout(|pos| {
        if open.contains(&pos) {
            return (TileContent::new(0, 0), true);
        }
        match tiles.iter().find(|(at, _)| *at == pos) {
            Some(&(_, value)) if value % 2 == 0 => (TileContent::new(value, 1), true),
            Some(&(_, value)) => (TileContent::new(2, value), false),
            None => (TileContent::new(4, 3), true),
        }
    })
}
