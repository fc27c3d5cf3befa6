//! Board coordinates.
//!
//! ## Layout
//!
//! The playable board is a 10×10 grid addressed as `(row, col)` with both
//! coordinates in `0..=9`. Path routing additionally uses a virtual border
//! ring at row/col `-1` and `10`, so coordinates are signed.
//!
//! ```
//! use rust_elevens::core::Position;
//!
//! let corner = Position::new(0, 0);
//! assert!(corner.is_interior());
//! assert_eq!(corner.index(), Some(0));
//!
//! let ring = Position::new(-1, 4);
//! assert!(ring.is_border());
//! assert_eq!(ring.index(), None);
//! ```

use serde::{Deserialize, Serialize};

/// Width and height of the playable board.
pub const BOARD_SIZE: i8 = 10;

/// Number of interior tiles.
pub const TILE_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// A `(row, col)` coordinate on the board or its border ring.
///
/// Ordering is row-major, so sorted positions follow the board's
/// natural reading order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this position addresses a playable tile.
    #[must_use]
    pub const fn is_interior(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Check if this position lies inside the routing grid (interior plus ring).
    #[must_use]
    pub const fn in_routing_grid(self) -> bool {
        self.row >= -1 && self.row <= BOARD_SIZE && self.col >= -1 && self.col <= BOARD_SIZE
    }

    /// Check if this position is on the virtual border ring.
    #[must_use]
    pub const fn is_border(self) -> bool {
        self.in_routing_grid() && !self.is_interior()
    }

    /// Flat row-major index of an interior position.
    ///
    /// Returns `None` for anything outside the playable board.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        if self.is_interior() {
            Some(self.row as usize * BOARD_SIZE as usize + self.col as usize)
        } else {
            None
        }
    }

    /// Inverse of [`Position::index`].
    ///
    /// Panics if `index >= TILE_COUNT`.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        assert!(index < TILE_COUNT, "tile index out of range");
        Self {
            row: (index / BOARD_SIZE as usize) as i8,
            col: (index % BOARD_SIZE as usize) as i8,
        }
    }

    /// The four orthogonal neighbors: up, down, left, right.
    #[must_use]
    pub const fn neighbors(self) -> [Position; 4] {
        [
            Position::new(self.row - 1, self.col),
            Position::new(self.row + 1, self.col),
            Position::new(self.row, self.col - 1),
            Position::new(self.row, self.col + 1),
        ]
    }

    /// Check if `other` is one orthogonal step away.
    #[must_use]
    pub fn is_adjacent(self, other: Position) -> bool {
        let dr = (i16::from(self.row) - i16::from(other.row)).abs();
        let dc = (i16::from(self.col) - i16::from(other.col)).abs();
        dr + dc == 1
    }

    /// Iterate over every interior position in row-major order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..TILE_COUNT).map(Position::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interior_bounds() {
        assert!(Position::new(0, 0).is_interior());
        assert!(Position::new(9, 9).is_interior());
        assert!(!Position::new(-1, 0).is_interior());
        assert!(!Position::new(0, 10).is_interior());
        assert!(!Position::new(42, -7).is_interior());
    }

    #[test]
    fn test_border_ring() {
        assert!(Position::new(-1, -1).is_border());
        assert!(Position::new(10, 5).is_border());
        assert!(Position::new(3, 10).is_border());
        assert!(!Position::new(3, 3).is_border());
        // Beyond the ring is outside the routing grid entirely
        assert!(!Position::new(11, 3).is_border());
        assert!(!Position::new(-2, 0).in_routing_grid());
    }

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::all().enumerate() {
            assert_eq!(pos.index(), Some(i));
            assert_eq!(Position::from_index(i), pos);
        }
        assert_eq!(Position::new(3, 7).index(), Some(37));
        assert_eq!(Position::new(10, 0).index(), None);
    }

    #[test]
    fn test_row_major_ordering() {
        let mut positions = vec![Position::new(1, 0), Position::new(0, 9), Position::new(0, 1)];
        positions.sort();
        assert_eq!(
            positions,
            vec![Position::new(0, 1), Position::new(0, 9), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_neighbors_and_adjacency() {
        let pos = Position::new(4, 4);
        let neighbors = pos.neighbors();
        assert_eq!(neighbors[0], Position::new(3, 4));
        assert_eq!(neighbors[1], Position::new(5, 4));
        assert_eq!(neighbors[2], Position::new(4, 3));
        assert_eq!(neighbors[3], Position::new(4, 5));

        assert!(neighbors.iter().all(|&n| pos.is_adjacent(n)));
        assert!(!pos.is_adjacent(Position::new(5, 5)));
        assert!(!pos.is_adjacent(pos));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(2, 8)), "(2, 8)");
    }

    #[test]
    fn test_serialization() {
        let pos = Position::new(7, 1);
        let json = serde_json::to_string(&pos).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(pos, deserialized);
    }
}
