//! Breadth-first connectivity search over the bordered grid.
//!
//! ## Grid
//!
//! The search runs on an implicit 12×12 grid covering rows and columns
//! `-1..=10`. The outer ring is always open, which models routing around
//! the outside of the board. Interior cells are open only when the caller's
//! predicate says so. The two endpoints are always enterable regardless of
//! their own passability.
//!
//! ## Usage
//!
//! ```
//! use rust_elevens::core::Position;
//! use rust_elevens::pathfinding::{Connectivity, PathFinder};
//!
//! let finder = PathFinder::new();
//! let blocked = |_: Position| false;
//!
//! // Neighbors connect directly
//! assert!(finder.has_path(Position::new(4, 4), Position::new(4, 5), blocked));
//!
//! // Edge tiles route through the border ring
//! let path = finder
//!     .find_path(Position::new(0, 0), Position::new(0, 9), blocked)
//!     .unwrap();
//! assert_eq!(path.first(), Some(&Position::new(0, 0)));
//! assert_eq!(path.last(), Some(&Position::new(0, 9)));
//! ```

use std::collections::VecDeque;

use smallvec::SmallVec;
use tracing::trace;

use crate::core::{Position, BOARD_SIZE};

/// Side length of the routing grid (board plus ring).
const GRID_SIZE: usize = BOARD_SIZE as usize + 2;

/// Cells in the routing grid.
const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

const NO_PARENT: u8 = u8::MAX;

/// A route from start to end, both endpoints included.
///
/// Inline capacity covers most in-board routes without allocating.
pub type Path = SmallVec<[Position; 16]>;

/// A connectivity oracle.
///
/// `PathFinder` is the production implementation; the trait is the seam
/// match evaluation is written against.
pub trait Connectivity {
    /// Find a route from `start` to `end`.
    ///
    /// Returns `None` if no route exists, if `start == end`, or if either
    /// endpoint lies outside the routing grid.
    fn find_path<F>(&self, start: Position, end: Position, passable: F) -> Option<Path>
    where
        F: Fn(Position) -> bool;

    /// Check if any route exists.
    fn has_path<F>(&self, start: Position, end: Position, passable: F) -> bool
    where
        F: Fn(Position) -> bool,
    {
        self.find_path(start, end, passable).is_some()
    }
}

/// Stateless BFS path finder.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathFinder;

impl PathFinder {
    /// Create a path finder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Grid index of a position, if it lies on the routing grid.
fn grid_index(pos: Position) -> Option<usize> {
    if pos.in_routing_grid() {
        Some((pos.row + 1) as usize * GRID_SIZE + (pos.col + 1) as usize)
    } else {
        None
    }
}

fn grid_position(index: usize) -> Position {
    Position::new(
        (index / GRID_SIZE) as i8 - 1,
        (index % GRID_SIZE) as i8 - 1,
    )
}

/// Walk parent links back from `end` and return the route start-first.
fn reconstruct(parents: &[u8; GRID_CELLS], start: usize, end: usize) -> Path {
    let mut path = Path::new();
    let mut current = end;
    path.push(grid_position(current));
    while current != start {
        current = parents[current] as usize;
        path.push(grid_position(current));
    }
    path.reverse();
    path
}

impl Connectivity for PathFinder {
    fn find_path<F>(&self, start: Position, end: Position, passable: F) -> Option<Path>
    where
        F: Fn(Position) -> bool,
    {
        if start == end {
            return None;
        }
        let start_index = grid_index(start)?;
        let end_index = grid_index(end)?;

        let mut visited = [false; GRID_CELLS];
        let mut parents = [NO_PARENT; GRID_CELLS];
        let mut queue = VecDeque::with_capacity(GRID_CELLS);

        visited[start_index] = true;
        queue.push_back(start_index);

        while let Some(current) = queue.pop_front() {
            for next in grid_position(current).neighbors() {
                let Some(next_index) = grid_index(next) else {
                    continue;
                };
                if visited[next_index] {
                    continue;
                }
                if next_index == end_index {
                    parents[next_index] = current as u8;
                    let path = reconstruct(&parents, start_index, end_index);
                    trace!(%start, %end, steps = path.len() - 1, "path found");
                    return Some(path);
                }
                if !(next.is_border() || passable(next)) {
                    continue;
                }
                visited[next_index] = true;
                parents[next_index] = current as u8;
                queue.push_back(next_index);
            }
        }

        trace!(%start, %end, "no path");
        None
    }
}
