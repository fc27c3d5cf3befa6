//! Mutable board state.
//!
//! ## BoardState
//!
//! Exclusive owner of every interior tile's:
//! - Content (`a_side`, `b_side`)
//! - Orientation (which face is up)
//! - Selection flag
//!
//! Cells are stored in a flat row-major array; position-based accessors sit
//! on top. Out-of-range positions are never an error: reads return
//! sentinels (`0`, `None`, `false`) and writes are ignored.

use rustc_hash::FxHashSet;

use crate::core::{Face, Position, TileContent, ELIMINATED, TILE_COUNT};

/// One board cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Face values.
    pub content: TileContent,
    /// Orientation: true while the A-side is up.
    pub shows_a: bool,
    /// Selected tiles keep their orientation through flips.
    pub selected: bool,
}

impl Cell {
    /// A fresh, unselected, A-side-up cell.
    #[must_use]
    pub const fn new(content: TileContent) -> Self {
        Self {
            content,
            shows_a: true,
            selected: false,
        }
    }

    /// Face currently showing.
    #[must_use]
    pub const fn face(&self) -> Face {
        Face::from_shows_a(self.shows_a)
    }

    /// Value on the face currently showing.
    #[must_use]
    pub const fn upward_value(&self) -> u8 {
        self.content.value(self.face())
    }
}

/// The 10×10 grid of tiles for one round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardState {
    cells: [Cell; TILE_COUNT],
    /// Seed the layout was shuffled with, if it came from the generator.
    seed: Option<u64>,
}

impl BoardState {
    /// Build a board by asking `content` for each position in row-major order.
    ///
    /// All tiles start A-side up and unselected.
    pub fn from_fn(mut content: impl FnMut(Position) -> TileContent) -> Self {
        Self::from_layout(|pos| (content(pos), true))
    }

    /// Build a board from `(content, shows_a)` per position, row-major.
    pub fn from_layout(mut layout: impl FnMut(Position) -> (TileContent, bool)) -> Self {
        let cells = std::array::from_fn(|i| {
            let (content, shows_a) = layout(Position::from_index(i));
            Cell {
                shows_a,
                ..Cell::new(content)
            }
        });
        Self { cells, seed: None }
    }

    /// Attach the generation seed.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Seed this layout was generated from.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    // === Queries ===

    /// Get a cell.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        pos.index().map(|i| &self.cells[i])
    }

    pub(crate) fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        match pos.index() {
            Some(i) => Some(&mut self.cells[i]),
            None => None,
        }
    }

    /// Get a tile's face values.
    #[must_use]
    pub fn tile(&self, pos: Position) -> Option<TileContent> {
        self.cell(pos).map(|c| c.content)
    }

    /// Value currently showing at `pos`, or `0` if eliminated or out of range.
    #[must_use]
    pub fn upward_value(&self, pos: Position) -> u8 {
        self.cell(pos).map_or(ELIMINATED, Cell::upward_value)
    }

    /// Check if the face showing at `pos` is eliminated.
    ///
    /// Only meaningful for interior positions; the path finder treats the
    /// showing-face-eliminated tiles as open floor.
    #[must_use]
    pub fn is_eliminated(&self, pos: Position) -> bool {
        self.upward_value(pos) == ELIMINATED
    }

    /// Orientation of the tile at `pos`.
    #[must_use]
    pub fn shows_a_side(&self, pos: Position) -> Option<bool> {
        self.cell(pos).map(|c| c.shows_a)
    }

    /// Check if the tile at `pos` carries the selection flag.
    #[must_use]
    pub fn is_selected(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(|c| c.selected)
    }

    /// True once every face of every tile has been eliminated.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.cells.iter().all(|c| c.content.is_cleared())
    }

    /// Number of faces still in play across the board.
    #[must_use]
    pub fn live_faces(&self) -> usize {
        self.cells.iter().map(|c| c.content.live_faces()).sum()
    }

    /// Interior positions whose showing face is still live, row-major.
    pub fn live_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::all().filter(|&pos| !self.is_eliminated(pos))
    }

    /// Iterate `(position, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, cell)| (Position::from_index(i), cell))
    }

    // === Mutation ===

    /// Set or clear the selection flag. Returns false for out-of-range positions.
    pub(crate) fn set_selected(&mut self, pos: Position, selected: bool) -> bool {
        match self.cell_mut(pos) {
            Some(cell) => {
                cell.selected = selected;
                true
            }
            None => false,
        }
    }

    /// Eliminate the face currently showing at `pos`, returning its old value.
    pub(crate) fn eliminate_upward(&mut self, pos: Position) -> u8 {
        match self.cell_mut(pos) {
            Some(cell) => {
                let face = cell.face();
                cell.content.eliminate(face)
            }
            None => ELIMINATED,
        }
    }

    /// Turn every unselected tile to `shows_a`.
    ///
    /// Returns the positions whose orientation actually changed.
    pub(crate) fn orient_unselected(&mut self, shows_a: bool) -> FxHashSet<Position> {
        let mut flipped = FxHashSet::default();
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if cell.selected || cell.shows_a == shows_a {
                continue;
            }
            cell.shows_a = shows_a;
            flipped.insert(Position::from_index(i));
        }
        flipped
    }

    /// Clear every selection flag.
    pub(crate) fn clear_selection(&mut self) {
        for cell in &mut self.cells {
            cell.selected = false;
        }
    }
}
