//! Serializable board snapshots.
//!
//! A snapshot is an ordered list of `(position, a_side, b_side, orientation)`
//! records, one per interior tile, plus the generation seed. It is the shape
//! an external persistence layer saves and hands back to resume a round.
//! Selection flags are deliberately absent: a restored board starts with
//! nothing selected.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{Position, RestoreError, TileContent, TILE_COUNT};

use super::state::BoardState;

/// Saved state of one tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub position: Position,
    pub a_side: u8,
    pub b_side: u8,
    /// Orientation: true while the A-side is up.
    pub shows_a: bool,
}

/// Saved state of a whole board, sorted row-major.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub seed: Option<u64>,
    pub tiles: Vec<TileRecord>,
}

impl BoardSnapshot {
    /// Look up the record for a position.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<&TileRecord> {
        self.tiles
            .binary_search_by_key(&pos, |t| t.position)
            .ok()
            .map(|i| &self.tiles[i])
    }

    /// Number of tile records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl BoardState {
    /// Capture the board's contents and orientations.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let tiles = self
            .iter()
            .map(|(position, cell)| TileRecord {
                position,
                a_side: cell.content.a_side,
                b_side: cell.content.b_side,
                shows_a: cell.shows_a,
            })
            .collect();

        BoardSnapshot {
            seed: self.seed(),
            tiles,
        }
    }

    /// Rebuild a board from a snapshot.
    ///
    /// Records may arrive in any order but must cover every interior
    /// position exactly once with valid faces.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> Result<Self, RestoreError> {
        if snapshot.len() != TILE_COUNT {
            return Err(RestoreError::TileCount {
                expected: TILE_COUNT,
                found: snapshot.len(),
            });
        }

        let mut records: [Option<&TileRecord>; TILE_COUNT] = [None; TILE_COUNT];
        for record in &snapshot.tiles {
            let position = record.position;
            let index = position
                .index()
                .ok_or(RestoreError::OutOfRange { position })?;
            if records[index].is_some() {
                return Err(RestoreError::Duplicate { position });
            }
            if !TileContent::new(record.a_side, record.b_side).has_valid_faces() {
                return Err(RestoreError::InvalidFace {
                    position,
                    a_side: record.a_side,
                    b_side: record.b_side,
                });
            }
            records[index] = Some(record);
        }

        // Count matched and no duplicates, so every slot is filled
        let mut board = BoardState::from_fn(|pos| {
            pos.index()
                .and_then(|i| records[i])
                .map(|r| TileContent::new(r.a_side, r.b_side))
                .unwrap_or_default()
        })
        .with_seed(snapshot.seed);

        for record in records.iter().flatten() {
            if let Some(cell) = board.cell_mut(record.position) {
                cell.shows_a = record.shows_a;
            }
        }

        debug!(seed = ?snapshot.seed, live_faces = board.live_faces(), "restored board");
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardGenerator;

    #[test]
    fn test_snapshot_shape() {
        let board = BoardGenerator::default().generate(Some(3));
        let snapshot = board.snapshot();

        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot.seed, Some(3));
        assert!(snapshot.tiles.windows(2).all(|w| w[0].position < w[1].position));

        let pos = Position::new(6, 2);
        let record = snapshot.get(pos).unwrap();
        assert_eq!(TileContent::new(record.a_side, record.b_side), board.tile(pos).unwrap());
        assert!(record.shows_a);
        assert!(snapshot.get(Position::new(-1, 0)).is_none());
    }

    #[test]
    fn test_restore_round_trip_keeps_orientation() {
        let mut board = BoardGenerator::default().generate(Some(11));
        board.eliminate_upward(Position::new(0, 0));
        board.set_selected(Position::new(1, 1), true);
        board.orient_unselected(false);

        let restored = BoardState::from_snapshot(&board.snapshot()).unwrap();

        assert_eq!(restored.tile(Position::new(0, 0)), board.tile(Position::new(0, 0)));
        assert_eq!(restored.shows_a_side(Position::new(1, 1)), Some(true));
        assert_eq!(restored.shows_a_side(Position::new(2, 2)), Some(false));
        // Selection is not part of a snapshot
        assert!(!restored.is_selected(Position::new(1, 1)));
    }

    #[test]
    fn test_restore_accepts_any_record_order() {
        let board = BoardGenerator::default().generate(Some(8));
        let mut snapshot = board.snapshot();
        snapshot.tiles.reverse();

        let restored = BoardState::from_snapshot(&snapshot).unwrap();
        assert_eq!(restored, board);
    }

    #[test]
    fn test_restore_rejects_wrong_count() {
        let mut snapshot = BoardGenerator::default().generate(Some(1)).snapshot();
        snapshot.tiles.pop();
        assert_eq!(
            BoardState::from_snapshot(&snapshot),
            Err(RestoreError::TileCount { expected: 100, found: 99 })
        );
    }

    #[test]
    fn test_restore_rejects_out_of_range() {
        let mut snapshot = BoardGenerator::default().generate(Some(1)).snapshot();
        snapshot.tiles[5].position = Position::new(10, 10);
        assert_eq!(
            BoardState::from_snapshot(&snapshot),
            Err(RestoreError::OutOfRange { position: Position::new(10, 10) })
        );
    }

    #[test]
    fn test_restore_rejects_duplicate() {
        let mut snapshot = BoardGenerator::default().generate(Some(1)).snapshot();
        snapshot.tiles[1].position = Position::new(0, 0);
        assert_eq!(
            BoardState::from_snapshot(&snapshot),
            Err(RestoreError::Duplicate { position: Position::new(0, 0) })
        );
    }

    #[test]
    fn test_restore_rejects_bad_faces() {
        let mut snapshot = BoardGenerator::default().generate(Some(1)).snapshot();
        snapshot.tiles[0].a_side = 5;
        assert!(matches!(
            BoardState::from_snapshot(&snapshot),
            Err(RestoreError::InvalidFace { a_side: 5, .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let snapshot = BoardGenerator::default().generate(Some(21)).snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
