//! One round of play.
//!
//! `Round` is the surface an application drives. It owns the generator, the
//! selection engine (and through it the board), the match history and the
//! presentation observer.
//!
//! ## Lifecycle
//!
//! - [`Round::initialize`] / [`Round::new`]: generate the first board
//! - [`Round::reset`]: start over on a fresh board
//! - [`Round::dispose`]: end the round, returning its final snapshot
//!
//! All operations run to completion synchronously. Callers serialize
//! selection intents themselves, e.g. by funnelling input through one queue.
//!
//! ```
//! use rust_elevens::core::Position;
//! use rust_elevens::engine::{Round, SelectionResult};
//!
//! let mut round = Round::new(Some(42));
//! assert!(matches!(
//!     round.select(Position::new(0, 0)),
//!     SelectionResult::FirstSelected(_)
//! ));
//! assert_eq!(round.select(Position::new(12, 0)), SelectionResult::Ignored);
//! ```

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info};

use crate::board::{BoardGenerator, BoardSnapshot, BoardState};
use crate::core::{
    ConfigError, Face, GameConfig, Position, RestoreError, StoreError, ELIMINATED,
};
use crate::pathfinding::Path;

use super::observer::{NoopObserver, RoundObserver};
use super::selection::{SelectionEngine, SelectionResult, SelectionState};
use super::store::SnapshotStore;

/// A completed match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub first: Position,
    pub second: Position,
    pub path: Path,
}

/// One input in a hint sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintStep {
    Select(Position),
    Deselect(Position),
    /// `flip_all` to the given orientation (true shows A-sides).
    Flip(bool),
}

/// A playable pair found by [`Round::find_hint`].
///
/// Feeding `steps` to the round in order (see [`Round::follow_hint`]) ends
/// with `second` being selected while `first` is held, and the pair matches.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hint {
    pub first: Position,
    pub second: Position,
    pub steps: SmallVec<[HintStep; 5]>,
}

impl Hint {
    /// Check if the hint flips the board before the final selection.
    #[must_use]
    pub fn needs_flip(&self) -> bool {
        self.steps.iter().any(|step| matches!(step, HintStep::Flip(_)))
    }
}

/// A round of play on one board.
pub struct Round {
    generator: BoardGenerator,
    engine: SelectionEngine,
    /// Persistent vector so cloning history for hints/what-if is O(1).
    history: Vector<MatchRecord>,
    observer: Box<dyn RoundObserver>,
}

impl Round {
    /// Start a round with the default configuration.
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        Self::start(BoardGenerator::default(), seed)
    }

    /// Start a round with a custom configuration.
    pub fn initialize(config: GameConfig) -> Result<Self, ConfigError> {
        Ok(Self::start(BoardGenerator::new(config)?, None))
    }

    fn start(generator: BoardGenerator, seed: Option<u64>) -> Self {
        let board = generator.generate(seed);
        let engine = SelectionEngine::new(board, generator.config().target_sum);
        Self {
            generator,
            engine,
            history: Vector::new(),
            observer: Box::new(NoopObserver),
        }
    }

    /// Attach a presentation observer.
    #[must_use]
    pub fn with_observer(mut self, observer: impl RoundObserver + 'static) -> Self {
        self.observer = Box::new(observer);
        self
    }

    /// Start over on a freshly generated board.
    pub fn reset(&mut self, seed: Option<u64>) {
        let board = self.generator.generate(seed);
        info!(seed = ?board.seed(), "round reset");
        self.install(board);
    }

    /// End the round, returning its final state.
    #[must_use]
    pub fn dispose(self) -> BoardSnapshot {
        debug!(matches = self.history.len(), "round disposed");
        self.engine.board().snapshot()
    }

    fn install(&mut self, board: BoardState) {
        self.engine.replace_board(board);
        self.history.clear();
        self.observer.on_new_board(self.engine.board());
    }

    // === Queries ===

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        self.engine.board()
    }

    /// Get the selection state.
    #[must_use]
    pub fn selection(&self) -> SelectionState {
        self.engine.state()
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        self.generator.config()
    }

    /// Seed the current board was generated from.
    #[must_use]
    pub fn seed(&self) -> Option<u64> {
        self.engine.board().seed()
    }

    /// Value showing at `pos` (0 if eliminated or out of range).
    #[must_use]
    pub fn upward_value(&self, pos: Position) -> u8 {
        self.engine.upward_value(pos)
    }

    /// True once every face of every tile is eliminated.
    #[must_use]
    pub fn is_round_complete(&self) -> bool {
        self.engine.is_round_complete()
    }

    /// Matches made this round, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MatchRecord> {
        &self.history
    }

    #[must_use]
    pub fn matches_made(&self) -> usize {
        self.history.len()
    }

    // === Play ===

    /// Process a selection intent.
    pub fn select(&mut self, pos: Position) -> SelectionResult {
        let result = self.engine.select(pos);

        match &result {
            SelectionResult::Ignored => {}
            SelectionResult::FirstSelected(pos) => self.observer.on_first_selected(*pos),
            SelectionResult::Deselected(pos) => self.observer.on_deselected(*pos),
            SelectionResult::MatchSuccess { first, second, path } => {
                let record = MatchRecord {
                    first: *first,
                    second: *second,
                    path: path.clone(),
                };
                self.observer.on_match(&record);
                self.history.push_back(record);

                if self.engine.is_round_complete() {
                    info!(matches = self.history.len(), "round complete");
                    self.observer.on_round_complete();
                }
            }
            SelectionResult::MatchFailed { first, second, reason } => {
                self.observer.on_mismatch(*first, *second, *reason);
            }
        }

        result
    }

    /// Release the remembered selection.
    pub fn deselect(&mut self, pos: Position) -> bool {
        let released = self.engine.deselect(pos);
        if released {
            self.observer.on_deselected(pos);
        }
        released
    }

    /// Turn every unselected tile to the requested face.
    pub fn flip_all(&mut self, show_a_side: bool) -> FxHashSet<Position> {
        let flipped = self.engine.flip_all(show_a_side);
        if !flipped.is_empty() {
            self.observer.on_flip(&flipped);
        }
        flipped
    }

    /// Find a pair that can be matched from the current position.
    ///
    /// Every orientation one move can reach is considered: the board as it
    /// stands, a live tile held at its current face while the rest flip to
    /// either side, and a live tile turned to its other face by a flip before
    /// it is held. Cheaper sequences come first; candidates are scanned
    /// row-major. A held selection is released first unless it starts the
    /// pair.
    #[must_use]
    pub fn find_hint(&self) -> Option<Hint> {
        let mut board = self.engine.board().clone();
        board.clear_selection();

        let mut hint = self
            .direct_hint(&board)
            .or_else(|| self.held_flip_hint(&board))
            .or_else(|| self.pre_flip_hint(&board))?;

        if let Some(held) = self.engine.state().selected() {
            if hint.steps.first() == Some(&HintStep::Select(held)) {
                hint.steps.remove(0);
            } else {
                hint.steps.insert(0, HintStep::Deselect(held));
            }
        }
        Some(hint)
    }

    fn direct_hint(&self, board: &BoardState) -> Option<Hint> {
        board.live_positions().find_map(|first| {
            self.partner(board, first).map(|second| Hint {
                first,
                second,
                steps: smallvec![HintStep::Select(first), HintStep::Select(second)],
            })
        })
    }

    /// Hold `first` at its current face, then flip everything else.
    fn held_flip_hint(&self, board: &BoardState) -> Option<Hint> {
        for show_a_side in [true, false] {
            for first in board.live_positions() {
                let mut flipped = board.clone();
                flipped.set_selected(first, true);
                if flipped.orient_unselected(show_a_side).is_empty() {
                    continue;
                }
                if let Some(second) = self.partner(&flipped, first) {
                    return Some(Hint {
                        first,
                        second,
                        steps: smallvec![
                            HintStep::Select(first),
                            HintStep::Flip(show_a_side),
                            HintStep::Select(second),
                        ],
                    });
                }
            }
        }
        None
    }

    /// Flip `first` to its other face, hold it, then set the rest.
    fn pre_flip_hint(&self, board: &BoardState) -> Option<Hint> {
        for show_a_side in [true, false] {
            for (first, cell) in board.iter() {
                let face = cell.face().opposite();
                if cell.content.value(face) == ELIMINATED {
                    continue;
                }
                let hold_a_side = face == Face::A;

                let mut flipped = board.clone();
                flipped.orient_unselected(hold_a_side);
                flipped.set_selected(first, true);
                flipped.orient_unselected(show_a_side);

                if let Some(second) = self.partner(&flipped, first) {
                    let mut steps: SmallVec<[HintStep; 5]> =
                        smallvec![HintStep::Flip(hold_a_side), HintStep::Select(first)];
                    if show_a_side != hold_a_side {
                        steps.push(HintStep::Flip(show_a_side));
                    }
                    steps.push(HintStep::Select(second));
                    return Some(Hint { first, second, steps });
                }
            }
        }
        None
    }

    /// First live tile, row-major, that matches `first` on `board`.
    fn partner(&self, board: &BoardState, first: Position) -> Option<Position> {
        let evaluator = self.engine.evaluator();
        board
            .live_positions()
            .filter(|&second| second != first)
            .find(|&second| evaluator.evaluate(board, first, second).is_success())
    }

    /// Check if any pair can still be matched.
    #[must_use]
    pub fn has_moves(&self) -> bool {
        self.find_hint().is_some()
    }

    /// Play a hint's steps, returning the result of the final selection.
    pub fn follow_hint(&mut self, hint: &Hint) -> SelectionResult {
        let mut result = SelectionResult::Ignored;
        for step in &hint.steps {
            match *step {
                HintStep::Select(pos) => result = self.select(pos),
                HintStep::Deselect(pos) => {
                    self.deselect(pos);
                }
                HintStep::Flip(show_a_side) => {
                    self.flip_all(show_a_side);
                }
            }
        }
        result
    }

    // === Persistence ===

    /// Capture the board for an external save.
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.engine.board().snapshot()
    }

    /// Resume from a snapshot. Selection and history start empty.
    ///
    /// On error the current board is left untouched.
    pub fn restore(&mut self, snapshot: &BoardSnapshot) -> Result<(), RestoreError> {
        let board = BoardState::from_snapshot(snapshot)?;
        self.install(board);
        Ok(())
    }

    /// Save the current board through a store.
    pub fn save_to<S: SnapshotStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        store.save(&self.snapshot())
    }

    /// Restore from a store. Returns false if the store was empty.
    pub fn load_from<S: SnapshotStore + ?Sized>(&mut self, store: &S) -> Result<bool, StoreError> {
        let Some(snapshot) = store.load()? else {
            return Ok(false);
        };
        self.restore(&snapshot)?;
        Ok(true)
    }
}

impl std::fmt::Debug for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Round")
            .field("seed", &self.seed())
            .field("selection", &self.selection())
            .field("matches", &self.history.len())
            .field("live_faces", &self.board().live_faces())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TileContent;

    fn p(row: i8, col: i8) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn test_new_round() {
        let round = Round::new(Some(42));
        assert_eq!(round.seed(), Some(42));
        assert_eq!(round.selection(), SelectionState::Idle);
        assert_eq!(round.matches_made(), 0);
        assert!(!round.is_round_complete());
        assert_eq!(round.config().target_sum, 11);
    }

    #[test]
    fn test_initialize_validates_config() {
        let err = Round::initialize(GameConfig::default().with_copies_per_partner(2)).unwrap_err();
        assert!(matches!(err, ConfigError::TileCount { found: 40, .. }));

        let round = Round::initialize(GameConfig::default().with_seed(9)).unwrap();
        assert_eq!(round.seed(), Some(9));
    }

    #[test]
    fn test_reset_clears_state() {
        let mut round = Round::new(Some(1));
        round.select(p(0, 0));
        round.reset(Some(2));

        assert_eq!(round.seed(), Some(2));
        assert_eq!(round.selection(), SelectionState::Idle);
        assert_eq!(round.board(), &BoardGenerator::default().generate(Some(2)));
    }

    #[test]
    fn test_match_recorded_in_history() {
        let mut round = Round::new(Some(1));
        let board = BoardState::from_layout(|pos| (TileContent::new(2, 9), pos != p(0, 1)));
        round.restore(&board.snapshot()).unwrap();

        round.select(p(0, 0));
        round.select(p(0, 1));

        assert_eq!(round.matches_made(), 1);
        let record = &round.history()[0];
        assert_eq!(record.first, p(0, 0));
        assert_eq!(record.second, p(0, 1));
        assert_eq!(record.path.as_slice(), &[p(0, 0), p(0, 1)]);
    }

    #[test]
    fn test_hint_direct_pair() {
        let mut round = Round::new(Some(1));
        let board = BoardState::from_layout(|pos| (TileContent::new(2, 9), pos != p(3, 4)));
        round.restore(&board.snapshot()).unwrap();

        let hint = round.find_hint().unwrap();
        assert_eq!(hint.first, p(2, 4));
        assert_eq!(hint.second, p(3, 4));
        assert_eq!(
            hint.steps.as_slice(),
            &[HintStep::Select(p(2, 4)), HintStep::Select(p(3, 4))]
        );
        assert!(!hint.needs_flip());
    }

    #[test]
    fn test_hint_needs_flip() {
        // Everything shows 2; holding one tile and flipping exposes 9s
        let mut round = Round::new(Some(1));
        let board = BoardState::from_fn(|_| TileContent::new(2, 9));
        round.restore(&board.snapshot()).unwrap();

        let hint = round.find_hint().unwrap();
        assert_eq!(
            hint.steps.as_slice(),
            &[
                HintStep::Select(p(0, 0)),
                HintStep::Flip(false),
                HintStep::Select(p(0, 1)),
            ]
        );

        let result = round.follow_hint(&hint);
        assert!(matches!(result, SelectionResult::MatchSuccess { .. }));
    }

    #[test]
    fn test_hint_flips_before_holding() {
        // The 9 only shows after a flip to B, and the route to the 2 only
        // opens once the spent A-sides are back up
        let mut round = Round::new(Some(1));
        let board = BoardState::from_fn(|pos| {
            if pos == p(0, 0) {
                TileContent::new(2, 1)
            } else if pos == p(5, 5) {
                TileContent::new(4, 9)
            } else {
                TileContent::new(0, 3)
            }
        });
        round.restore(&board.snapshot()).unwrap();

        assert!(round.has_moves());
        let hint = round.find_hint().unwrap();
        assert_eq!(hint.first, p(5, 5));
        assert_eq!(hint.second, p(0, 0));
        assert_eq!(
            hint.steps.as_slice(),
            &[
                HintStep::Flip(false),
                HintStep::Select(p(5, 5)),
                HintStep::Flip(true),
                HintStep::Select(p(0, 0)),
            ]
        );

        match round.follow_hint(&hint) {
            SelectionResult::MatchSuccess { first, second, path } => {
                assert_eq!(first, p(5, 5));
                assert_eq!(second, p(0, 0));
                assert_eq!(path.len(), 11);
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn test_no_moves() {
        let mut round = Round::new(Some(1));
        let board = BoardState::from_fn(|_| TileContent::new(2, 3));
        round.restore(&board.snapshot()).unwrap();
        assert_eq!(round.find_hint(), None);
        assert!(!round.has_moves());
    }

    #[test]
    fn test_fresh_board_needs_a_flip() {
        // A-sides are all even, so nothing matches before flipping
        let mut round = Round::new(Some(42));
        let hint = round.find_hint().unwrap();
        assert!(hint.needs_flip());
        assert!(matches!(round.follow_hint(&hint), SelectionResult::MatchSuccess { .. }));
    }

    #[test]
    fn test_dispose_returns_snapshot() {
        let round = Round::new(Some(4));
        let expected = round.snapshot();
        assert_eq!(round.dispose(), expected);
    }

    #[test]
    fn test_debug_output() {
        let round = Round::new(Some(4));
        let text = format!("{round:?}");
        assert!(text.contains("seed: Some(4)"));
    }
}
