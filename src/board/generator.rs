//! Board generation.
//!
//! Generation is a pure combinatorial construction:
//! 1. Build the fixed tile multiset from the configured face tables
//!    (every even face with each allowed odd partner, equal copies)
//! 2. Shuffle it with the seeded RNG
//! 3. Deal it onto the board in row-major order
//!
//! Counts are exact, not probabilistic. The shuffle is the only random step,
//! so a fixed seed reproduces the same layout.

use tracing::debug;

use crate::core::{ConfigError, GameConfig, GameRng, TileContent};

use super::state::BoardState;

/// Produces fresh, rule-compliant boards.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    config: GameConfig,
    /// Unshuffled multiset, built once.
    tiles: Vec<TileContent>,
}

impl Default for BoardGenerator {
    fn default() -> Self {
        let config = GameConfig::default();
        let tiles = config.tile_multiset();
        Self { config, tiles }
    }
}

impl BoardGenerator {
    /// Create a generator for a custom configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let tiles = config.tile_multiset();
        Ok(Self { config, tiles })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Generate a board.
    ///
    /// `seed` overrides the configured seed; with neither, a fresh entropy
    /// seed is drawn. The seed used is recorded on the returned board.
    #[must_use]
    pub fn generate(&self, seed: Option<u64>) -> BoardState {
        let mut rng = match seed.or(self.config.seed) {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let mut tiles = self.tiles.clone();
        rng.shuffle(&mut tiles);

        debug!(seed = rng.seed(), "generated board");

        let mut dealt = tiles.into_iter();
        BoardState::from_fn(|_| dealt.next().unwrap_or_default()).with_seed(Some(rng.seed()))
    }
}
