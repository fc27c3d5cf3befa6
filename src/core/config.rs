//! Game configuration.
//!
//! `GameConfig` describes the face tables a board is generated from and the
//! target sum used for matching. The defaults reproduce the standard puzzle:
//! A-sides `{2,4,6,8,10}`, B-sides `{1,3,5,7,9}`, target 11, and five copies
//! of every allowed (A, B) combination.
//!
//! A single tile never carries two faces that sum to the target. Each even
//! face therefore has every odd face except one as an allowed partner.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::ConfigError;
use super::position::TILE_COUNT;
use super::tile::{TileContent, EVEN_FACES, ODD_FACES};

/// Board generation and matching parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seed for board shuffles.
    /// `None` draws a fresh seed from entropy for every board.
    pub seed: Option<u64>,

    /// Sum two upward values must reach to match.
    /// Also the sum a single tile's faces must avoid.
    pub target_sum: u8,

    /// Occurrences of each allowed (A, B) combination.
    pub copies_per_partner: usize,

    /// A-side face values (even).
    pub even_faces: Vec<u8>,

    /// B-side face values (odd).
    pub odd_faces: Vec<u8>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            target_sum: 11,
            copies_per_partner: 5,
            even_faces: EVEN_FACES.to_vec(),
            odd_faces: ODD_FACES.to_vec(),
        }
    }
}

impl GameConfig {
    /// Set a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the target sum.
    #[must_use]
    pub fn with_target_sum(mut self, target_sum: u8) -> Self {
        self.target_sum = target_sum;
        self
    }

    /// Set how often each allowed combination appears.
    #[must_use]
    pub fn with_copies_per_partner(mut self, copies: usize) -> Self {
        self.copies_per_partner = copies;
        self
    }

    /// Replace both face tables.
    #[must_use]
    pub fn with_faces(mut self, even_faces: Vec<u8>, odd_faces: Vec<u8>) -> Self {
        self.even_faces = even_faces;
        self.odd_faces = odd_faces;
        self
    }

    /// B-side values allowed on the same tile as `even`.
    #[must_use]
    pub fn allowed_partners(&self, even: u8) -> SmallVec<[u8; 8]> {
        self.odd_faces
            .iter()
            .copied()
            .filter(|&odd| u16::from(even) + u16::from(odd) != u16::from(self.target_sum))
            .collect()
    }

    /// Number of tiles these tables produce.
    #[must_use]
    pub fn tile_total(&self) -> usize {
        self.even_faces
            .iter()
            .map(|&even| self.allowed_partners(even).len() * self.copies_per_partner)
            .sum()
    }

    /// Check the tables can fill exactly one board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.even_faces.is_empty() {
            return Err(ConfigError::EmptyFaces { side: 'A' });
        }
        if self.odd_faces.is_empty() {
            return Err(ConfigError::EmptyFaces { side: 'B' });
        }
        if let Some(&value) = self.even_faces.iter().find(|&&v| v == 0 || v % 2 != 0) {
            return Err(ConfigError::InvalidEvenFace { value });
        }
        if let Some(&value) = self.odd_faces.iter().find(|&&v| v % 2 != 1) {
            return Err(ConfigError::InvalidOddFace { value });
        }
        for faces in [&self.even_faces, &self.odd_faces] {
            for (i, value) in faces.iter().enumerate() {
                if faces[..i].contains(value) {
                    return Err(ConfigError::DuplicateFace { value: *value });
                }
            }
        }
        if self.copies_per_partner == 0 {
            return Err(ConfigError::ZeroCopies);
        }

        let found = self.tile_total();
        if found != TILE_COUNT {
            return Err(ConfigError::TileCount {
                expected: TILE_COUNT,
                found,
            });
        }
        Ok(())
    }

    /// The full tile multiset in a fixed, unshuffled order.
    #[must_use]
    pub fn tile_multiset(&self) -> Vec<TileContent> {
        let mut tiles = Vec::with_capacity(self.tile_total());
        for &even in &self.even_faces {
            for odd in self.allowed_partners(even) {
                for _ in 0..self.copies_per_partner {
                    tiles.push(TileContent::new(even, odd));
                }
            }
        }
        tiles
    }
}
