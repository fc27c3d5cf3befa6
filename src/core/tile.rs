//! Double-sided tile contents.
//!
//! Every tile carries an even A-side and an odd B-side. A face value of `0`
//! means that face has been eliminated; elimination is permanent for the
//! rest of the round.

use serde::{Deserialize, Serialize};

/// Default A-side values.
pub const EVEN_FACES: [u8; 5] = [2, 4, 6, 8, 10];

/// Default B-side values.
pub const ODD_FACES: [u8; 5] = [1, 3, 5, 7, 9];

/// Value of an eliminated face.
pub const ELIMINATED: u8 = 0;

/// Which face of a tile is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Even side.
    A,
    /// Odd side.
    B,
}

impl Face {
    /// Map an orientation flag ("shows A-side") to a face.
    #[must_use]
    pub const fn from_shows_a(shows_a: bool) -> Self {
        if shows_a {
            Face::A
        } else {
            Face::B
        }
    }

    /// The other face.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Face::A => Face::B,
            Face::B => Face::A,
        }
    }
}

/// The `(a_side, b_side)` pair bound to one board position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileContent {
    pub a_side: u8,
    pub b_side: u8,
}

impl TileContent {
    /// Create a tile from its two face values.
    #[must_use]
    pub const fn new(a_side: u8, b_side: u8) -> Self {
        Self { a_side, b_side }
    }

    /// Value printed on the given face (0 once eliminated).
    #[must_use]
    pub const fn value(self, face: Face) -> u8 {
        match face {
            Face::A => self.a_side,
            Face::B => self.b_side,
        }
    }

    /// Eliminate one face, returning the value it held.
    pub fn eliminate(&mut self, face: Face) -> u8 {
        let slot = match face {
            Face::A => &mut self.a_side,
            Face::B => &mut self.b_side,
        };
        std::mem::replace(slot, ELIMINATED)
    }

    /// Check if both faces are gone.
    #[must_use]
    pub const fn is_cleared(self) -> bool {
        self.a_side == ELIMINATED && self.b_side == ELIMINATED
    }

    /// Number of faces still in play (0-2).
    #[must_use]
    pub const fn live_faces(self) -> usize {
        (self.a_side != ELIMINATED) as usize + (self.b_side != ELIMINATED) as usize
    }

    /// Check the face parity rules: A-side even, B-side odd, either may be 0.
    #[must_use]
    pub const fn has_valid_faces(self) -> bool {
        let a_ok = self.a_side % 2 == 0;
        let b_ok = self.b_side == ELIMINATED || self.b_side % 2 == 1;
        a_ok && b_ok
    }
}

impl std::fmt::Display for TileContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.a_side, self.b_side)
    }
}
