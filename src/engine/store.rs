//! Persistence collaborator.
//!
//! The core never touches storage. A `SnapshotStore` receives
//! [`BoardSnapshot`]s and hands them back; where the bytes go is up to the
//! implementation.

use crate::board::BoardSnapshot;
use crate::core::StoreError;

/// Saves and loads board snapshots.
pub trait SnapshotStore {
    /// Persist a snapshot, replacing any previous one.
    fn save(&mut self, snapshot: &BoardSnapshot) -> Result<(), StoreError>;

    /// Load the saved snapshot, or `None` if nothing was saved.
    fn load(&self) -> Result<Option<BoardSnapshot>, StoreError>;
}

/// In-memory store holding one bincode-encoded snapshot.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    bytes: Option<Vec<u8>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap previously encoded bytes.
    #[must_use]
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// Encoded snapshot, if one was saved.
    #[must_use]
    pub fn bytes(&self) -> Option<&[u8]> {
        self.bytes.as_deref()
    }

    /// Drop the saved snapshot.
    pub fn clear(&mut self) {
        self.bytes = None;
    }
}

impl SnapshotStore for MemoryStore {
    fn save(&mut self, snapshot: &BoardSnapshot) -> Result<(), StoreError> {
        self.bytes = Some(bincode::serialize(snapshot)?);
        Ok(())
    }

    fn load(&self) -> Result<Option<BoardSnapshot>, StoreError> {
        self.bytes
            .as_deref()
            .map(|bytes| bincode::deserialize(bytes))
            .transpose()
            .map_err(StoreError::from)
    }
}
