//! The historian engine.

use crate::{BlockSource, HistorianError};
use zkrand_store::BlockHashStore;
use zkrand_types::BlockHash;

/// Archive of `height -> hash` records with tamper-evident writes.
pub struct BlockHashHistorian<S: BlockHashStore> {
    store: S,
}

impl<S: BlockHashStore> BlockHashHistorian<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Record the hash for a height.
    ///
    /// Idempotent for an identical `(height, hash)` pair; a divergent
    /// re-record fails with `HashConflict` and leaves the original intact.
    pub fn record(&self, height: u64, hash: BlockHash) -> Result<(), HistorianError> {
        if let Some(existing) = self.store.get_hash(height)? {
            if existing == hash {
                return Ok(());
            }
            return Err(HistorianError::HashConflict {
                height,
                existing,
                attempted: hash,
            });
        }

        self.store.put_hash(height, &hash)?;
        tracing::debug!(height, hash = %hash, "block hash recorded");
        Ok(())
    }

    /// Snapshot the source's current head into the archive.
    pub fn record_current(&self, source: &dyn BlockSource) -> Result<u64, HistorianError> {
        let height = source.current_height();
        let hash = source
            .hash_at(height)
            .ok_or(HistorianError::HeightUnavailable(height))?;
        self.record(height, hash)?;
        Ok(height)
    }

    /// The recorded hash for `height`.
    pub fn get(&self, height: u64) -> Result<BlockHash, HistorianError> {
        self.store
            .get_hash(height)?
            .ok_or(HistorianError::HeightNotRecorded(height))
    }

    /// Number of recorded heights.
    pub fn count(&self) -> Result<u64, HistorianError> {
        Ok(self.store.hash_count()?)
    }
}
