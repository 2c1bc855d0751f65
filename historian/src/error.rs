use thiserror::Error;
use zkrand_store::StoreError;
use zkrand_types::BlockHash;

#[derive(Debug, Error)]
pub enum HistorianError {
    #[error("height {height} already recorded with a different hash (have {existing}, got {attempted})")]
    HashConflict {
        height: u64,
        existing: BlockHash,
        attempted: BlockHash,
    },

    #[error("no hash recorded for height {0}")]
    HeightNotRecorded(u64),

    #[error("source does not expose a hash for height {0}")]
    HeightUnavailable(u64),

    #[error(transparent)]
    Store(#[from] StoreError),
}
