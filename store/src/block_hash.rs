//! Block hash archive storage trait.

use crate::StoreError;
use zkrand_types::BlockHash;

/// Map of log heights to their recorded hashes.
///
/// Entries are append-only and immutable once written; conflict detection
/// is the historian's job, built on `get_hash` + `put_hash`.
pub trait BlockHashStore {
    fn put_hash(&self, height: u64, hash: &BlockHash) -> Result<(), StoreError>;

    fn get_hash(&self, height: u64) -> Result<Option<BlockHash>, StoreError>;

    /// Number of recorded heights.
    fn hash_count(&self) -> Result<u64, StoreError>;
}
