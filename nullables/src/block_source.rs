//! Nullable block source — a programmable append-only log head.

use std::collections::HashMap;
use std::sync::Mutex;
use zkrand_crypto::keccak256;
use zkrand_historian::BlockSource;
use zkrand_types::BlockHash;

/// A block source whose height is advanced by the test.
///
/// Hashes are derived deterministically from the height unless a test pins
/// one explicitly; constructing with `without_derived_hashes` makes unpinned
/// heights unavailable instead, which models a log that has already
/// forgotten them.
pub struct NullBlockSource {
    height: Mutex<u64>,
    hashes: Mutex<HashMap<u64, BlockHash>>,
    derive_missing: bool,
}

impl NullBlockSource {
    pub fn new() -> Self {
        Self::at_height(0)
    }

    pub fn at_height(height: u64) -> Self {
        Self {
            height: Mutex::new(height),
            hashes: Mutex::new(HashMap::new()),
            derive_missing: true,
        }
    }

    /// A source that answers `None` for any height without a pinned hash.
    pub fn without_derived_hashes(height: u64) -> Self {
        Self {
            derive_missing: false,
            ..Self::at_height(height)
        }
    }

    /// Advance the head by `blocks`.
    pub fn advance(&self, blocks: u64) {
        *self.height.lock().unwrap() += blocks;
    }

    /// Pin an explicit hash for a height.
    pub fn set_hash(&self, height: u64, hash: BlockHash) {
        self.hashes.lock().unwrap().insert(height, hash);
    }

    /// The deterministic hash this source derives for a height.
    pub fn derived_hash(height: u64) -> BlockHash {
        BlockHash::new(keccak256(&height.to_be_bytes()))
    }
}

impl Default for NullBlockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockSource for NullBlockSource {
    fn current_height(&self) -> u64 {
        *self.height.lock().unwrap()
    }

    fn hash_at(&self, height: u64) -> Option<BlockHash> {
        if let Some(pinned) = self.hashes.lock().unwrap().get(&height) {
            return Some(*pinned);
        }
        self.derive_missing.then(|| Self::derived_hash(height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_advances() {
        let source = NullBlockSource::at_height(10);
        source.advance(5);
        assert_eq!(source.current_height(), 15);
    }

    #[test]
    fn derived_hashes_are_deterministic() {
        let source = NullBlockSource::new();
        assert_eq!(source.hash_at(3), source.hash_at(3));
        assert_ne!(source.hash_at(3), source.hash_at(4));
    }

    #[test]
    fn pinned_hash_wins_over_derived() {
        let source = NullBlockSource::new();
        let pinned = BlockHash::new([0xaa; 32]);
        source.set_hash(3, pinned);
        assert_eq!(source.hash_at(3), Some(pinned));
    }

    #[test]
    fn without_derived_hashes_forgets_unpinned_heights() {
        let source = NullBlockSource::without_derived_hashes(10);
        assert_eq!(source.hash_at(3), None);
        source.set_hash(3, BlockHash::new([1u8; 32]));
        assert!(source.hash_at(3).is_some());
    }
}
