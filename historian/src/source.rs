//! The consumed block source capability.

use zkrand_types::BlockHash;

/// Read access to the shared append-only log.
///
/// `hash_at` returns `None` outside the source's native retention window;
/// the historian exists to archive hashes before they fall out of it.
pub trait BlockSource {
    fn current_height(&self) -> u64;

    fn hash_at(&self, height: u64) -> Option<BlockHash>;
}
