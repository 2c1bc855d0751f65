//! Per-requester nonce counter storage trait.

use crate::StoreError;
use zkrand_types::RequesterId;

/// Monotonic counters, one per requester identity.
///
/// Counters start at zero, only ever increase, and are never reused; they
/// make otherwise-identical requests hash to distinct commitments.
pub trait NonceStore {
    /// Read the requester's counter and advance it by one.
    fn next_nonce(&self, requester: &RequesterId) -> Result<u64, StoreError>;

    /// The counter value the next request would consume (zero if the
    /// requester has never made a request).
    fn current_nonce(&self, requester: &RequesterId) -> Result<u64, StoreError>;
}
