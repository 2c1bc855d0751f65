//! Request commitment storage trait.

use crate::StoreError;
use zkrand_types::{Commitment, RequestId};

/// Map of in-flight request ids to their commitments.
///
/// A commitment is written once at request time and removed exactly once by
/// fulfillment; there is no update path.
pub trait RequestStore {
    fn put_commitment(&self, id: &RequestId, commitment: &Commitment) -> Result<(), StoreError>;

    fn get_commitment(&self, id: &RequestId) -> Result<Option<Commitment>, StoreError>;

    /// Remove a commitment, returning whether it was present.
    fn delete_commitment(&self, id: &RequestId) -> Result<bool, StoreError>;

    /// Number of in-flight commitments.
    fn request_count(&self) -> Result<u64, StoreError>;
}
