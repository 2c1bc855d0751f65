//! Operator chain storage trait.
//!
//! Operators form a reverse-linked chain: each key maps to the key
//! registered immediately before it, and a head pointer names the most
//! recent one. The zero element terminates the chain. This gives O(1)
//! append and O(limit) reverse pagination with no growable list.

use crate::StoreError;
use zkrand_types::FieldElement;

pub trait OperatorStore {
    /// The most recently appended key, or zero when the chain is empty.
    fn head(&self) -> Result<FieldElement, StoreError>;

    /// Append `key`, linking it to the current head and making it the new
    /// head. Fails with `Duplicate` if the key is already in the chain.
    fn append(&self, key: &FieldElement) -> Result<(), StoreError>;

    /// The key registered immediately before `key` (zero for the first
    /// registered key), or `None` if `key` is not in the chain.
    fn previous(&self, key: &FieldElement) -> Result<Option<FieldElement>, StoreError>;

    /// Whether `key` is in the chain.
    fn contains(&self, key: &FieldElement) -> Result<bool, StoreError>;

    /// Number of keys in the chain.
    fn operator_count(&self) -> Result<u64, StoreError>;
}
