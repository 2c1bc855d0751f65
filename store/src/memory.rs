//! In-memory reference backend — thread-safe maps behind mutexes.
//!
//! One lock per map preserves the one-transition-at-a-time discipline when
//! the surrounding harness serializes calls, and keeps the backend safe
//! under a multi-threaded test runtime.

use crate::block_hash::BlockHashStore;
use crate::nonce::NonceStore;
use crate::operator::OperatorStore;
use crate::request::RequestStore;
use crate::StoreError;
use std::collections::HashMap;
use std::sync::Mutex;
use zkrand_types::{BlockHash, Commitment, FieldElement, RequestId, RequesterId};

#[derive(Default)]
struct OperatorChain {
    /// key -> key registered immediately before it.
    links: HashMap<FieldElement, FieldElement>,
    head: FieldElement,
}

/// An in-memory store implementing all four protocol maps.
#[derive(Default)]
pub struct MemoryStore {
    operators: Mutex<OperatorChain>,
    commitments: Mutex<HashMap<RequestId, Commitment>>,
    nonces: Mutex<HashMap<RequesterId, u64>>,
    block_hashes: Mutex<HashMap<u64, BlockHash>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperatorStore for MemoryStore {
    fn head(&self) -> Result<FieldElement, StoreError> {
        Ok(self.operators.lock().unwrap().head)
    }

    fn append(&self, key: &FieldElement) -> Result<(), StoreError> {
        let mut chain = self.operators.lock().unwrap();
        if chain.links.contains_key(key) {
            return Err(StoreError::Duplicate(key.to_string()));
        }
        let previous = chain.head;
        chain.links.insert(*key, previous);
        chain.head = *key;
        Ok(())
    }

    fn previous(&self, key: &FieldElement) -> Result<Option<FieldElement>, StoreError> {
        Ok(self.operators.lock().unwrap().links.get(key).copied())
    }

    fn contains(&self, key: &FieldElement) -> Result<bool, StoreError> {
        Ok(self.operators.lock().unwrap().links.contains_key(key))
    }

    fn operator_count(&self) -> Result<u64, StoreError> {
        Ok(self.operators.lock().unwrap().links.len() as u64)
    }
}

impl RequestStore for MemoryStore {
    fn put_commitment(&self, id: &RequestId, commitment: &Commitment) -> Result<(), StoreError> {
        self.commitments.lock().unwrap().insert(*id, *commitment);
        Ok(())
    }

    fn get_commitment(&self, id: &RequestId) -> Result<Option<Commitment>, StoreError> {
        Ok(self.commitments.lock().unwrap().get(id).copied())
    }

    fn delete_commitment(&self, id: &RequestId) -> Result<bool, StoreError> {
        Ok(self.commitments.lock().unwrap().remove(id).is_some())
    }

    fn request_count(&self) -> Result<u64, StoreError> {
        Ok(self.commitments.lock().unwrap().len() as u64)
    }
}

impl NonceStore for MemoryStore {
    fn next_nonce(&self, requester: &RequesterId) -> Result<u64, StoreError> {
        let mut nonces = self.nonces.lock().unwrap();
        let counter = nonces.entry(*requester).or_insert(0);
        let nonce = *counter;
        *counter += 1;
        Ok(nonce)
    }

    fn current_nonce(&self, requester: &RequesterId) -> Result<u64, StoreError> {
        Ok(self.nonces.lock().unwrap().get(requester).copied().unwrap_or(0))
    }
}

impl BlockHashStore for MemoryStore {
    fn put_hash(&self, height: u64, hash: &BlockHash) -> Result<(), StoreError> {
        self.block_hashes.lock().unwrap().insert(height, *hash);
        Ok(())
    }

    fn get_hash(&self, height: u64) -> Result<Option<BlockHash>, StoreError> {
        Ok(self.block_hashes.lock().unwrap().get(&height).copied())
    }

    fn hash_count(&self) -> Result<u64, StoreError> {
        Ok(self.block_hashes.lock().unwrap().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fe(byte: u8) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[31] = byte;
        FieldElement::from_bytes(bytes).unwrap()
    }

    #[test]
    fn append_moves_head_and_links_previous() {
        let store = MemoryStore::new();
        store.append(&fe(1)).unwrap();
        store.append(&fe(2)).unwrap();

        assert_eq!(store.head().unwrap(), fe(2));
        assert_eq!(store.previous(&fe(2)).unwrap(), Some(fe(1)));
        assert_eq!(store.previous(&fe(1)).unwrap(), Some(FieldElement::ZERO));
        assert_eq!(store.operator_count().unwrap(), 2);
    }

    #[test]
    fn append_duplicate_fails() {
        let store = MemoryStore::new();
        store.append(&fe(1)).unwrap();
        assert!(matches!(
            store.append(&fe(1)),
            Err(StoreError::Duplicate(_))
        ));
    }

    #[test]
    fn previous_of_unknown_key_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.previous(&fe(9)).unwrap(), None);
    }

    #[test]
    fn commitment_lifecycle() {
        let store = MemoryStore::new();
        let id = RequestId::new([1u8; 32]);
        let commitment = Commitment::new([2u8; 32]);

        store.put_commitment(&id, &commitment).unwrap();
        assert_eq!(store.get_commitment(&id).unwrap(), Some(commitment));
        assert_eq!(store.request_count().unwrap(), 1);

        assert!(store.delete_commitment(&id).unwrap());
        assert_eq!(store.get_commitment(&id).unwrap(), None);
        assert!(!store.delete_commitment(&id).unwrap());
    }

    #[test]
    fn nonces_post_increment_per_requester() {
        let store = MemoryStore::new();
        let alice = RequesterId::new([1u8; 32]);
        let bob = RequesterId::new([2u8; 32]);

        assert_eq!(store.next_nonce(&alice).unwrap(), 0);
        assert_eq!(store.next_nonce(&alice).unwrap(), 1);
        assert_eq!(store.next_nonce(&bob).unwrap(), 0);
        assert_eq!(store.current_nonce(&alice).unwrap(), 2);
    }

    #[test]
    fn block_hash_point_queries() {
        let store = MemoryStore::new();
        let hash = BlockHash::new([7u8; 32]);

        assert_eq!(store.get_hash(100).unwrap(), None);
        store.put_hash(100, &hash).unwrap();
        assert_eq!(store.get_hash(100).unwrap(), Some(hash));
        assert_eq!(store.hash_count().unwrap(), 1);
    }
}
