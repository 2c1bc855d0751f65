//! The operator registry engine.

use crate::RegistryError;
use serde::{Deserialize, Serialize};
use zkrand_store::{OperatorStore, StoreError};
use zkrand_types::FieldElement;

/// Events emitted by the registry for downstream indexers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RegistryEvent {
    OperatorRegistered { public_key: FieldElement },
}

/// Append-only directory of operator public keys.
pub struct OperatorRegistry<S: OperatorStore> {
    store: S,
    pending_events: Vec<RegistryEvent>,
}

impl<S: OperatorStore> OperatorRegistry<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            pending_events: Vec::new(),
        }
    }

    /// Register a new operator key.
    ///
    /// The zero element terminates the chain and can never be registered;
    /// it is reported as taken.
    pub fn register(&mut self, public_key: FieldElement) -> Result<(), RegistryError> {
        if public_key.is_zero() || self.store.contains(&public_key)? {
            return Err(RegistryError::DuplicateOperator(public_key));
        }

        self.store.append(&public_key)?;
        tracing::info!(operator = %public_key, "operator registered");
        self.pending_events
            .push(RegistryEvent::OperatorRegistered { public_key });
        Ok(())
    }

    /// Whether `public_key` is a registered operator.
    pub fn is_operator(&self, public_key: &FieldElement) -> Result<bool, RegistryError> {
        Ok(self.store.contains(public_key)?)
    }

    /// Total number of registered operators.
    pub fn count(&self) -> Result<u64, RegistryError> {
        Ok(self.store.operator_count()?)
    }

    /// Up to `limit` keys in reverse-registration order, starting
    /// immediately after `cursor`.
    ///
    /// A zero cursor starts from the most recently registered key. A
    /// non-zero cursor must itself be registered. A short (or empty) page
    /// means the start of the chain was reached.
    pub fn list(
        &self,
        cursor: FieldElement,
        limit: usize,
    ) -> Result<Vec<FieldElement>, RegistryError> {
        let mut current = if cursor.is_zero() {
            self.store.head()?
        } else {
            self.store
                .previous(&cursor)?
                .ok_or(RegistryError::UnknownCursor(cursor))?
        };

        let mut page = Vec::new();
        while !current.is_zero() && page.len() < limit {
            page.push(current);
            current = self.store.previous(&current)?.ok_or_else(|| {
                StoreError::Backend(format!("operator chain link missing for {current}"))
            })?;
        }
        Ok(page)
    }

    /// Drain pending events for the embedding harness to publish.
    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.pending_events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zkrand_store::MemoryStore;

    fn fe(byte: u8) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[31] = byte;
        FieldElement::from_bytes(bytes).unwrap()
    }

    fn registry_with_keys(n: u8) -> OperatorRegistry<MemoryStore> {
        let mut registry = OperatorRegistry::new(MemoryStore::new());
        for i in 1..=n {
            registry.register(fe(i)).unwrap();
        }
        registry
    }

    // ── Registration ────────────────────────────────────────────────────

    #[test]
    fn register_and_query() {
        let mut registry = OperatorRegistry::new(MemoryStore::new());
        registry.register(fe(1)).unwrap();

        assert!(registry.is_operator(&fe(1)).unwrap());
        assert!(!registry.is_operator(&fe(2)).unwrap());
        assert_eq!(registry.count().unwrap(), 1);
    }

    #[test]
    fn duplicate_registration_rejected() {
        let mut registry = registry_with_keys(1);
        let result = registry.register(fe(1));
        assert!(matches!(
            result,
            Err(RegistryError::DuplicateOperator(k)) if k == fe(1)
        ));
        assert_eq!(registry.count().unwrap(), 1);
    }

    #[test]
    fn zero_key_cannot_be_registered() {
        let mut registry = OperatorRegistry::new(MemoryStore::new());
        assert!(matches!(
            registry.register(FieldElement::ZERO),
            Err(RegistryError::DuplicateOperator(_))
        ));
    }

    #[test]
    fn registration_emits_event() {
        let mut registry = registry_with_keys(2);
        let events = registry.drain_events();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            RegistryEvent::OperatorRegistered { public_key: fe(1) }
        );
        assert!(registry.drain_events().is_empty());
    }

    // ── Pagination ──────────────────────────────────────────────────────

    #[test]
    fn list_from_zero_returns_reverse_registration_order() {
        let registry = registry_with_keys(10);

        assert_eq!(registry.count().unwrap(), 10);
        assert_eq!(registry.list(FieldElement::ZERO, 1).unwrap(), vec![fe(10)]);

        let first_page = registry.list(FieldElement::ZERO, 5).unwrap();
        assert_eq!(first_page, vec![fe(10), fe(9), fe(8), fe(7), fe(6)]);
    }

    #[test]
    fn list_from_cursor_continues_page() {
        let registry = registry_with_keys(10);

        let second_page = registry.list(fe(6), 5).unwrap();
        assert_eq!(second_page, vec![fe(5), fe(4), fe(3), fe(2), fe(1)]);
    }

    #[test]
    fn list_short_page_at_chain_start() {
        let registry = registry_with_keys(3);

        let page = registry.list(FieldElement::ZERO, 10).unwrap();
        assert_eq!(page, vec![fe(3), fe(2), fe(1)]);

        // From the oldest key there is nothing further; not an error.
        assert!(registry.list(fe(1), 10).unwrap().is_empty());
    }

    #[test]
    fn list_unknown_cursor_rejected() {
        let registry = registry_with_keys(3);
        assert!(matches!(
            registry.list(fe(99), 5),
            Err(RegistryError::UnknownCursor(k)) if k == fe(99)
        ));
    }

    #[test]
    fn list_on_empty_registry_is_empty() {
        let registry = OperatorRegistry::new(MemoryStore::new());
        assert!(registry.list(FieldElement::ZERO, 5).unwrap().is_empty());
    }

    #[test]
    fn list_zero_limit_is_empty() {
        let registry = registry_with_keys(3);
        assert!(registry.list(FieldElement::ZERO, 0).unwrap().is_empty());
    }

    #[test]
    fn full_walk_covers_every_key_once() {
        let registry = registry_with_keys(10);
        let mut seen = Vec::new();
        let mut cursor = FieldElement::ZERO;
        loop {
            let page = registry.list(cursor, 3).unwrap();
            if page.is_empty() {
                break;
            }
            cursor = *page.last().unwrap();
            seen.extend(page);
        }
        let expected: Vec<FieldElement> = (1..=10).rev().map(fe).collect();
        assert_eq!(seen, expected);
    }
}
