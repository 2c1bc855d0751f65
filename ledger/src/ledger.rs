//! The request ledger engine.

use crate::commitment::{derive_commitment, derive_request_id};
use crate::LedgerError;
use serde::{Deserialize, Serialize};
use zkrand_historian::BlockSource;
use zkrand_registry::OperatorRegistry;
use zkrand_store::{NonceStore, OperatorStore, RequestStore};
use zkrand_types::{
    Commitment, FieldElement, ProtocolParams, RequestId, RequestParams, RequesterId,
};

/// Events emitted by the ledger for downstream indexers and operators.
///
/// The full request tuple is published here; only the commitment is kept in
/// storage, so this event is how an operator learns the parameters it must
/// echo back at fulfillment time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LedgerEvent {
    RandomnessRequested {
        id: RequestId,
        operator_public_key: FieldElement,
        requester: RequesterId,
        height: u64,
        min_confirmations: u16,
        callback_budget: u32,
        nonce: u64,
    },
}

/// Ledger of in-flight randomness requests.
pub struct RequestLedger<S: RequestStore + NonceStore> {
    store: S,
    params: ProtocolParams,
    pending_events: Vec<LedgerEvent>,
}

impl<S: RequestStore + NonceStore> RequestLedger<S> {
    pub fn new(store: S, params: ProtocolParams) -> Self {
        Self {
            store,
            params,
            pending_events: Vec::new(),
        }
    }

    /// Admit a randomness request.
    ///
    /// Validates the operator and the requested limits, captures the
    /// current height, consumes the requester's nonce, and files the
    /// commitment under a freshly minted id. All validation happens before
    /// the nonce is advanced, so a rejected request mutates nothing.
    pub fn request<O: OperatorStore>(
        &mut self,
        registry: &OperatorRegistry<O>,
        source: &dyn BlockSource,
        requester: RequesterId,
        operator_public_key: FieldElement,
        min_confirmations: u16,
        callback_budget: u32,
    ) -> Result<RequestId, LedgerError> {
        if callback_budget > self.params.max_callback_budget {
            return Err(LedgerError::CallbackBudgetTooHigh {
                budget: callback_budget,
                max: self.params.max_callback_budget,
            });
        }
        if min_confirmations < self.params.min_min_confirmations
            || min_confirmations > self.params.max_min_confirmations
        {
            return Err(LedgerError::ConfirmationsOutOfRange {
                requested: min_confirmations,
                min: self.params.min_min_confirmations,
                max: self.params.max_min_confirmations,
            });
        }
        if !registry.is_operator(&operator_public_key)? {
            return Err(LedgerError::UnknownOperator(operator_public_key));
        }

        let height = source.current_height();
        let nonce = self.store.next_nonce(&requester)?;

        let params = RequestParams {
            operator_public_key,
            requester,
            height,
            min_confirmations,
            callback_budget,
            nonce,
        };
        let id = derive_request_id(&params);
        let commitment = derive_commitment(&params);
        self.store.put_commitment(&id, &commitment)?;

        tracing::debug!(
            id = %id,
            operator = %operator_public_key,
            requester = %requester,
            height,
            nonce,
            "randomness requested"
        );
        self.pending_events.push(LedgerEvent::RandomnessRequested {
            id,
            operator_public_key,
            requester,
            height,
            min_confirmations,
            callback_budget,
            nonce,
        });

        Ok(id)
    }

    /// The stored commitment for `id`, if the request is still pending.
    pub fn commitment(&self, id: &RequestId) -> Result<Option<Commitment>, LedgerError> {
        Ok(self.store.get_commitment(id)?)
    }

    /// Delete a commitment, returning whether it was present. The only
    /// removal path; called by the fulfillment orchestrator.
    pub fn remove(&mut self, id: &RequestId) -> Result<bool, LedgerError> {
        Ok(self.store.delete_commitment(id)?)
    }

    /// Number of requests still pending.
    pub fn pending_count(&self) -> Result<u64, LedgerError> {
        Ok(self.store.request_count()?)
    }

    /// The nonce the requester's next request would consume.
    pub fn current_nonce(&self, requester: &RequesterId) -> Result<u64, LedgerError> {
        Ok(self.store.current_nonce(requester)?)
    }

    /// Drain pending events for the embedding harness to publish.
    pub fn drain_events(&mut self) -> Vec<LedgerEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
