//! The fulfillment orchestrator engine.

use crate::{CallbackDispatcher, FulfillError};
use serde::{Deserialize, Serialize};
use zkrand_crypto::{derive_randomness, message_hash};
use zkrand_historian::{BlockHashHistorian, BlockSource};
use zkrand_ledger::{derive_commitment, RequestLedger};
use zkrand_store::{BlockHashStore, NonceStore, RequestStore};
use zkrand_types::{Proof, RequestId, RequestParams, VrfSignature};
use zkrand_verifier::{ProofVerifier, PrfVerifier};

/// Events emitted by the orchestrator for downstream indexers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentEvent {
    RandomnessFulfilled {
        id: RequestId,
        success: bool,
        callback_failed: bool,
    },
}

/// What a successful fulfillment produced.
#[derive(Clone, Debug)]
pub struct FulfillmentReceipt {
    pub id: RequestId,
    pub randomness: [u8; 32],
    /// Whether the requester callback failed or ran out of budget. The
    /// transition itself is complete either way.
    pub callback_failed: bool,
    /// Resource units the callback consumed, when it completed.
    pub budget_consumed: Option<u32>,
}

/// Drives the only state transition a request can take: pending to
/// fulfilled, with the randomness delivered on the way.
pub struct FulfillmentOrchestrator<V: ProofVerifier> {
    verifier: PrfVerifier<V>,
    pending_events: Vec<FulfillmentEvent>,
}

impl<V: ProofVerifier> FulfillmentOrchestrator<V> {
    pub fn new(verifier: PrfVerifier<V>) -> Self {
        Self {
            verifier,
            pending_events: Vec::new(),
        }
    }

    /// Attempt to fulfill the request `id` with the supplied parameters,
    /// signature, and proof.
    ///
    /// Validation order: commitment match, confirmation depth, recorded
    /// block hash lookup, field bound checks, proof verification. Only
    /// after all of them does the commitment get deleted, and only after
    /// the deletion does the requester callback run — so neither a failed
    /// attempt nor a hostile callback can double-spend the commitment.
    #[allow(clippy::too_many_arguments)]
    pub fn fulfill<S, B, C>(
        &mut self,
        ledger: &mut RequestLedger<S>,
        historian: &BlockHashHistorian<B>,
        source: &dyn BlockSource,
        callbacks: &mut C,
        id: RequestId,
        params: &RequestParams,
        signature: &VrfSignature,
        proof: &Proof,
    ) -> Result<FulfillmentReceipt, FulfillError>
    where
        S: RequestStore + NonceStore,
        B: BlockHashStore,
        C: CallbackDispatcher,
    {
        let stored = ledger
            .commitment(&id)?
            .ok_or(FulfillError::RequestNotFound(id))?;
        if derive_commitment(params) != stored {
            return Err(FulfillError::CommitmentMismatch(id));
        }

        let elapsed = source.current_height().saturating_sub(params.height);
        if elapsed < u64::from(params.min_confirmations) {
            return Err(FulfillError::TooEarly {
                required: params.min_confirmations,
                elapsed,
            });
        }

        // The hash recorded for the request height, never one read back
        // from the source at fulfillment time.
        let block_hash = historian.get(params.height)?;
        let seed = message_hash(&params.requester, &block_hash, params.nonce);

        self.verifier
            .verify(params.operator_public_key, seed, signature, proof)?;

        // Effects before interactions: once the commitment is gone the
        // request can never be fulfilled again, whatever the callback does.
        if !ledger.remove(&id)? {
            return Err(FulfillError::RequestNotFound(id));
        }

        let randomness = derive_randomness(signature);
        let (callback_failed, budget_consumed) =
            match callbacks.deliver(&params.requester, randomness, params.callback_budget) {
                Ok(consumed) => (false, Some(consumed)),
                Err(err) => {
                    tracing::warn!(id = %id, error = %err, "requester callback failed");
                    (true, None)
                }
            };

        tracing::info!(id = %id, callback_failed, "randomness fulfilled");
        self.pending_events.push(FulfillmentEvent::RandomnessFulfilled {
            id,
            success: true,
            callback_failed,
        });

        Ok(FulfillmentReceipt {
            id,
            randomness,
            callback_failed,
            budget_consumed,
        })
    }

    /// Drain pending events for the embedding harness to publish.
    pub fn drain_events(&mut self) -> Vec<FulfillmentEvent> {
        std::mem::take(&mut self.pending_events)
    }
}
