//! The operator worker loop.

use crate::{ProofWitness, ProvingBackend};
use std::sync::Arc;
use tokio::sync::mpsc;
use zkrand_crypto::{message_hash, prf_signature, KeyPair, SecretKey};
use zkrand_types::{BlockHash, FieldElement, Proof, RequestId, RequestParams, VrfSignature};

/// A request observed from the ledger's event stream, paired with the
/// recorded hash of its capture height.
#[derive(Clone, Debug)]
pub struct FulfillmentJob {
    pub id: RequestId,
    pub params: RequestParams,
    pub block_hash: BlockHash,
}

/// A completed signature + proof, ready to submit to the orchestrator.
#[derive(Clone, Debug)]
pub struct FulfillmentAttempt {
    pub id: RequestId,
    pub params: RequestParams,
    pub signature: VrfSignature,
    pub proof: Proof,
}

/// Holds the operator's key pair and turns jobs into attempts.
pub struct OperatorWorker {
    keypair: KeyPair,
}

impl OperatorWorker {
    pub fn new(keypair: KeyPair) -> Self {
        Self { keypair }
    }

    pub fn public_key(&self) -> FieldElement {
        self.keypair.public
    }

    /// Compute the PRF signature for a message hash.
    pub fn sign(&self, seed: &FieldElement) -> VrfSignature {
        prf_signature(&self.keypair.secret, seed)
    }

    /// Consume jobs until the channel closes, emitting an attempt for each
    /// job the backend manages to prove.
    ///
    /// Proof generation runs on a blocking task so the worker can keep
    /// draining its queue. A proving failure drops the job — the request
    /// stays pending on the ledger and can be retried.
    pub async fn run<B: ProvingBackend>(
        self,
        backend: Arc<B>,
        mut jobs: mpsc::Receiver<FulfillmentJob>,
        attempts: mpsc::Sender<FulfillmentAttempt>,
    ) {
        while let Some(job) = jobs.recv().await {
            let seed = message_hash(&job.params.requester, &job.block_hash, job.params.nonce);
            let signature = self.sign(&seed);
            let witness = ProofWitness {
                secret: SecretKey::from_bytes(*self.keypair.secret.as_bytes()),
                public_key: self.keypair.public,
                message_hash: seed,
            };

            let backend = Arc::clone(&backend);
            let proof = match tokio::task::spawn_blocking(move || backend.prove(&witness)).await {
                Ok(Ok(proof)) => proof,
                Ok(Err(err)) => {
                    tracing::warn!(id = %job.id, error = %err, "proving failed, job dropped");
                    continue;
                }
                Err(err) => {
                    tracing::warn!(id = %job.id, error = %err, "proving task panicked, job dropped");
                    continue;
                }
            };

            let attempt = FulfillmentAttempt {
                id: job.id,
                params: job.params,
                signature,
                proof,
            };
            if attempts.send(attempt).await.is_err() {
                // Receiver gone; nothing left to do.
                break;
            }
        }
    }
}
