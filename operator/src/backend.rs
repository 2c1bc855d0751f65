//! The consumed proving capability.

use thiserror::Error;
use zkrand_crypto::SecretKey;
use zkrand_types::{FieldElement, Proof};

#[derive(Debug, Error)]
pub enum ProvingError {
    #[error("proof generation failed: {0}")]
    Backend(String),
}

/// Private and public inputs handed to the proving backend.
pub struct ProofWitness {
    pub secret: SecretKey,
    pub public_key: FieldElement,
    pub message_hash: FieldElement,
}

/// Generates a zero-knowledge proof that the PRF relation holds for the
/// witness. Implementations are expected to take seconds; the worker calls
/// this from a blocking task.
pub trait ProvingBackend: Send + Sync + 'static {
    fn prove(&self, witness: &ProofWitness) -> Result<Proof, ProvingError>;
}
