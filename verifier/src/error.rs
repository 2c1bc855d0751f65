use thiserror::Error;
use zkrand_types::InvalidFieldElement;

#[derive(Debug, Error)]
pub enum VerifierError {
    #[error(transparent)]
    InvalidFieldElement(#[from] InvalidFieldElement),

    #[error("proof rejected by the verification backend")]
    InvalidProof,
}
