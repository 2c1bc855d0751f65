//! PRF verification.
//!
//! The operator proves, in zero knowledge, that some secret key consistent
//! with its registered public key produced the claimed signature pair from
//! the message hash. This crate never sees the secret: it bound-checks the
//! public inputs and hands them with the proof to the external verification
//! capability.

pub mod error;
pub mod verifier;

pub use error::VerifierError;
pub use verifier::{ProofVerifier, PrfVerifier};

// Message-hash derivation is shared with the operator side; the canonical
// definition lives in the crypto crate.
pub use zkrand_crypto::message_hash;
