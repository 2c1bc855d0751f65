//! Nullable infrastructure for deterministic testing.
//!
//! The protocol's external collaborators — the block source and the proof
//! verification backend — are abstracted behind traits. This crate provides
//! test-friendly implementations that return deterministic values, can be
//! controlled programmatically, and never touch a real log or proof system.
//!
//! Usage: swap real implementations for nullables in tests.

pub mod block_source;
pub mod proof_verifier;

pub use block_source::NullBlockSource;
pub use proof_verifier::NullProofVerifier;
