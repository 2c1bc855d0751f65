//! Hashing core for the zkrand protocol.
//!
//! Three layers, bottom up: raw Keccak-256 over bytes, reduction of digests
//! into the scalar field, and the domain-separated hash family the protocol
//! builds ids, commitments, seeds, and PRF outputs from.

pub mod hash;
pub mod keys;
pub mod prf;

pub use hash::{hash_to_field, keccak256, keccak256_multi};
pub use keys::{derive_public_key, generate_keypair, KeyPair, SecretKey};
pub use prf::{derive_randomness, hash2, hash3, message_hash, prf_signature};
