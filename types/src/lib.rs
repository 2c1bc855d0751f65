//! Fundamental types for the zkrand protocol.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: field elements, request identities, wire-level signatures and
//! proofs, and protocol parameters.

pub mod block;
pub mod field;
pub mod params;
pub mod request;

pub use block::BlockHash;
pub use field::{FieldElement, InvalidFieldElement, FIELD_MODULUS};
pub use params::ProtocolParams;
pub use request::{Commitment, Proof, RequestId, RequestParams, RequesterId, VrfSignature};
