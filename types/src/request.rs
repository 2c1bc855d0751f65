//! Request identities and the wire types exchanged at fulfillment time.

use crate::field::FieldElement;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-byte request identifier, minted by the ledger at request time.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequestId([u8; 32]);

impl RequestId {
    pub const ZERO: Self = Self([0u8; 32]);

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequestId({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Opaque 32-byte identity of a randomness requester.
///
/// The core imposes no address format; an embedding chain maps its own
/// account scheme onto these bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RequesterId([u8; 32]);

impl RequesterId {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for RequesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RequesterId({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for RequesterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// The stored image of a request: a hash binding every request parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// The full request tuple.
///
/// Only its commitment hash is persisted; the fulfiller supplies the tuple
/// again and the orchestrator re-hashes it for comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestParams {
    pub operator_public_key: FieldElement,
    pub requester: RequesterId,
    /// Height of the log at request time.
    pub height: u64,
    /// Confirmation depth required before fulfillment.
    pub min_confirmations: u16,
    /// Resource budget granted to the requester callback.
    pub callback_budget: u32,
    /// The requester's nonce at request time.
    pub nonce: u64,
}

/// The operator's claimed VRF output: two raw 32-byte words.
///
/// Components arrive unchecked from the fulfiller and are bound-checked
/// against the field modulus during verification. Never persisted.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VrfSignature {
    pub s0: [u8; 32],
    pub s1: [u8; 32],
}

impl VrfSignature {
    pub fn new(s0: [u8; 32], s1: [u8; 32]) -> Self {
        Self { s0, s1 }
    }
}

impl fmt::Debug for VrfSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VrfSignature({}\u{2026}, {}\u{2026})",
            hex::encode(&self.s0[..4]),
            hex::encode(&self.s1[..4])
        )
    }
}

/// An opaque zero-knowledge proof artifact, produced off-core and handed to
/// the external verification capability unmodified.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Proof(Vec<u8>);

impl Proof {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
