//! The two-hash PRF construction and the hashes that feed it.
//!
//! The protocol's field-valued hashes are arity-tagged: `hash2` and `hash3`
//! use distinct domain prefixes so a two-operand hash can never collide with
//! a three-operand hash over a prefix of the same bytes.

use crate::hash::hash_to_field;
use crate::keys::SecretKey;
use zkrand_types::{BlockHash, FieldElement, RequesterId, VrfSignature};

const DOMAIN_H2: &[u8] = b"zkrand.hash2.v1";
const DOMAIN_H3: &[u8] = b"zkrand.hash3.v1";
const DOMAIN_SEED: &[u8] = b"zkrand.seed.v1";

/// Two-operand field hash.
pub fn hash2(a: &[u8], b: &[u8]) -> FieldElement {
    hash_to_field(&[DOMAIN_H2, a, b])
}

/// Three-operand field hash.
pub fn hash3(a: &[u8], b: &[u8], c: &[u8]) -> FieldElement {
    hash_to_field(&[DOMAIN_H3, a, b, c])
}

/// Derive the per-request message hash: a fresh, non-reusable seed binding
/// the random output to the requester, the recorded block hash of the
/// request height, and the request nonce.
pub fn message_hash(requester: &RequesterId, block_hash: &BlockHash, nonce: u64) -> FieldElement {
    hash_to_field(&[
        DOMAIN_SEED,
        requester.as_bytes(),
        block_hash.as_bytes(),
        &nonce.to_be_bytes(),
    ])
}

/// Compute the operator's VRF output for a message hash:
/// `s_i = hash2(k, hash3(k, m, i))` for `i` in `{0, 1}`.
///
/// Requires the secret key; runs off-core on the operator side only. The
/// core checks the same relation through the zero-knowledge proof without
/// ever seeing `k`.
pub fn prf_signature(secret: &SecretKey, message_hash: &FieldElement) -> VrfSignature {
    let k = secret.as_bytes();
    let m = message_hash.as_bytes();
    let inner0 = hash3(k, m, &[0]);
    let inner1 = hash3(k, m, &[1]);
    let s0 = hash2(k, inner0.as_bytes());
    let s1 = hash2(k, inner1.as_bytes());
    VrfSignature::new(s0.to_bytes(), s1.to_bytes())
}

/// Derive the randomness delivered to the requester from a verified
/// signature: the full Keccak digest of both components.
pub fn derive_randomness(signature: &VrfSignature) -> [u8; 32] {
    crate::hash::keccak256_multi(&[&signature.s0, &signature.s1])
}
