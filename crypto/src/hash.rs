//! Keccak-256 hashing and reduction into the scalar field.

use lazy_static::lazy_static;
use num_bigint::BigUint;
use sha3::{Digest, Keccak256};
use zkrand_types::{FieldElement, FIELD_MODULUS};

lazy_static! {
    static ref FIELD_MODULUS_INT: BigUint = BigUint::from_bytes_be(&FIELD_MODULUS);
}

/// Compute a Keccak-256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices and reduce the digest into the scalar field.
pub fn hash_to_field(parts: &[&[u8]]) -> FieldElement {
    reduce_to_field(&keccak256_multi(parts))
}

/// Reduce a 256-bit digest modulo the field modulus.
pub(crate) fn reduce_to_field(digest: &[u8; 32]) -> FieldElement {
    let reduced = BigUint::from_bytes_be(digest) % &*FIELD_MODULUS_INT;
    let bytes = reduced.to_bytes_be();
    let mut output = [0u8; 32];
    output[32 - bytes.len()..].copy_from_slice(&bytes);
    FieldElement::from_bytes(output).expect("reduced value is below the modulus")
}
