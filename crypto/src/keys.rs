//! Operator key material: secret scalars and derived public keys.

use crate::hash::{hash_to_field, reduce_to_field};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};
use zkrand_types::FieldElement;

const DOMAIN_PUBKEY: &[u8] = b"zkrand.pubkey.v1";

/// An operator's secret scalar.
///
/// Deliberately neither `Debug` nor `Clone` nor serializable; the bytes are
/// zeroized on drop. Everything the protocol persists or logs works with
/// the derived public key instead.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; 32]);

impl SecretKey {
    /// Wrap existing canonical key bytes (e.g. loaded from a custody
    /// system). The caller is responsible for having produced them below
    /// the field modulus; out-of-range bytes are reduced.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(reduce_to_field(&bytes).to_bytes())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

/// An operator key pair: secret scalar plus the derived public key.
pub struct KeyPair {
    pub public: FieldElement,
    pub secret: SecretKey,
}

/// Sample a fresh operator key pair from the system RNG.
pub fn generate_keypair() -> KeyPair {
    let mut bytes = [0u8; 32];
    OsRng.fill_bytes(&mut bytes);
    let secret = SecretKey::from_bytes(bytes);
    bytes.zeroize();
    let public = derive_public_key(&secret);
    KeyPair { public, secret }
}

/// Derive the public key committed to the registry: a one-way image of the
/// secret scalar.
pub fn derive_public_key(secret: &SecretKey) -> FieldElement {
    hash_to_field(&[DOMAIN_PUBKEY, secret.as_bytes()])
}
