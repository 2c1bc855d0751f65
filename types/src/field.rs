//! Prime-field scalar type shared by every protocol component.
//!
//! All hashes, public keys, and signature components live in the scalar
//! field of BN254. A `FieldElement` can only be constructed from canonical
//! bytes (strictly less than the modulus), so holding one is proof that the
//! bound check already happened.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// The BN254 scalar-field modulus, big-endian.
///
/// `21888242871839275222246405745257275088548364400416034343698204186575808495617`
pub const FIELD_MODULUS: [u8; 32] = [
    0x30, 0x64, 0x4e, 0x72, 0xe1, 0x31, 0xa0, 0x29, 0xb8, 0x50, 0x45, 0xb6, 0x81, 0x81, 0x58,
    0x5d, 0x28, 0x33, 0xe8, 0x48, 0x79, 0xb9, 0x70, 0x91, 0x43, 0xe1, 0xf5, 0x93, 0xf0, 0x00,
    0x00, 0x01,
];

/// A value was rejected by the field bound check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("value is not a canonical field element (>= field modulus)")]
pub struct InvalidFieldElement;

/// A canonical scalar of the BN254 field, stored as 32 big-endian bytes.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldElement([u8; 32]);

impl Default for FieldElement {
    fn default() -> Self {
        Self::ZERO
    }
}

impl FieldElement {
    /// The zero element — also the pagination cursor sentinel.
    pub const ZERO: Self = Self([0u8; 32]);

    /// Construct from big-endian bytes, rejecting anything >= the modulus.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, InvalidFieldElement> {
        if Self::is_canonical(&bytes) {
            Ok(Self(bytes))
        } else {
            Err(InvalidFieldElement)
        }
    }

    /// Construct from a big-endian hex string (with or without `0x`
    /// prefix). Shorter strings are left-padded, as field values are
    /// conventionally written without leading zeros.
    pub fn from_hex(s: &str) -> Result<Self, InvalidFieldElement> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() > 64 {
            return Err(InvalidFieldElement);
        }
        let padded;
        let s = if s.len() % 2 != 0 {
            padded = format!("0{s}");
            &padded
        } else {
            s
        };
        let decoded = hex::decode(s).map_err(|_| InvalidFieldElement)?;
        let mut bytes = [0u8; 32];
        bytes[32 - decoded.len()..].copy_from_slice(&decoded);
        Self::from_bytes(bytes)
    }

    /// Whether `bytes`, read big-endian, is strictly below the modulus.
    ///
    /// Both operands are 32-byte big-endian, so lexicographic comparison is
    /// numeric comparison.
    pub fn is_canonical(bytes: &[u8; 32]) -> bool {
        bytes < &FIELD_MODULUS
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FieldElement({}\u{2026})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl Serialize for FieldElement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.0)
    }
}

impl<'de> Deserialize<'de> for FieldElement {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldVisitor;

        impl<'de> serde::de::Visitor<'de> for FieldVisitor {
            type Value = FieldElement;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "32 canonical big-endian field element bytes")
            }

            fn visit_bytes<E: serde::de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                let arr: [u8; 32] = v
                    .try_into()
                    .map_err(|_| E::invalid_length(v.len(), &self))?;
                FieldElement::from_bytes(arr).map_err(E::custom)
            }

            fn visit_seq<A: serde::de::SeqAccess<'de>>(
                self,
                mut seq: A,
            ) -> Result<Self::Value, A::Error> {
                let mut arr = [0u8; 32];
                for (i, byte) in arr.iter_mut().enumerate() {
                    *byte = seq
                        .next_element()?
                        .ok_or_else(|| serde::de::Error::invalid_length(i, &self))?;
                }
                FieldElement::from_bytes(arr).map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_bytes(FieldVisitor)
    }
}
