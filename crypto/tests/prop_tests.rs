use proptest::prelude::*;

use zkrand_crypto::{derive_randomness, hash2, hash3, hash_to_field, message_hash, prf_signature};
use zkrand_crypto::{derive_public_key, SecretKey};
use zkrand_types::{BlockHash, FieldElement, RequesterId, VrfSignature};

proptest! {
    /// hash_to_field output is canonical for arbitrary input bytes.
    #[test]
    fn hash_to_field_always_canonical(data in prop::collection::vec(any::<u8>(), 0..256)) {
        let fe = hash_to_field(&[&data]);
        prop_assert!(FieldElement::is_canonical(fe.as_bytes()));
    }

    /// hash2 is a pure function of its operands.
    #[test]
    fn hash2_deterministic(a in prop::collection::vec(any::<u8>(), 0..64),
                           b in prop::collection::vec(any::<u8>(), 0..64)) {
        prop_assert_eq!(hash2(&a, &b), hash2(&a, &b));
    }

    /// Arity domains never collide on identical raw bytes.
    #[test]
    fn arity_domains_differ(a in prop::array::uniform32(any::<u8>()),
                            b in prop::array::uniform32(any::<u8>())) {
        prop_assert_ne!(hash2(&a, &b), hash3(&a, &b, &[]));
    }

    /// PRF: deterministic per (key, message); components always canonical.
    #[test]
    fn prf_output_canonical_and_deterministic(
        key in prop::array::uniform32(any::<u8>()),
        req in prop::array::uniform32(any::<u8>()),
        block in prop::array::uniform32(any::<u8>()),
        nonce in any::<u64>(),
    ) {
        let secret = SecretKey::from_bytes(key);
        let m = message_hash(&RequesterId::new(req), &BlockHash::new(block), nonce);
        let sig = prf_signature(&secret, &m);
        prop_assert!(FieldElement::is_canonical(&sig.s0));
        prop_assert!(FieldElement::is_canonical(&sig.s1));
        prop_assert_eq!(sig, prf_signature(&secret, &m));
        prop_assert_ne!(sig.s0, sig.s1);
    }

    /// Public key derivation is a function of the secret alone.
    #[test]
    fn public_key_function_of_secret(key in prop::array::uniform32(any::<u8>())) {
        let a = derive_public_key(&SecretKey::from_bytes(key));
        let b = derive_public_key(&SecretKey::from_bytes(key));
        prop_assert_eq!(a, b);
        prop_assert!(FieldElement::is_canonical(a.as_bytes()));
    }

    /// Delivered randomness is a function of the full signature.
    #[test]
    fn randomness_function_of_signature(
        s0 in prop::array::uniform32(any::<u8>()),
        s1 in prop::array::uniform32(any::<u8>()),
    ) {
        let sig = VrfSignature::new(s0, s1);
        prop_assert_eq!(derive_randomness(&sig), derive_randomness(&sig));
    }
}
