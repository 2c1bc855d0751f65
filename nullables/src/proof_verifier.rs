//! Nullable proof verifier — scripted or recomputing.

use zkrand_crypto::{derive_public_key, prf_signature, SecretKey};
use zkrand_types::{FieldElement, Proof, VrfSignature};
use zkrand_verifier::ProofVerifier;

enum Mode {
    AcceptAll,
    RejectAll,
    /// Recompute the PRF relation with a known secret, standing in for the
    /// real circuit: the proof blob itself is ignored.
    Recompute([u8; 32]),
}

/// A proof verifier double with a scripted or recomputed verdict.
pub struct NullProofVerifier {
    mode: Mode,
}

impl NullProofVerifier {
    /// Accepts every proof.
    pub fn accept_all() -> Self {
        Self {
            mode: Mode::AcceptAll,
        }
    }

    /// Rejects every proof.
    pub fn reject_all() -> Self {
        Self {
            mode: Mode::RejectAll,
        }
    }

    /// Checks the PRF relation directly using `secret`, accepting exactly
    /// the public inputs a correct operator would submit.
    pub fn recomputing(secret: &SecretKey) -> Self {
        Self {
            mode: Mode::Recompute(*secret.as_bytes()),
        }
    }
}

impl ProofVerifier for NullProofVerifier {
    fn verify(&self, _proof: &Proof, public_inputs: &[FieldElement; 4]) -> bool {
        match &self.mode {
            Mode::AcceptAll => true,
            Mode::RejectAll => false,
            Mode::Recompute(secret_bytes) => {
                let secret = SecretKey::from_bytes(*secret_bytes);
                let [public_key, message_hash, s0, s1] = public_inputs;
                if derive_public_key(&secret) != *public_key {
                    return false;
                }
                let expected = prf_signature(&secret, message_hash);
                expected == VrfSignature::new(s0.to_bytes(), s1.to_bytes())
            }
        }
    }
}
