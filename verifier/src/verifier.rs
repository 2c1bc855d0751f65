//! The verification engine and its external capability seam.

use crate::VerifierError;
use zkrand_types::{FieldElement, Proof, VrfSignature};

/// The external zero-knowledge proof verification capability.
///
/// Public inputs are fixed as `[public_key, message_hash, s0, s1]`; every
/// element is canonical by the time this is called.
pub trait ProofVerifier {
    fn verify(&self, proof: &Proof, public_inputs: &[FieldElement; 4]) -> bool;
}

/// Checks an operator's claimed VRF output against the proof backend.
pub struct PrfVerifier<V: ProofVerifier> {
    backend: V,
}

impl<V: ProofVerifier> PrfVerifier<V> {
    pub fn new(backend: V) -> Self {
        Self { backend }
    }

    /// Validate a signature pair for `(public_key, message_hash)`.
    ///
    /// Signature components arrive as raw words and are bound-checked
    /// before the proof backend runs; the backend is never invoked with an
    /// out-of-range input.
    pub fn verify(
        &self,
        public_key: FieldElement,
        message_hash: FieldElement,
        signature: &VrfSignature,
        proof: &Proof,
    ) -> Result<(), VerifierError> {
        let s0 = FieldElement::from_bytes(signature.s0)?;
        let s1 = FieldElement::from_bytes(signature.s1)?;

        let public_inputs = [public_key, message_hash, s0, s1];
        if self.backend.verify(proof, &public_inputs) {
            Ok(())
        } else {
            tracing::warn!(
                operator = %public_key,
                message = %message_hash,
                "proof rejected"
            );
            Err(VerifierError::InvalidProof)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records invocations and answers with a preset verdict.
    struct ScriptedVerifier {
        verdict: bool,
        calls: RefCell<Vec<[FieldElement; 4]>>,
    }

    impl ScriptedVerifier {
        fn new(verdict: bool) -> Self {
            Self {
                verdict,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ProofVerifier for ScriptedVerifier {
        fn verify(&self, _proof: &Proof, public_inputs: &[FieldElement; 4]) -> bool {
            self.calls.borrow_mut().push(*public_inputs);
            self.verdict
        }
    }

    fn fe(byte: u8) -> FieldElement {
        let mut bytes = [0u8; 32];
        bytes[31] = byte;
        FieldElement::from_bytes(bytes).unwrap()
    }

    #[test]
    fn accepts_when_backend_accepts() {
        let verifier = PrfVerifier::new(ScriptedVerifier::new(true));
        let signature = VrfSignature::new(fe(3).to_bytes(), fe(4).to_bytes());

        verifier
            .verify(fe(1), fe(2), &signature, &Proof::new(vec![0xaa]))
            .unwrap();

        let calls = verifier.backend.calls.borrow();
        assert_eq!(calls.as_slice(), &[[fe(1), fe(2), fe(3), fe(4)]]);
    }

    #[test]
    fn backend_rejection_is_invalid_proof() {
        let verifier = PrfVerifier::new(ScriptedVerifier::new(false));
        let signature = VrfSignature::new(fe(3).to_bytes(), fe(4).to_bytes());

        let result = verifier.verify(fe(1), fe(2), &signature, &Proof::new(vec![]));
        assert!(matches!(result, Err(VerifierError::InvalidProof)));
    }

    #[test]
    fn out_of_range_component_rejected_before_backend_runs() {
        let verifier = PrfVerifier::new(ScriptedVerifier::new(true));
        let signature = VrfSignature::new([0xff; 32], fe(4).to_bytes());

        let result = verifier.verify(fe(1), fe(2), &signature, &Proof::new(vec![]));
        assert!(matches!(
            result,
            Err(VerifierError::InvalidFieldElement(_))
        ));
        assert!(verifier.backend.calls.borrow().is_empty());
    }

    #[test]
    fn second_component_is_also_bound_checked() {
        let verifier = PrfVerifier::new(ScriptedVerifier::new(true));
        let signature = VrfSignature::new(fe(3).to_bytes(), [0xff; 32]);

        let result = verifier.verify(fe(1), fe(2), &signature, &Proof::new(vec![]));
        assert!(matches!(
            result,
            Err(VerifierError::InvalidFieldElement(_))
        ));
        assert!(verifier.backend.calls.borrow().is_empty());
    }
}
