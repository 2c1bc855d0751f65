//! Derivation of request ids and commitments.
//!
//! Both hashes bind every field of the request tuple; they differ in field
//! order and domain tag. The id doubles as an unguessable handle: it
//! depends on the requester's nonce and the capture height, neither of
//! which is known before the request transition runs.

use zkrand_crypto::keccak256_multi;
use zkrand_types::{Commitment, RequestId, RequestParams};

const DOMAIN_REQUEST_ID: &[u8] = b"zkrand.request_id.v1";
const DOMAIN_COMMITMENT: &[u8] = b"zkrand.commitment.v1";

/// The id under which a request's commitment is filed.
pub fn derive_request_id(params: &RequestParams) -> RequestId {
    RequestId::new(keccak256_multi(&[
        DOMAIN_REQUEST_ID,
        params.operator_public_key.as_bytes(),
        params.requester.as_bytes(),
        &params.height.to_be_bytes(),
        &params.min_confirmations.to_be_bytes(),
        &params.callback_budget.to_be_bytes(),
        &params.nonce.to_be_bytes(),
    ]))
}

/// The stored image of a request.
pub fn derive_commitment(params: &RequestParams) -> Commitment {
    Commitment::new(keccak256_multi(&[
        DOMAIN_COMMITMENT,
        params.operator_public_key.as_bytes(),
        &params.height.to_be_bytes(),
        &params.min_confirmations.to_be_bytes(),
        &params.callback_budget.to_be_bytes(),
        params.requester.as_bytes(),
        &params.nonce.to_be_bytes(),
    ]))
}
