//! Request ledger.
//!
//! A request is stored as a single commitment hash keyed by its id; the
//! full parameter tuple travels with the fulfiller and is re-hashed for
//! comparison. Per-requester nonces make otherwise-identical requests mint
//! distinct ids and commitments.

pub mod commitment;
pub mod error;
pub mod ledger;

pub use commitment::{derive_commitment, derive_request_id};
pub use error::LedgerError;
pub use ledger::{LedgerEvent, RequestLedger};
