use thiserror::Error;
use zkrand_historian::HistorianError;
use zkrand_ledger::LedgerError;
use zkrand_types::RequestId;
use zkrand_verifier::VerifierError;

/// Why a fulfillment attempt was rejected.
///
/// Every variant leaves the request pending; recoverable causes (most
/// obviously `TooEarly`) can simply be retried later.
#[derive(Debug, Error)]
pub enum FulfillError {
    #[error("no pending request with id {0}")]
    RequestNotFound(RequestId),

    #[error("supplied parameters do not match the stored commitment for {0}")]
    CommitmentMismatch(RequestId),

    #[error("confirmation depth not reached: {elapsed} of {required} blocks elapsed")]
    TooEarly { required: u16, elapsed: u64 },

    #[error(transparent)]
    Historian(#[from] HistorianError),

    #[error(transparent)]
    Verifier(#[from] VerifierError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
