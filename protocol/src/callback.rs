//! The consumed callback capability.

use thiserror::Error;
use zkrand_types::RequesterId;

/// How a callback run can fail. Both cases are non-fatal to fulfillment:
/// the orchestrator records them and completes the transition regardless.
#[derive(Debug, Error)]
pub enum CallbackError {
    #[error("callback execution failed: {0}")]
    Failed(String),

    #[error("callback exhausted its resource budget of {budget}")]
    BudgetExhausted { budget: u32 },
}

/// Delivers randomness to requester callbacks under a resource budget.
///
/// Implementations must scope the callback's execution to `budget` units of
/// whatever resource the embedding environment meters, and must contain any
/// failure: an error return is the only permitted effect of a misbehaving
/// consumer.
pub trait CallbackDispatcher {
    /// Run the requester's callback with the delivered randomness.
    /// Returns the resource units actually consumed.
    fn deliver(
        &mut self,
        requester: &RequesterId,
        randomness: [u8; 32],
        budget: u32,
    ) -> Result<u32, CallbackError>;
}
