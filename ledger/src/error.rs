use thiserror::Error;
use zkrand_registry::RegistryError;
use zkrand_store::StoreError;
use zkrand_types::FieldElement;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("operator is not registered: {0}")]
    UnknownOperator(FieldElement),

    #[error("callback budget {budget} exceeds the maximum of {max}")]
    CallbackBudgetTooHigh { budget: u32, max: u32 },

    #[error("confirmation depth {requested} outside the allowed range {min}..={max}")]
    ConfirmationsOutOfRange { requested: u16, min: u16, max: u16 },

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
