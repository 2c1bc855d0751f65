use thiserror::Error;
use zkrand_store::StoreError;
use zkrand_types::FieldElement;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("operator already registered: {0}")]
    DuplicateOperator(FieldElement),

    #[error("unknown pagination cursor: {0}")]
    UnknownCursor(FieldElement),

    #[error(transparent)]
    Store(#[from] StoreError),
}
