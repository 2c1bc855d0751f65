//! Operator directory — an append-only set of committed public keys.
//!
//! Registration links each new key to the previously most recent one, so
//! enumeration walks the chain backwards from the head: O(1) insert,
//! O(limit) page reads, no growable list.

pub mod error;
pub mod registry;

pub use error::RegistryError;
pub use registry::{OperatorRegistry, RegistryEvent};
