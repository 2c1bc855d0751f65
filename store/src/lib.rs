//! Abstract storage traits for the zkrand protocol state.
//!
//! The protocol's shared mutable state is exactly four maps: the operator
//! chain, the commitment map, the per-requester nonce counters, and the
//! block-hash archive. Each is behind a trait so a persistent backend can be
//! swapped in; the rest of the workspace depends only on the traits.
//! `MemoryStore` is the reference backend.

pub mod block_hash;
pub mod error;
pub mod memory;
pub mod nonce;
pub mod operator;
pub mod request;

pub use block_hash::BlockHashStore;
pub use error::StoreError;
pub use memory::MemoryStore;
pub use nonce::NonceStore;
pub use operator::OperatorStore;
pub use request::RequestStore;
