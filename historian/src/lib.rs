//! Block hash historian.
//!
//! The underlying log only exposes recent hashes; the historian archives
//! them so a request's height stays resolvable at fulfillment time, however
//! far in the future that is. Records are tamper-evident: a height can
//! never be re-recorded with a different hash.

pub mod error;
pub mod historian;
pub mod source;

pub use error::HistorianError;
pub use historian::BlockHashHistorian;
pub use source::BlockSource;
