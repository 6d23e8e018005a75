// Application layer - use cases and orchestration.
// The HTTP layer talks to the ledger only through `LedgerService`.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
