mod customer;
mod ledger;
mod operation;

pub use customer::*;
pub use ledger::*;
pub use operation::*;
