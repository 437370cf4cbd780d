mod fault;
mod invariant;
mod transaction;

pub use fault::FaultKind;
pub use invariant::{Invariant, InvariantContext};
pub use transaction::{GeneratedRecord, Transaction, HEADER};
