mod monetary;
#[cfg(test)]
mod tests;
pub mod timestamp;

pub use monetary::{from_cents, AMOUNT_DECIMAL_PLACES};
pub use timestamp::TIMESTAMP_FORMAT;
