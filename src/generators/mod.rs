//! Leaf samplers composed by the record factory.
//!
//! Every sampler takes the random source explicitly so a seeded run is
//! reproducible end to end.

mod amount;
mod identifier;
mod timestamp;

pub use amount::{AmountSampler, AmountTier, DEFAULT_TIERS};
pub use identifier::transaction_id;
pub use timestamp::{future_timestamp, past_timestamp};

use rand::Rng;

/// Uniform draw over a closed enumeration. Callers guarantee `items` is non-empty.
pub fn pick<'a, R: Rng>(rng: &mut R, items: &'a [String]) -> &'a str {
    &items[rng.gen_range(0..items.len())]
}
