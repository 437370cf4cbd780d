use rand::Rng;
use rust_decimal::Decimal;

use crate::types::from_cents;

/// One band of the piecewise-uniform amount distribution.
///
/// A band is selected when the tier draw falls below `cumulative`; the amount is
/// then uniform over `[min_cents, max_cents)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountTier {
    pub cumulative: f64,
    pub min_cents: i64,
    pub max_cents: i64
}

/// 70% small, 20% medium, 10% large.
pub const DEFAULT_TIERS: [AmountTier; 3] = [
    AmountTier { cumulative: 0.7, min_cents: 10_00, max_cents: 1_000_00 },
    AmountTier { cumulative: 0.9, min_cents: 1_000_00, max_cents: 10_000_00 },
    AmountTier { cumulative: 1.0, min_cents: 10_000_00, max_cents: 100_000_00 }
];

#[derive(Debug, Clone)]
pub struct AmountSampler {
    tiers: Vec<AmountTier>
}

impl Default for AmountSampler {
    fn default() -> Self {
        Self::new(DEFAULT_TIERS.to_vec())
    }
}

impl AmountSampler {
    /// Tiers must be ordered by ascending `cumulative`, the last reaching 1.0.
    pub fn new(tiers: Vec<AmountTier>) -> Self {
        Self { tiers }
    }

    /// Draws a strictly positive amount with two fractional digits.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Decimal {
        let roll: f64 = rng.r#gen();
        let tier = self.tiers.iter()
            .find(|tier| roll < tier.cumulative)
            .or_else(|| self.tiers.last());

        match tier {
            Some(tier) => from_cents(rng.gen_range(tier.min_cents..tier.max_cents)),
            None => Decimal::ZERO
        }
    }

    /// The same draw as `sample`, negated after rounding.
    pub fn sample_negative<R: Rng>(&self, rng: &mut R) -> Decimal {
        -self.sample(rng)
    }

    pub fn tiers(&self) -> &[AmountTier] {
        &self.tiers
    }
}
