use chrono::{Duration, NaiveDateTime};
use rand::Rng;

/// A moment up to `lookback_days` days, 23 hours, 59 minutes and 59 seconds
/// before `base`. Never later than `base`.
pub fn past_timestamp<R: Rng>(rng: &mut R, base: NaiveDateTime, lookback_days: u32) -> NaiveDateTime {
    let offset = Duration::days(i64::from(rng.gen_range(0..=lookback_days)))
        + Duration::hours(rng.gen_range(0..=23))
        + Duration::minutes(rng.gen_range(0..=59))
        + Duration::seconds(rng.gen_range(0..=59));

    base - offset
}

/// A moment a whole number of days in 1..=lookahead_days after `base`.
pub fn future_timestamp<R: Rng>(rng: &mut R, base: NaiveDateTime, lookahead_days: u32) -> NaiveDateTime {
    base + Duration::days(i64::from(rng.gen_range(1..=lookahead_days.max(1))))
}
