use super::{from_cents, TIMESTAMP_FORMAT};

use anyhow::Result;
use chrono::NaiveDateTime;

#[test]
fn test_amounts_always_render_two_fractional_digits() {
    let test_cases = vec![
        (1000, "10.00"),
        (1230, "12.30"),
        (99_999_99, "99999.99"),
        (-450_000, "-4500.00"),
        (1, "0.01"),
    ];

    for (cents, expected_output) in test_cases {
        assert_eq!(from_cents(cents).to_string(), expected_output);
    }
}

#[test]
fn test_negated_amount_keeps_its_scale() {
    assert_eq!((-from_cents(1050)).to_string(), "-10.50");
}

#[test]
fn test_timestamp_format_matches_output_layout() -> Result<()> {
    let timestamp = NaiveDateTime::parse_from_str("2024-03-05 07:08:09", TIMESTAMP_FORMAT)?;

    assert_eq!(timestamp.format(TIMESTAMP_FORMAT).to_string(), "2024-03-05 07:08:09");

    Ok(())
}
