use rust_decimal::Decimal;

/// Number of fractional digits every generated amount carries.
pub const AMOUNT_DECIMAL_PLACES: u32 = 2;

/// Builds an amount from a whole number of cents.
///
/// Working in integer cents keeps sampled amounts exact, so rendering always
/// yields exactly two fractional digits ("12.30", "-4500.00").
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, AMOUNT_DECIMAL_PLACES)
}
