use chrono::NaiveDate;

const PREFIX: &str = "TXN";
const INDEX_WIDTH: usize = 8;

/// Builds the identifier for the record at `index` generated on `date`.
///
/// Depends only on its arguments, so identifiers are unique across a run
/// whenever indices are.
pub fn transaction_id(index: usize, date: NaiveDate) -> String {
    format!("{PREFIX}{}{index:0width$}", date.format("%Y%m%d"), width = INDEX_WIDTH)
}
