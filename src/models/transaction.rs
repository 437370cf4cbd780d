use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::FaultKind;
use crate::types::timestamp;

/// Output column names, in the order every row is written.
pub const HEADER: [&str; 9] = [
    "transaction_id",
    "account_id",
    "timestamp",
    "amount",
    "currency",
    "type",
    "category",
    "description",
    "status"
];

/// A single synthetic transaction row.
///
/// Field order matches `HEADER`. A well-formed record has every field populated;
/// a faulted record differs from one in exactly the field its `FaultKind` targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// `TXN` + date + zero-padded index. Empty for `missing_id`.
    pub transaction_id: String,
    /// Drawn from the account enumeration. Empty for `missing_account`.
    pub account_id: String,
    /// At or before the base moment, except for `future_date`.
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
    /// Two fractional digits, strictly positive except for `negative_amount`.
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// A valid currency code, or the sentinel for `invalid_currency`.
    pub currency: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub category: String,
    pub description: String,
    pub status: String
}

/// A transaction together with the ground truth of how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRecord {
    pub transaction: Transaction,
    /// The fault injected into this record, if any.
    pub fault: Option<FaultKind>,
    /// Generation-order index of the record this one duplicates.
    pub duplicate_of: Option<usize>
}

impl GeneratedRecord {
    pub fn original(transaction: Transaction, fault: Option<FaultKind>) -> Self {
        Self {
            transaction,
            fault,
            duplicate_of: None
        }
    }

    /// An independent copy of `source`, tagged with the index it was copied from.
    pub fn duplicate_of(source: &GeneratedRecord, source_index: usize) -> Self {
        Self {
            transaction: source.transaction.clone(),
            fault: source.fault,
            duplicate_of: Some(source.duplicate_of.unwrap_or(source_index))
        }
    }

    pub fn is_faulted(&self) -> bool {
        self.fault.is_some()
    }

    pub fn is_duplicate(&self) -> bool {
        self.duplicate_of.is_some()
    }
}
