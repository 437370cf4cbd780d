use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Invariant;

/// The closed set of single-field corruptions applied to invalid records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    MissingId,
    NegativeAmount,
    FutureDate,
    InvalidCurrency,
    MissingAccount
}

impl FaultKind {
    pub const ALL: [FaultKind; 5] = [
        FaultKind::MissingId,
        FaultKind::NegativeAmount,
        FaultKind::FutureDate,
        FaultKind::InvalidCurrency,
        FaultKind::MissingAccount
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FaultKind::MissingId => "missing_id",
            FaultKind::NegativeAmount => "negative_amount",
            FaultKind::FutureDate => "future_date",
            FaultKind::InvalidCurrency => "invalid_currency",
            FaultKind::MissingAccount => "missing_account"
        }
    }

    /// The one invariant a record carrying this fault violates.
    pub fn violates(&self) -> Invariant {
        match self {
            FaultKind::MissingId => Invariant::TransactionIdPresent,
            FaultKind::NegativeAmount => Invariant::AmountPositive,
            FaultKind::FutureDate => Invariant::TimestampNotFuture,
            FaultKind::InvalidCurrency => Invariant::CurrencySupported,
            FaultKind::MissingAccount => Invariant::AccountIdPresent
        }
    }
}

impl Display for FaultKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for FaultKind {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        FaultKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value.trim())
            .ok_or_else(|| format!("Unknown fault kind: {value}"))
    }
}
