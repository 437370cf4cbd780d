use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::Transaction;

/// The conditions a well-formed transaction satisfies.
///
/// Each `FaultKind` breaks exactly one of these, which makes the single-fault
/// contract checkable record by record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Invariant {
    TransactionIdPresent,
    AccountIdPresent,
    AmountPositive,
    CurrencySupported,
    TimestampNotFuture
}

/// What an invariant needs to know beyond the record itself.
#[derive(Debug, Clone, Copy)]
pub struct InvariantContext<'a> {
    pub base_moment: NaiveDateTime,
    pub currencies: &'a [String]
}

impl Invariant {
    pub const ALL: [Invariant; 5] = [
        Invariant::TransactionIdPresent,
        Invariant::AccountIdPresent,
        Invariant::AmountPositive,
        Invariant::CurrencySupported,
        Invariant::TimestampNotFuture
    ];

    pub fn holds(&self, transaction: &Transaction, context: &InvariantContext<'_>) -> bool {
        match self {
            Invariant::TransactionIdPresent => !transaction.transaction_id.is_empty(),
            Invariant::AccountIdPresent => !transaction.account_id.is_empty(),
            Invariant::AmountPositive => transaction.amount > Decimal::ZERO,
            Invariant::CurrencySupported => context.currencies.contains(&transaction.currency),
            Invariant::TimestampNotFuture => transaction.timestamp <= context.base_moment
        }
    }
}

impl Transaction {
    /// Lists every invariant this transaction breaks, in `Invariant::ALL` order.
    pub fn violated_invariants(&self, context: &InvariantContext<'_>) -> Vec<Invariant> {
        Invariant::ALL
            .into_iter()
            .filter(|invariant| !invariant.holds(self, context))
            .collect()
    }
}
