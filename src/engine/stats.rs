use std::collections::{BTreeMap, HashSet};

use crate::engine::Dataset;
use crate::models::FaultKind;

/// Summary figures describing a generated dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DatasetStats {
    pub total: usize,
    pub generated: usize,
    pub duplicates: usize,
    /// Faulted rows among the generated records, duplicates excluded.
    pub faulted: usize,
    pub faults_by_kind: BTreeMap<FaultKind, usize>,
    pub distinct_accounts: usize,
    pub distinct_currencies: usize,
    pub distinct_transaction_types: usize
}

impl DatasetStats {
    pub fn collect(dataset: &Dataset) -> Self {
        let mut accounts = HashSet::new();
        let mut currencies = HashSet::new();
        let mut transaction_types = HashSet::new();
        let mut faults_by_kind = BTreeMap::new();

        for record in &dataset.records {
            let transaction = &record.transaction;

            if !transaction.account_id.is_empty() {
                accounts.insert(transaction.account_id.as_str());
            }
            currencies.insert(transaction.currency.as_str());
            transaction_types.insert(transaction.transaction_type.as_str());

            if let (Some(kind), false) = (record.fault, record.is_duplicate()) {
                *faults_by_kind.entry(kind).or_insert(0) += 1;
            }
        }

        Self {
            total: dataset.len(),
            generated: dataset.generated,
            duplicates: dataset.duplicates,
            faulted: faults_by_kind.values().sum(),
            faults_by_kind,
            distinct_accounts: accounts.len(),
            distinct_currencies: currencies.len(),
            distinct_transaction_types: transaction_types.len()
        }
    }

    pub fn fault_rate(&self) -> f64 {
        if self.generated == 0 {
            0.0
        } else {
            self.faulted as f64 / self.generated as f64
        }
    }
}
