use chrono::{NaiveDate, NaiveDateTime};
use rand::Rng;
use tracing::trace;

use crate::config::GeneratorConfig;
use crate::generators::{future_timestamp, past_timestamp, pick, transaction_id, AmountSampler};
use crate::models::{FaultKind, GeneratedRecord, Transaction};

/// Builds one transaction per generation index, well-formed or carrying a single fault.
pub struct RecordFactory<'a> {
    config: &'a GeneratorConfig,
    base_moment: NaiveDateTime,
    date: NaiveDate,
    amounts: AmountSampler
}

impl<'a> RecordFactory<'a> {
    /// `config` must have passed `GeneratorConfig::validate`.
    ///
    /// # Panics
    /// `generate` and `build` panic when it has not: `gen_bool` rejects a
    /// probability outside [0, 1] and drawing from an empty enumeration fails.
    pub fn new(config: &'a GeneratorConfig, base_moment: NaiveDateTime) -> Self {
        Self {
            config,
            base_moment,
            date: base_moment.date(),
            amounts: AmountSampler::default()
        }
    }

    pub fn base_moment(&self) -> NaiveDateTime {
        self.base_moment
    }

    /// Runs the per-record fault trial, then builds the record.
    ///
    /// A faulted record draws its kind uniformly from `FaultKind::ALL`.
    pub fn generate<R: Rng>(&self, index: usize, rng: &mut R) -> GeneratedRecord {
        let fault = if rng.gen_bool(self.config.fault_probability) {
            Some(FaultKind::ALL[rng.gen_range(0..FaultKind::ALL.len())])
        } else {
            None
        };

        self.build(index, fault, rng)
    }

    /// Builds the record at `index`, corrupting only the field `fault` targets.
    pub fn build<R: Rng>(&self, index: usize, fault: Option<FaultKind>, rng: &mut R) -> GeneratedRecord {
        if let Some(kind) = fault {
            trace!("Injecting [{kind}] into record [{index}]");
        }

        let transaction_id = match fault {
            Some(FaultKind::MissingId) => String::new(),
            _ => transaction_id(index, self.date)
        };

        let account_id = match fault {
            Some(FaultKind::MissingAccount) => String::new(),
            _ => pick(rng, &self.config.accounts).to_string()
        };

        let timestamp = match fault {
            Some(FaultKind::FutureDate) => future_timestamp(rng, self.base_moment, self.config.lookahead_days),
            _ => past_timestamp(rng, self.base_moment, self.config.lookback_days)
        };

        let amount = match fault {
            Some(FaultKind::NegativeAmount) => self.amounts.sample_negative(rng),
            _ => self.amounts.sample(rng)
        };

        let currency = match fault {
            Some(FaultKind::InvalidCurrency) => self.config.invalid_currency.clone(),
            _ => pick(rng, &self.config.currencies).to_string()
        };

        let transaction = Transaction {
            transaction_id,
            account_id,
            timestamp,
            amount,
            currency,
            transaction_type: pick(rng, &self.config.transaction_types).to_string(),
            category: pick(rng, &self.config.categories).to_string(),
            description: pick(rng, &self.config.descriptions).to_string(),
            status: pick(rng, &self.config.statuses).to_string()
        };

        GeneratedRecord::original(transaction, fault)
    }
}
