use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Duration, Local, NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::types::timestamp;

const DEFAULT_NUM_RECORDS: usize = 100_000;
const DEFAULT_OUTPUT_PATH: &str = "data/raw/transactions.csv";
const DEFAULT_FAULT_PROBABILITY: f64 = 0.05;
const DEFAULT_DUPLICATE_RATE: f64 = 0.02;
const DEFAULT_LOOKBACK_DAYS: u32 = 90;
const DEFAULT_LOOKAHEAD_DAYS: u32 = 30;
/// Widest lookback or look-ahead window, in days, that a base moment may be offset by.
pub const MAX_WINDOW_DAYS: u32 = 36_500;
const DEFAULT_ACCOUNT_COUNT: usize = 500;
const DEFAULT_INVALID_CURRENCY: &str = "XXX";

const CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CNY"];
const TRANSACTION_TYPES: &[&str] = &["DEBIT", "CREDIT", "TRANSFER", "FEE", "DIVIDEND", "INTEREST"];
const CATEGORIES: &[&str] = &[
    "SALARY", "PURCHASE", "TRANSFER", "INVESTMENT", "FEE",
    "DIVIDEND", "INTEREST", "REFUND", "PAYMENT", "WITHDRAWAL"
];
const DESCRIPTIONS: &[&str] = &[
    "Regular monthly payment",
    "Online purchase",
    "ATM withdrawal",
    "Wire transfer",
    "Direct deposit",
    "Card payment",
    "Investment transaction",
    "Fee charge",
    "Interest payment",
    "Dividend payment"
];
const STATUSES: &[&str] = &["COMPLETED", "PENDING", "FAILED", "REVERSED"];

/// Every tunable of a generation run.
///
/// Missing fields in a JSON configuration file fall back to the defaults, so a
/// file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Number of records generated before duplicates are appended.
    pub num_records: usize,
    /// Destination of the transaction file.
    pub output_path: PathBuf,
    /// Optional destination of the ground-truth label file.
    pub labels_path: Option<PathBuf>,
    /// Per-record probability of injecting exactly one fault.
    pub fault_probability: f64,
    /// Fraction of `num_records` appended again as duplicates.
    pub duplicate_rate: f64,
    /// Valid timestamps fall within this many days before the base moment.
    pub lookback_days: u32,
    /// Future-dated faults fall 1..=lookahead_days days after the base moment.
    pub lookahead_days: u32,
    pub accounts: Vec<String>,
    pub currencies: Vec<String>,
    /// Out-of-set currency code used by the invalid currency fault.
    pub invalid_currency: String,
    pub transaction_types: Vec<String>,
    pub categories: Vec<String>,
    pub descriptions: Vec<String>,
    pub statuses: Vec<String>,
    /// Seed for reproducible runs. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Fixed base moment. `None` captures the local time once per run.
    #[serde(with = "optional_timestamp")]
    pub base_time: Option<NaiveDateTime>
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            num_records: DEFAULT_NUM_RECORDS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            labels_path: None,
            fault_probability: DEFAULT_FAULT_PROBABILITY,
            duplicate_rate: DEFAULT_DUPLICATE_RATE,
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            lookahead_days: DEFAULT_LOOKAHEAD_DAYS,
            accounts: (1..=DEFAULT_ACCOUNT_COUNT).map(|i| format!("ACC{i:03}")).collect(),
            currencies: to_owned(CURRENCIES),
            invalid_currency: DEFAULT_INVALID_CURRENCY.to_string(),
            transaction_types: to_owned(TRANSACTION_TYPES),
            categories: to_owned(CATEGORIES),
            descriptions: to_owned(DESCRIPTIONS),
            statuses: to_owned(STATUSES),
            seed: None,
            base_time: None
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a configuration from a JSON file, defaulting every absent field.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source
        })
    }

    pub fn with_num_records(mut self, num_records: usize) -> Self {
        self.num_records = num_records;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_labels_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.labels_path = Some(path.into());
        self
    }

    pub fn with_fault_probability(mut self, probability: f64) -> Self {
        self.fault_probability = probability;
        self
    }

    pub fn with_duplicate_rate(mut self, rate: f64) -> Self {
        self.duplicate_rate = rate;
        self
    }

    pub fn with_lookback_days(mut self, days: u32) -> Self {
        self.lookback_days = days;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_base_time(mut self, base_time: NaiveDateTime) -> Self {
        self.base_time = Some(base_time);
        self
    }

    /// Checks every parameter the generators rely on being well-formed.
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - A probability or rate lies outside [0, 1].
    /// - Any closed enumeration is empty.
    /// - The look-ahead window is empty.
    /// - A lookback or look-ahead window exceeds `MAX_WINDOW_DAYS`, or cannot be
    ///   applied to a fixed `base_time` without leaving the representable range.
    /// - The invalid currency sentinel is empty or a valid currency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_probability("fault_probability", self.fault_probability)?;
        check_probability("duplicate_rate", self.duplicate_rate)?;

        let enumerations = [
            ("accounts", &self.accounts),
            ("currencies", &self.currencies),
            ("transaction_types", &self.transaction_types),
            ("categories", &self.categories),
            ("descriptions", &self.descriptions),
            ("statuses", &self.statuses)
        ];

        for (name, values) in enumerations {
            if values.is_empty() {
                return Err(ConfigError::EmptyEnumeration { name });
            }
        }

        if self.lookahead_days == 0 {
            return Err(ConfigError::EmptyLookahead);
        }

        check_window("lookback_days", self.lookback_days, self.base_time, true)?;
        check_window("lookahead_days", self.lookahead_days, self.base_time, false)?;

        if self.invalid_currency.is_empty() || self.currencies.contains(&self.invalid_currency) {
            return Err(ConfigError::InvalidCurrencySentinel(self.invalid_currency.clone()));
        }

        Ok(())
    }

    /// The reference moment for every timestamp of a run, truncated to whole seconds.
    pub fn base_moment(&self) -> NaiveDateTime {
        let moment = self.base_time.unwrap_or_else(|| Local::now().naive_local());
        moment.with_nanosecond(0).unwrap_or(moment)
    }

    pub fn build_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy()
        }
    }
}

fn to_owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn check_probability(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ProbabilityOutOfRange { name, value })
    }
}

/// Rejects windows the timestamp generators could not offset the base moment by.
///
/// A lookback also reaches back up to 23:59:59 past its last whole day.
fn check_window(name: &'static str, days: u32, base_time: Option<NaiveDateTime>, backwards: bool) -> Result<(), ConfigError> {
    let out_of_range = || ConfigError::WindowOutOfRange { name, days, max: MAX_WINDOW_DAYS };

    if days > MAX_WINDOW_DAYS {
        return Err(out_of_range());
    }

    if let Some(base) = base_time {
        let reach = Duration::days(i64::from(days) + 1);
        let shifted = if backwards {
            base.checked_sub_signed(reach)
        } else {
            base.checked_add_signed(reach)
        };

        if shifted.is_none() {
            return Err(out_of_range());
        }
    }

    Ok(())
}

mod optional_timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::timestamp;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(moment) => timestamp::serialize(moment, serializer),
            None => serializer.serialize_none()
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Wrapper(#[serde(with = "timestamp")] NaiveDateTime);

        let wrapper = Option::<Wrapper>::deserialize(deserializer)?;
        Ok(wrapper.map(|Wrapper(moment)| moment))
    }
}
