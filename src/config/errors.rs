use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration error: {name} must be within [0, 1], got {value}")]
    ProbabilityOutOfRange {
        name: &'static str,
        value: f64
    },
    #[error("Configuration error: enumeration [{name}] must not be empty")]
    EmptyEnumeration {
        name: &'static str
    },
    #[error("Configuration error: lookahead_days must be at least 1")]
    EmptyLookahead,
    #[error("Configuration error: {name} of {days} days exceeds the supported window of {max} days from the base moment")]
    WindowOutOfRange {
        name: &'static str,
        days: u32,
        max: u32
    },
    #[error("Configuration error: invalid currency sentinel [{0}] must be non-empty and outside the valid currency set")]
    InvalidCurrencySentinel(String),
    #[error("Configuration error: unable to read [{path}] | {source}")]
    Read {
        path: PathBuf,
        source: io::Error
    },
    #[error("Configuration error: unable to parse [{path}] | {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error
    }
}
