//! Synthetic financial transaction generator.
//!
//! Produces a mostly valid dataset seeded, at known rates, with records that
//! break exactly one invariant and with literal duplicate rows, so downstream
//! validation and ETL code can be tested against ground truth.
//!
//! ```no_run
//! use transaction_data_generator::{DatasetAssembler, GeneratorConfig, write_dataset};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = GeneratorConfig::new().with_num_records(1_000).with_seed(42);
//! config.validate()?;
//!
//! let dataset = DatasetAssembler::new(&config, config.base_moment()).assemble(&mut config.build_rng());
//! write_dataset(&config.output_path, &dataset)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod engine;
pub mod factory;
pub mod generators;
pub mod models;
pub mod output;
pub mod types;

pub use config::{ConfigError, GeneratorConfig};
pub use engine::{Dataset, DatasetAssembler, DatasetStats};
pub use factory::RecordFactory;
pub use models::{FaultKind, GeneratedRecord, Invariant, InvariantContext, Transaction, HEADER};
pub use output::{read_transactions, write_dataset, write_labels, CsvSink, OutputError, Sink};
