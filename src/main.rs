use std::fs::{create_dir_all, metadata};
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::Parser;
use tracing::{info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use transaction_data_generator::types::TIMESTAMP_FORMAT;
use transaction_data_generator::{write_dataset, write_labels, DatasetAssembler, DatasetStats, GeneratorConfig};

#[derive(Parser, Debug)]
#[command(name = "transaction-data-generator")]
#[command(about = "Generate synthetic financial transactions seeded with known invalid and duplicate records", long_about = None)]
struct Cli {
    /// JSON file overriding any subset of the generator defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of records generated before duplicates are appended
    #[arg(short, long)]
    records: Option<usize>,

    /// Output CSV path (default: data/raw/transactions.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write a ground-truth label file to this path
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Random seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Fixed base moment, formatted as "YYYY-MM-DD HH:MM:SS"
    #[arg(long, value_parser = parse_base_time)]
    base_time: Option<NaiveDateTime>,

    /// Log level: error, warn, info, debug, trace
    #[arg(long, default_value = "info")]
    log_level: String
}

impl Cli {
    /// Command-line values win over the JSON file, which wins over the defaults.
    fn into_config(self) -> Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default()
        };

        if let Some(records) = self.records {
            config = config.with_num_records(records);
        }
        if let Some(output) = self.output {
            config = config.with_output_path(output);
        }
        if let Some(labels) = self.labels {
            config = config.with_labels_path(labels);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(base_time) = self.base_time {
            config = config.with_base_time(base_time);
        }

        config.validate()?;

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let config = cli.into_config()?;
    let base_moment = config.base_moment();
    let mut rng = config.build_rng();

    if config.seed.is_none() {
        warn!("No seed supplied, output will not be reproducible");
    }

    let timer = Instant::now();
    let dataset = DatasetAssembler::new(&config, base_moment).assemble(&mut rng);
    let duration = timer.elapsed();

    info!("Generated transactions in: {duration:?}");

    log_stats(&DatasetStats::collect(&dataset));

    ensure_parent_directory(&config.output_path)?;
    write_dataset(&config.output_path, &dataset)?;

    let size = metadata(&config.output_path)?.len();
    info!(
        "Wrote {} transactions to {} ({:.2} MB)",
        dataset.len(),
        config.output_path.display(),
        size as f64 / (1024.0 * 1024.0)
    );

    if let Some(labels_path) = &config.labels_path {
        ensure_parent_directory(labels_path)?;
        write_labels(labels_path, &dataset)?;
        info!("Wrote labels to {}", labels_path.display());
    }

    Ok(())
}

fn parse_base_time(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT)
        .map_err(|error| format!("expected \"YYYY-MM-DD HH:MM:SS\": {error}"))
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            LevelFilter::INFO
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout stays free for anything piped, all logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

fn ensure_parent_directory(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        create_dir_all(parent)?;
    }

    Ok(())
}

fn log_stats(stats: &DatasetStats) {
    info!("Accounts: {}", stats.distinct_accounts);
    info!("Currencies: {}", stats.distinct_currencies);
    info!("Transaction types: {}", stats.distinct_transaction_types);
    info!("Invalid records: {} ({:.2}%)", stats.faulted, stats.fault_rate() * 100.0);

    for (kind, count) in &stats.faults_by_kind {
        info!("  {kind}: {count}");
    }

    info!("Duplicate transactions: {}", stats.duplicates);
}
