mod csv_sink;
mod errors;
mod labels;

use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::debug;

use crate::engine::Dataset;
use crate::models::Transaction;

pub use csv_sink::CsvSink;
pub use errors::OutputError;
pub use labels::write_labels;

/// Destination for an ordered stream of transactions.
pub trait Sink {
    fn write(&mut self, transaction: &Transaction) -> Result<(), OutputError>;
    fn finish(&mut self) -> Result<(), OutputError>;
}

/// Writes every record of `dataset`, in order, to `sink`.
pub fn write_to_sink<S: Sink>(sink: &mut S, dataset: &Dataset) -> Result<(), OutputError> {
    for record in &dataset.records {
        sink.write(&record.transaction)?;
    }

    sink.finish()
}

/// Creates (or truncates) `path` and writes the dataset as delimited text.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|error| OutputError::create(path, error))?;
    let mut sink = CsvSink::new(BufWriter::new(file))?;

    write_to_sink(&mut sink, dataset)?;

    debug!("Wrote {} rows to {}", dataset.len(), path.display());

    Ok(())
}

/// Parses delimited text produced by `write_dataset` back into transactions.
pub fn read_transactions<R: Read>(reader: R) -> Result<Vec<Transaction>, OutputError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for result in reader.deserialize::<Transaction>() {
        transactions.push(result?);
    }

    Ok(transactions)
}
