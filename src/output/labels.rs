use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;
use tracing::debug;

use crate::engine::Dataset;
use crate::models::FaultKind;
use crate::output::OutputError;

const LABEL_HEADER: [&str; 4] = ["row", "transaction_id", "fault", "duplicate_of"];

/// Ground truth for one output row. `row` and `duplicate_of` are 1-based data row numbers.
#[derive(Debug, Serialize)]
struct LabelRow<'a> {
    row: usize,
    transaction_id: &'a str,
    fault: Option<FaultKind>,
    duplicate_of: Option<usize>
}

/// Writes the sidecar file attributing every data row to its fault and duplicate source.
pub fn write_labels(path: &Path, dataset: &Dataset) -> Result<(), OutputError> {
    let file = File::create(path).map_err(|error| OutputError::create(path, error))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer.write_record(LABEL_HEADER)?;

    for (position, record) in dataset.records.iter().enumerate() {
        writer.serialize(LabelRow {
            row: position + 1,
            transaction_id: &record.transaction.transaction_id,
            fault: record.fault,
            duplicate_of: record.duplicate_of.map(|index| index + 1)
        })?;
    }

    writer.flush()?;

    debug!("Wrote {} labels to {}", dataset.len(), path.display());

    Ok(())
}
