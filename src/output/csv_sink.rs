use std::io::Write;

use csv::{Writer, WriterBuilder};

use crate::models::{Transaction, HEADER};
use crate::output::{OutputError, Sink};

/// Writes transactions as comma-separated rows under a fixed header.
///
/// The header is written on construction, so an empty dataset still yields a
/// one-line file.
pub struct CsvSink<W: Write> {
    writer: Writer<W>
}

impl<W: Write> CsvSink<W> {
    pub fn new(inner: W) -> Result<Self, OutputError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_writer(inner);

        writer.write_record(HEADER)?;

        Ok(Self { writer })
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W, OutputError> {
        self.writer.into_inner().map_err(|error| OutputError::Io(error.into_error()))
    }
}

impl<W: Write> Sink for CsvSink<W> {
    fn write(&mut self, transaction: &Transaction) -> Result<(), OutputError> {
        self.writer.serialize(transaction)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }
}
