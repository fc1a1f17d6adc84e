//! Destinations for the finished table.

use super::csv::render_csv;
use std::error::Error;

/// Something that can publish a table (header row first) under a
/// worksheet name.
///
/// Sinks are built by the caller and passed in, so the pipeline holds no
/// client state of its own.
#[allow(async_fn_in_trait)]
pub trait TableSink {
    async fn publish(&self, worksheet: &str, table: &[Vec<String>]) -> Result<(), Box<dyn Error>>;
}

/// Prints the table as CSV to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvSink;

impl TableSink for CsvSink {
    async fn publish(&self, worksheet: &str, table: &[Vec<String>]) -> Result<(), Box<dyn Error>> {
        log::info!("Dry run: printing worksheet '{worksheet}' as CSV");
        print!("{}", render_csv(table));
        Ok(())
    }
}
