//! Extract interface metadata from a router/switch configuration dump and
//! publish it as a table.

pub mod config;
pub mod models;
pub mod output;
pub mod processing;
pub mod sheets;
pub mod source;

use models::InterfaceRecord;
use output::{prepare_table, TableSink};
use std::error::Error;
use std::path::Path;

/// Read the configuration file and extract its interfaces in source order.
///
/// A read failure is returned before any parsing happens.
pub fn get_interfaces<P: AsRef<Path>>(
    config_file: P,
) -> Result<Vec<InterfaceRecord>, Box<dyn Error>> {
    let lines = source::read_config_file(config_file)?;
    Ok(processing::extract_interfaces(&lines))
}

/// Lay the records out as a table and hand it to `sink`.
pub async fn publish_interfaces<S: TableSink>(
    sink: &S,
    worksheet: &str,
    records: &[InterfaceRecord],
) -> Result<(), Box<dyn Error>> {
    let table = prepare_table(records);
    log::info!(
        "Publishing {} row(s) + header to worksheet '{worksheet}'",
        records.len()
    );
    sink.publish(worksheet, &table).await
}
