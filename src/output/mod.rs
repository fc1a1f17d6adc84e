//! Output of the extracted interfaces.
//!
//! - [`table`] - header and row layout
//! - [`csv`] - CSV rendering
//! - [`terminal`] - coloured terminal summary
//! - [`sink`] - the [`TableSink`] trait and the stdout CSV sink

mod csv;
mod sink;
mod table;
mod terminal;

pub use csv::render_csv;
pub use sink::{CsvSink, TableSink};
pub use table::{column_letter, prepare_table, table_range, HEADER};
pub use terminal::{format_field, print_summary};
