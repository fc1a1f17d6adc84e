//! Spreadsheet publishing.
//!
//! - [`cli`] - shell command runner
//! - [`auth`] - access token lookup
//! - [`client`] - Sheets REST client, a [`crate::output::TableSink`]

mod auth;
mod cli;
mod client;

pub use auth::access_token;
pub use cli::run;
pub use client::{quote_sheet_title, SheetProperties, SheetsClient};
