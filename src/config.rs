//! Runtime configuration.
//!
//! Values come from the command line, the process environment and an
//! optional `.env` file (loaded by `main` through `dotenv`).

use std::env;
use std::path::PathBuf;

/// Config dump read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "huawei-cfg.txt";
/// Worksheet the table is written to.
pub const DEFAULT_WORKSHEET_NAME: &str = "ConfigData";
/// Size of a freshly created worksheet.
pub const WORKSHEET_ROWS: u32 = 1000;
pub const WORKSHEET_COLS: u32 = 10;
pub const DEFAULT_SHEETS_API_URL: &str = "https://sheets.googleapis.com/v4/spreadsheets";
/// Command used when no access token is set in the environment.
pub const TOKEN_COMMAND: &str = "gcloud auth print-access-token";

pub const ENV_CONFIG_FILE: &str = "IFACE_CONFIG_FILE";
pub const ENV_SHEET_ID: &str = "SHEET_ID";
pub const ENV_WORKSHEET_NAME: &str = "WORKSHEET_NAME";
pub const ENV_ACCESS_TOKEN: &str = "GOOGLE_ACCESS_TOKEN";
pub const ENV_SHEETS_API_URL: &str = "SHEETS_API_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Path of the router/switch configuration dump.
    pub config_file: PathBuf,
    /// Target spreadsheet. `None` means dry run: print CSV instead.
    pub spreadsheet_id: Option<String>,
    pub worksheet_name: String,
    pub access_token: Option<String>,
    pub sheets_api_url: String,
}

impl AppConfig {
    /// Build the config from CLI arguments (program name already skipped)
    /// and the process environment.
    pub fn from_env<I: IntoIterator<Item = String>>(args: I) -> AppConfig {
        AppConfig::from_lookup(args, |key| env::var(key).ok())
    }

    fn from_lookup<I, F>(args: I, lookup: F) -> AppConfig
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        // Blank env values count as unset
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let config_file = args
            .into_iter()
            .next()
            .or_else(|| var(ENV_CONFIG_FILE))
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());

        AppConfig {
            config_file: PathBuf::from(config_file),
            spreadsheet_id: var(ENV_SHEET_ID),
            worksheet_name: var(ENV_WORKSHEET_NAME)
                .unwrap_or_else(|| DEFAULT_WORKSHEET_NAME.to_string()),
            access_token: var(ENV_ACCESS_TOKEN),
            sheets_api_url: var(ENV_SHEETS_API_URL)
                .unwrap_or_else(|| DEFAULT_SHEETS_API_URL.to_string()),
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.spreadsheet_id.is_none()
    }
}
