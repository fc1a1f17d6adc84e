//! Configuration dump reader.

use std::error::Error;
use std::path::Path;

/// Read the configuration file and split it into lines.
///
/// # Returns
/// * `Ok(Vec<String>)` - one entry per line, line endings removed
/// * `Err` - if the file is missing or not valid UTF-8
pub fn read_config_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, Box<dyn Error>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading config file {}: {e}", path.display()))?;

    let lines: Vec<String> = text.lines().map(str::to_string).collect();
    log::info!("Read config file {} ({} lines)", path.display(), lines.len());
    Ok(lines)
}
