//! CSV rendering for dry runs.

/// Quote a field when it holds a comma, quote or line break.
///
/// Spreadsheet tools choke on spaces after the separator, so none are added.
fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') || input.contains('\n') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{escaped}\"")
    } else {
        input.to_string()
    }
}

/// Render a table as CSV text, one line per row.
pub fn render_csv(table: &[Vec<String>]) -> String {
    let mut out = String::new();
    for row in table {
        let line: Vec<String> = row.iter().map(|f| escape_csv_field(f)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}
