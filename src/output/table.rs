//! Table layout shared by every sink.

use crate::models::InterfaceRecord;

/// Header row of the published table.
pub const HEADER: [&str; 7] = [
    "Interface",
    "Description",
    "VLAN",
    "IP",
    "IPv6",
    "Port Type",
    "Allowed VLANs",
];

/// Build the header row followed by one row per record.
///
/// Absent fields become empty strings.
pub fn prepare_table(records: &[InterfaceRecord]) -> Vec<Vec<String>> {
    let mut table = Vec::with_capacity(records.len() + 1);
    table.push(HEADER.iter().map(|h| h.to_string()).collect());

    let field = |v: &Option<String>| v.clone().unwrap_or_default();
    for r in records {
        table.push(vec![
            r.name.clone(),
            field(&r.description),
            field(&r.vlan),
            field(&r.ipv4),
            field(&r.ipv6),
            field(&r.port_type),
            r.allowed_vlans.to_string(),
        ]);
    }
    table
}

/// Convert a 1-based column number to its A1 letters (1 -> A, 27 -> AA).
pub fn column_letter(mut col: usize) -> String {
    let mut letters = Vec::new();
    while col > 0 {
        let rem = (col - 1) % 26;
        letters.push(b'A' + rem as u8);
        col = (col - 1) / 26;
    }
    letters.iter().rev().map(|&b| b as char).collect()
}

/// A1 range covering `rows` x `cols` from the top-left cell, e.g. `A1:G12`.
pub fn table_range(rows: usize, cols: usize) -> String {
    format!("A1:{}{}", column_letter(cols.max(1)), rows.max(1))
}
