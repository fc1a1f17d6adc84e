//! Terminal output utilities.

use crate::models::InterfaceRecord;
use colored::Colorize;

/// Format a value as a quoted, left-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:<width$}")
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("")
}

/// Print a one line per interface overview to stdout.
pub fn print_summary(records: &[InterfaceRecord]) {
    println!(
        "#{} {} interface(s)",
        "SUMMARY".on_blue(),
        records.len()
    );
    for r in records {
        let name = format_field(&r.name, 28);
        let name = if r.is_bare() {
            name.dimmed()
        } else {
            name.bold()
        };
        println!(
            "{name} vlan={vlan} ip={ip} ipv6={ipv6} type={port_type} allowed={allowed} {description}",
            vlan = format_field(opt(&r.vlan), 6),
            ip = format_field(opt(&r.ipv4), 33),
            ipv6 = format_field(opt(&r.ipv6), 22),
            port_type = format_field(opt(&r.port_type), 8),
            allowed = format_field(&r.allowed_vlans, 12),
            description = opt(&r.description).green(),
        );
    }
}
