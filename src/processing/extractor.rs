//! Interface block extraction.
//!
//! Single pass over the configuration lines. Each `interface <name>` line
//! opens a block; the block's record is finalized when the next
//! `interface` line or the end of input is reached.

use super::vlan_range::normalize_vlans;
use crate::models::{AllowedVlans, InterfaceRecord};
use regex::Regex;
use std::sync::OnceLock;

/// Regexes for each recognized line, compiled once.
struct LinePatterns {
    interface: Regex,
    vlanif: Regex,
    trunk_allow: Regex,
    description: Regex,
    dot1q: Regex,
    ipv4: Regex,
    ipv6: Regex,
    link_type: Regex,
}

static LINE_PATTERNS: OnceLock<LinePatterns> = OnceLock::new();

fn get_line_patterns() -> &'static LinePatterns {
    LINE_PATTERNS.get_or_init(|| LinePatterns {
        interface: Regex::new(r"^interface\s+(\S+)").expect("Invalid Regex"),
        vlanif: Regex::new(r"^Vlanif(\d+)").expect("Invalid Regex"),
        trunk_allow: Regex::new(r"^port trunk allow-pass vlan\s+(.+)").expect("Invalid Regex"),
        description: Regex::new(r"^description\s+(.+)").expect("Invalid Regex"),
        dot1q: Regex::new(r"vlan-type dot1q\s+(\d+)").expect("Invalid Regex"),
        ipv4: Regex::new(r"ip address (\d+\.\d+\.\d+\.\d+)\s+(\d+\.\d+\.\d+\.\d+)")
            .expect("Invalid Regex"),
        ipv6: Regex::new(r"ipv6 address ([a-fA-F0-9:]+/\d+)").expect("Invalid Regex"),
        link_type: Regex::new(r"port link-type\s+(\S+)").expect("Invalid Regex"),
    })
}

/// What a trimmed configuration line means to the scanner.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Interface(&'a str),
    TrunkAllow(&'a str),
    Description(&'a str),
    Dot1q(&'a str),
    Ipv4 { addr: &'a str, mask: &'a str },
    Ipv6(&'a str),
    PortType(&'a str),
    Other,
}

/// Classify a trimmed line. Patterns are tried in priority order and the
/// first hit wins.
fn classify(line: &str) -> Line<'_> {
    let p = get_line_patterns();
    let group = |re: &Regex| {
        re.captures(line)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str())
    };

    if let Some(name) = group(&p.interface) {
        Line::Interface(name)
    } else if let Some(rest) = group(&p.trunk_allow) {
        Line::TrunkAllow(rest)
    } else if let Some(rest) = group(&p.description) {
        Line::Description(rest.trim())
    } else if let Some(id) = group(&p.dot1q) {
        Line::Dot1q(id)
    } else if let Some(c) = p.ipv4.captures(line) {
        match (c.get(1), c.get(2)) {
            (Some(addr), Some(mask)) => Line::Ipv4 {
                addr: addr.as_str(),
                mask: mask.as_str(),
            },
            _ => Line::Other,
        }
    } else if let Some(addr) = group(&p.ipv6) {
        Line::Ipv6(addr)
    } else if let Some(kind) = group(&p.link_type) {
        Line::PortType(kind)
    } else {
        Line::Other
    }
}

/// The interface block being scanned.
#[derive(Debug)]
struct OpenBlock {
    record: InterfaceRecord,
    /// Raw trunk text not yet normalized.
    trunk_buffer: Vec<String>,
}

impl OpenBlock {
    fn new(name: &str) -> OpenBlock {
        let mut record = InterfaceRecord::new(name);
        if let Some(id) = get_line_patterns()
            .vlanif
            .captures(name)
            .and_then(|c| c.get(1))
        {
            record.vlan = Some(id.as_str().to_string());
        }
        OpenBlock {
            record,
            trunk_buffer: Vec::new(),
        }
    }

    /// Normalize pending trunk text and add it to the block's set.
    fn flush_trunk(&mut self) {
        if self.trunk_buffer.is_empty() {
            return;
        }
        let vlans: AllowedVlans = normalize_vlans(&self.trunk_buffer.join(" "));
        log::trace!(
            "{}: flushed {} trunk line(s) -> {}",
            self.record.name,
            self.trunk_buffer.len(),
            vlans
        );
        self.record.allowed_vlans.merge(vlans);
        self.trunk_buffer.clear();
    }

    fn finish(mut self) -> InterfaceRecord {
        self.flush_trunk();
        self.record
    }
}

/// Line-by-line interface scanner.
///
/// Feed lines with [`InterfaceScanner::feed`], then call
/// [`InterfaceScanner::finish`] to get the records in source order.
#[derive(Debug, Default)]
pub struct InterfaceScanner {
    current: Option<OpenBlock>,
    records: Vec<InterfaceRecord>,
}

impl InterfaceScanner {
    pub fn new() -> InterfaceScanner {
        InterfaceScanner::default()
    }

    pub fn feed(&mut self, raw_line: &str) {
        let line = raw_line.trim();
        let kind = classify(line);

        if let Line::Interface(name) = kind {
            self.close_block();
            log::trace!("open interface {name}");
            self.current = Some(OpenBlock::new(name));
            return;
        }

        // Nothing before the first interface line matters
        let Some(block) = self.current.as_mut() else {
            return;
        };

        if let Line::TrunkAllow(rest) = kind {
            block.trunk_buffer.push(rest.to_string());
            return;
        }

        // Any other line ends a run of trunk lines
        block.flush_trunk();

        let record = &mut block.record;
        match kind {
            Line::Description(text) => record.description = Some(text.to_string()),
            Line::Dot1q(id) => record.vlan = Some(id.to_string()),
            Line::Ipv4 { addr, mask } => record.ipv4 = Some(format!("{addr} {mask}")),
            Line::Ipv6(addr) => record.ipv6 = Some(addr.to_string()),
            Line::PortType(port_type) => record.port_type = Some(port_type.to_string()),
            Line::Interface(_) | Line::TrunkAllow(_) | Line::Other => {}
        }
    }

    /// Close the open block, if any, and return all records.
    pub fn finish(mut self) -> Vec<InterfaceRecord> {
        self.close_block();
        self.records
    }

    fn close_block(&mut self) {
        if let Some(block) = self.current.take() {
            let record = block.finish();
            log::debug!("interface {} done: {:?}", record.name, record);
            self.records.push(record);
        }
    }
}

/// Extract one [`InterfaceRecord`] per `interface` line, in source order.
pub fn extract_interfaces<I, S>(lines: I) -> Vec<InterfaceRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut scanner = InterfaceScanner::new();
    for line in lines {
        scanner.feed(line.as_ref());
    }
    let records = scanner.finish();
    log::info!("Extracted {} interface(s)", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(text: &str) -> Vec<InterfaceRecord> {
        extract_interfaces(text.lines())
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(
            classify("interface GigabitEthernet0/0/1"),
            Line::Interface("GigabitEthernet0/0/1")
        );
        assert_eq!(
            classify("port trunk allow-pass vlan 10 to 20"),
            Line::TrunkAllow("10 to 20")
        );
        assert_eq!(classify("description  to core "), Line::Description("to core"));
        assert_eq!(classify("vlan-type dot1q 300"), Line::Dot1q("300"));
        assert_eq!(
            classify("ip address 10.1.1.1 255.255.255.252"),
            Line::Ipv4 {
                addr: "10.1.1.1",
                mask: "255.255.255.252"
            }
        );
        assert_eq!(classify("ipv6 address 2001:db8::1/64"), Line::Ipv6("2001:db8::1/64"));
        assert_eq!(classify("port link-type access"), Line::PortType("access"));
        assert_eq!(classify("undo shutdown"), Line::Other);
        assert_eq!(classify("#"), Line::Other);
    }

    #[test]
    fn test_ipv4_mask_after_extra_spaces() {
        assert_eq!(
            classify("ip address 10.0.0.1  255.255.255.0"),
            Line::Ipv4 {
                addr: "10.0.0.1",
                mask: "255.255.255.0"
            }
        );
        let records = extract("interface Vlanif7\n ip address 10.7.0.1   255.255.0.0 sub\n");
        assert_eq!(records[0].ipv4.as_deref(), Some("10.7.0.1 255.255.0.0"));
    }

    #[test]
    fn test_description_wins_over_embedded_fields() {
        // A description mentioning an address is still just a description
        assert_eq!(
            classify("description ip address 1.1.1.1 255.0.0.0"),
            Line::Description("ip address 1.1.1.1 255.0.0.0")
        );
    }

    #[test]
    fn test_interface_must_start_line() {
        assert_eq!(classify("undo interface Vlanif5"), Line::Other);
    }

    #[test]
    fn test_end_to_end_scenario() {
        let records = extract(
            "interface Vlanif100\n\
             description Uplink\n\
             ip address 10.0.0.1 255.255.255.0\n\
             interface GigabitEthernet0/0/1\n\
             port link-type trunk\n\
             port trunk allow-pass vlan 10 to 12 20\n",
        );
        assert_eq!(records.len(), 2);

        let vlanif = &records[0];
        assert_eq!(vlanif.name, "Vlanif100");
        assert_eq!(vlanif.description.as_deref(), Some("Uplink"));
        assert_eq!(vlanif.vlan.as_deref(), Some("100"));
        assert_eq!(vlanif.ipv4.as_deref(), Some("10.0.0.1 255.255.255.0"));
        assert_eq!(vlanif.ipv6, None);
        assert_eq!(vlanif.port_type, None);
        assert_eq!(vlanif.allowed_vlans.to_string(), "");

        let gi = &records[1];
        assert_eq!(gi.name, "GigabitEthernet0/0/1");
        assert_eq!(gi.port_type.as_deref(), Some("trunk"));
        assert_eq!(gi.allowed_vlans.to_string(), "10 to 12, 20");
        assert_eq!(gi.description, None);
        assert_eq!(gi.vlan, None);
        assert_eq!(gi.ipv4, None);
    }

    #[test]
    fn test_indented_lines() {
        let records = extract(
            "interface GigabitEthernet0/0/2\n \
             description  Server rack 4  \n \
             port link-type access\n",
        );
        assert_eq!(records[0].description.as_deref(), Some("Server rack 4"));
        assert_eq!(records[0].port_type.as_deref(), Some("access"));
    }

    #[test]
    fn test_lines_before_first_interface_ignored() {
        let records = extract(
            "sysname core-sw\n\
             description stray\n\
             port trunk allow-pass vlan 5\n\
             interface Eth-Trunk1\n",
        );
        assert_eq!(records.len(), 1);
        assert!(records[0].is_bare(), "Got {:?}", records[0]);
    }

    #[test]
    fn test_boundary_count_and_order() {
        let records = extract(
            "interface A\ninterface B\n#\ninterface A\nundo shutdown\ninterface C\n",
        );
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "A", "C"], "No merging or reordering");
    }

    #[test]
    fn test_empty_block() {
        let records = extract("interface NULL0\ninterface LoopBack0\n");
        assert_eq!(records[0], InterfaceRecord::new("NULL0"));
        assert_eq!(records[0].allowed_vlans.to_string(), "");
    }

    #[test]
    fn test_no_interfaces() {
        assert!(extract("").is_empty());
        assert!(extract("sysname x\nvlan batch 10 20\n").is_empty());
    }

    // Later lines of the same kind overwrite earlier ones within a block.
    #[test]
    fn test_last_description_wins() {
        let records = extract("interface A\ndescription first\ndescription second\n");
        assert_eq!(records[0].description.as_deref(), Some("second"));
    }

    #[test]
    fn test_last_port_type_wins() {
        let records = extract("interface A\nport link-type access\nport link-type hybrid\n");
        assert_eq!(records[0].port_type.as_deref(), Some("hybrid"));
    }

    #[test]
    fn test_dot1q_overrides_vlanif() {
        let records = extract("interface Vlanif100\nvlan-type dot1q 200\n");
        assert_eq!(records[0].vlan.as_deref(), Some("200"));
    }

    #[test]
    fn test_subinterface_dot1q() {
        let records = extract("interface GigabitEthernet0/0/1.30\n vlan-type dot1q 30\n");
        assert_eq!(records[0].vlan.as_deref(), Some("30"));
    }

    #[test]
    fn test_fields_reset_between_blocks() {
        let records = extract(
            "interface Vlanif10\ndescription mgmt\nipv6 address FC00::1/64\n\
             interface GigabitEthernet0/0/3\n",
        );
        assert_eq!(records[0].ipv6.as_deref(), Some("FC00::1/64"));
        assert!(records[1].is_bare(), "Got {:?}", records[1]);
    }

    #[test]
    fn test_trunk_lines_wrap() {
        let records = extract(
            "interface Eth-Trunk1\n\
             port trunk allow-pass vlan 10 to 20 30\n\
             port trunk allow-pass vlan 40 50 to 60\n\
             interface Eth-Trunk2\n",
        );
        assert_eq!(records[0].allowed_vlans.to_string(), "10 to 20, 30, 40, 50 to 60");
    }

    #[test]
    fn test_trunk_accumulates_across_interruption() {
        let records = extract(
            "interface Eth-Trunk1\n\
             port trunk allow-pass vlan 10 20\n\
             description X\n\
             port trunk allow-pass vlan 30\n",
        );
        let vlans = &records[0].allowed_vlans;
        assert!(vlans.contains("10"));
        assert!(vlans.contains("20"));
        assert!(vlans.contains("30"));
        assert_eq!(records[0].description.as_deref(), Some("X"));
    }

    #[test]
    fn test_trunk_flushed_by_unrecognized_line() {
        let records = extract(
            "interface Eth-Trunk1\n\
             port trunk allow-pass vlan 10\n\
             undo port trunk allow-pass vlan 1\n\
             port trunk allow-pass vlan 10 11\n",
        );
        assert_eq!(records[0].allowed_vlans.to_string(), "10, 11");
    }

    #[test]
    fn test_deterministic() {
        let text = "interface Eth-Trunk1\nport trunk allow-pass vlan 9 8 7 to 9\n\
                    interface Vlanif9\ndescription x\n";
        assert_eq!(extract(text), extract(text));
    }

    #[test]
    fn test_scanner_feed() {
        let mut scanner = InterfaceScanner::new();
        scanner.feed("interface Vlanif20");
        scanner.feed("ip address 192.168.20.1 255.255.255.0");
        let records = scanner.finish();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].vlan.as_deref(), Some("20"));
        assert_eq!(records[0].ipv4.as_deref(), Some("192.168.20.1 255.255.255.0"));
    }
}
