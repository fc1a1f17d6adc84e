//! Configuration parsing.
//!
//! - [`extractor`] - interface block scanner
//! - [`vlan_range`] - trunk VLAN normalization

mod extractor;
mod vlan_range;

pub use extractor::{extract_interfaces, InterfaceScanner};
pub use vlan_range::normalize_vlans;
