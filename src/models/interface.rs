//! Interface record extracted from a configuration dump.

use super::AllowedVlans;

/// One `interface <name>` block of the configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterfaceRecord {
    /// Name as written after the `interface` keyword.
    pub name: String,
    /// Remainder of the last `description` line.
    pub description: Option<String>,
    /// From a `Vlanif<N>` name, overridden by `vlan-type dot1q <N>`.
    pub vlan: Option<String>,
    /// `"<addr> <mask>"` from `ip address`.
    pub ipv4: Option<String>,
    /// `"<addr>/<prefix>"` from `ipv6 address`.
    pub ipv6: Option<String>,
    /// Operand of `port link-type`.
    pub port_type: Option<String>,
    /// Union of every `port trunk allow-pass vlan` line in the block.
    pub allowed_vlans: AllowedVlans,
}

impl InterfaceRecord {
    pub fn new<S: Into<String>>(name: S) -> InterfaceRecord {
        InterfaceRecord {
            name: name.into(),
            ..Default::default()
        }
    }

    /// True when nothing but the name was found.
    pub fn is_bare(&self) -> bool {
        self.description.is_none()
            && self.vlan.is_none()
            && self.ipv4.is_none()
            && self.ipv6.is_none()
            && self.port_type.is_none()
            && self.allowed_vlans.is_empty()
    }
}
