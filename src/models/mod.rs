//! Domain models for the interface summary.
//!
//! - [`InterfaceRecord`] - one interface block
//! - [`AllowedVlans`] - normalized trunk VLAN set

mod interface;
mod vlan;

pub use interface::InterfaceRecord;
pub use vlan::AllowedVlans;
