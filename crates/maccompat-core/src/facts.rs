//! Host fact model and the provider seam.
//!
//! The evaluator never performs raw system queries itself; it consumes a
//! [`HostFacts`] snapshot produced by a [`HostFactsProvider`]. The real
//! macOS provider lives in [`crate::system`]; in-memory fakes for tests and
//! embedders live in [`crate::fakes`].

use crate::error::Result;
use crate::version::OsVersion;

/// Immutable snapshot of the facts the gate evaluates.
///
/// Captured once per run and never mutated. `os_product_name` is carried
/// only for the evidence line ("Mac OS X 10.9.5"); no rule reads it.
#[derive(Debug, Clone, PartialEq)]
pub struct HostFacts {
    /// Firmware board identifier ("Mac-F2268DC8"), if the device tree
    /// exposes one with the expected platform prefix.
    pub board_id: Option<String>,
    /// Hardware model identifier ("MacBookPro5,1"). Empty when the query
    /// returned nothing; an empty model fails the model rule.
    pub model_id: String,
    /// Whether the CPU reports 64-bit capability.
    pub cpu_64bit_capable: bool,
    /// Installed physical memory in bytes.
    pub physical_memory_bytes: u64,
    /// OS product name ("Mac OS X", "macOS").
    pub os_product_name: String,
    /// Current OS product version.
    pub os_product_version: OsVersion,
    /// Whether the CPU feature flags identify a virtual machine.
    pub virtual_machine: bool,
}

/// Source of the current host's facts.
///
/// Implementations fail with [`crate::error::CompatError::FactsUnavailable`]
/// when any required low-level query cannot be completed; the caller decides
/// whether that is fatal.
pub trait HostFactsProvider {
    /// Gather a fresh snapshot of the current host's facts.
    fn current(&self) -> Result<HostFacts>;
}
