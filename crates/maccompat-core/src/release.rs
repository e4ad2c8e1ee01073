//! Target releases and their rule sets.
//!
//! Each release differs only in threshold values, lookup tables, and rule
//! composition; the evaluation algorithm in [`crate::rules`] is shared.
//! The installers embed two distinct eligibility shapes: an allowlist of
//! known-good hardware with every check required (Mountain Lion, Mavericks,
//! Yosemite), and a model denylist with a top-level virtual-machine
//! exemption (High Sierra). The gate reproduces each shape faithfully
//! rather than unifying them; unifying would change behavior for real
//! hardware.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rules::{Composition, RuleSet, SupportRule, VersionWindow};
use crate::tables;
use crate::version::OsVersion;

/// Minimum physical memory for the allowlist-shaped releases: 2 GiB.
const MINIMUM_MEMORY_BYTES: u64 = 2 * 1024 * 1024 * 1024;

/// A macOS release the gate can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Release {
    /// OS X 10.8 Mountain Lion.
    MountainLion,
    /// OS X 10.9 Mavericks.
    Mavericks,
    /// OS X 10.10 Yosemite.
    Yosemite,
    /// macOS 10.13 High Sierra.
    HighSierra,
}

impl Release {
    /// All releases the gate knows about, oldest first.
    pub const ALL: [Release; 4] = [
        Release::MountainLion,
        Release::Mavericks,
        Release::Yosemite,
        Release::HighSierra,
    ];

    /// Marketing name, for evidence and log lines.
    pub fn display_name(&self) -> &'static str {
        match self {
            Release::MountainLion => "OS X 10.8 Mountain Lion",
            Release::Mavericks => "OS X 10.9 Mavericks",
            Release::Yosemite => "OS X 10.10 Yosemite",
            Release::HighSierra => "macOS 10.13 High Sierra",
        }
    }

    /// CLI-facing identifier, also the serde rename.
    pub fn slug(&self) -> &'static str {
        match self {
            Release::MountainLion => "mountain-lion",
            Release::Mavericks => "mavericks",
            Release::Yosemite => "yosemite",
            Release::HighSierra => "high-sierra",
        }
    }

    /// Key written into the deployment tool's conditional-items store.
    pub fn conditional_item_key(&self) -> &'static str {
        match self {
            Release::MountainLion => "mountainlion_supported",
            Release::Mavericks => "mavericks_supported",
            Release::Yosemite => "yosemite_supported",
            Release::HighSierra => "high_sierra_supported",
        }
    }

    /// Build this release's rule set: composition, check order, tables, and
    /// thresholds.
    pub fn rule_set(&self) -> RuleSet {
        match self {
            Release::MountainLion => RuleSet {
                release: *self,
                composition: Composition::AllOf,
                rules: vec![
                    SupportRule::BoardId,
                    SupportRule::Memory,
                    SupportRule::Cpu64Bit,
                    SupportRule::SystemVersion,
                ],
                board_id_allowlist: tables::MOUNTAIN_LION_BOARD_IDS,
                model_denylist: &[],
                // The 10.8 installer accepts 10.8 itself as a source system.
                window: VersionWindow {
                    min: OsVersion::from_components([10, 6, 6]),
                    max: OsVersion::from_components([10, 8]),
                    max_inclusive: true,
                },
                minimum_memory_bytes: MINIMUM_MEMORY_BYTES,
            },
            Release::Mavericks => RuleSet {
                release: *self,
                composition: Composition::AllOf,
                rules: vec![
                    SupportRule::BoardId,
                    SupportRule::Memory,
                    SupportRule::Cpu64Bit,
                    SupportRule::SystemVersion,
                ],
                board_id_allowlist: tables::MAVERICKS_BOARD_IDS,
                model_denylist: &[],
                window: VersionWindow {
                    min: OsVersion::from_components([10, 6, 6]),
                    max: OsVersion::from_components([10, 9]),
                    max_inclusive: false,
                },
                minimum_memory_bytes: MINIMUM_MEMORY_BYTES,
            },
            Release::Yosemite => RuleSet {
                release: *self,
                composition: Composition::AllOf,
                rules: vec![
                    SupportRule::BoardId,
                    SupportRule::Memory,
                    SupportRule::Cpu64Bit,
                    SupportRule::SystemVersion,
                ],
                board_id_allowlist: tables::YOSEMITE_BOARD_IDS,
                model_denylist: &[],
                window: VersionWindow {
                    min: OsVersion::from_components([10, 6, 6]),
                    max: OsVersion::from_components([10, 10]),
                    max_inclusive: false,
                },
                minimum_memory_bytes: MINIMUM_MEMORY_BYTES,
            },
            Release::HighSierra => RuleSet {
                release: *self,
                composition: Composition::VirtualMachineOverride,
                rules: vec![
                    SupportRule::Model,
                    SupportRule::BoardId,
                    SupportRule::SystemVersion,
                ],
                board_id_allowlist: tables::HIGH_SIERRA_BOARD_IDS,
                model_denylist: tables::HIGH_SIERRA_MODEL_DENYLIST,
                window: VersionWindow {
                    min: OsVersion::from_components([10, 8]),
                    max: OsVersion::from_components([10, 13]),
                    max_inclusive: false,
                },
                minimum_memory_bytes: 0,
            },
        }
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl FromStr for Release {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mountain-lion" => Ok(Release::MountainLion),
            "mavericks" => Ok(Release::Mavericks),
            "yosemite" => Ok(Release::Yosemite),
            "high-sierra" => Ok(Release::HighSierra),
            other => Err(format!(
                "unknown release '{other}' (expected one of: mountain-lion, mavericks, yosemite, high-sierra)"
            )),
        }
    }
}
