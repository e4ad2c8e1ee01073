//! Compatibility rules engine.
//!
//! Evaluates [`HostFacts`] against a release [`RuleSet`] to produce a
//! [`Verdict`], the supported/unsupported decision plus the ordered
//! evidence trail, one entry per rule. Rules are data: evaluation has no
//! side effects on the facts or on other rules' outcomes, so the verdict is
//! a pure function of its inputs.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::facts::HostFacts;
use crate::release::Release;
use crate::tables::table_contains;
use crate::version::OsVersion;

/// A single named predicate over [`HostFacts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupportRule {
    /// Board id must appear in the release allowlist. Under
    /// [`Composition::AllOf`] a virtual machine passes this rule outright.
    BoardId,
    /// Model id must not appear in the release denylist (default-allow).
    Model,
    /// Installed physical memory must meet the release minimum.
    Memory,
    /// CPU must report 64-bit capability.
    Cpu64Bit,
    /// OS version must fall inside the release window.
    SystemVersion,
}

impl SupportRule {
    /// Column label used in the evidence trail.
    pub fn label(&self) -> &'static str {
        match self {
            SupportRule::BoardId => "Board ID",
            SupportRule::Model => "Model",
            SupportRule::Memory => "Memory",
            SupportRule::Cpu64Bit => "CPU",
            SupportRule::SystemVersion => "System",
        }
    }
}

/// How a release combines its rules into a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Composition {
    /// Every rule must pass. Virtual machines are exempt from the board-id
    /// rule only; the remaining rules still apply.
    AllOf,
    /// A virtual machine is supported unconditionally; otherwise every rule
    /// must pass, with no virtual-machine exemption inside the board-id
    /// rule.
    VirtualMachineOverride,
}

/// Version window for the system-version rule.
///
/// `min` is always inclusive. `max` is exclusive unless `max_inclusive` is
/// set (the 10.8 installer accepts 10.8 itself as a source system).
#[derive(Debug, Clone)]
pub struct VersionWindow {
    pub min: OsVersion,
    pub max: OsVersion,
    pub max_inclusive: bool,
}

impl VersionWindow {
    fn contains(&self, version: &OsVersion) -> bool {
        if version < &self.min {
            return false;
        }
        if self.max_inclusive {
            version <= &self.max
        } else {
            version < &self.max
        }
    }
}

/// One release's rules plus its constant tables.
#[derive(Debug, Clone)]
pub struct RuleSet {
    pub release: Release,
    pub composition: Composition,
    /// Rules in evaluation (and evidence) order.
    pub rules: Vec<SupportRule>,
    /// Sorted allowlist of supported board ids.
    pub board_id_allowlist: &'static [&'static str],
    /// Sorted denylist of unsupported model ids (empty when the release has
    /// no model rule).
    pub model_denylist: &'static [&'static str],
    pub window: VersionWindow,
    pub minimum_memory_bytes: u64,
}

/// Outcome of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleOutcome {
    Pass,
    Fail,
}

impl fmt::Display for RuleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleOutcome::Pass => write!(f, "OK"),
            RuleOutcome::Fail => write!(f, "Failed"),
        }
    }
}

/// One entry in the evidence trail.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evidence {
    pub rule: SupportRule,
    /// Human-readable value description ("8 GB physical memory installed").
    pub status: String,
    pub outcome: RuleOutcome,
}

/// The evaluator's final decision with its supporting evidence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Verdict {
    pub supported: bool,
    /// One entry per evaluated rule, in evaluation order.
    pub evidence: Vec<Evidence>,
}

/// Evaluate host facts against a release rule set.
///
/// Every rule in the set is checked and contributes evidence, even when the
/// verdict is already decided; operators read the full trail, not just the
/// first failure.
pub fn evaluate(rule_set: &RuleSet, facts: &HostFacts) -> Verdict {
    let mut evidence = Vec::with_capacity(rule_set.rules.len() + 1);
    let mut all_passed = true;

    for rule in &rule_set.rules {
        let entry = check_rule(*rule, rule_set, facts);
        debug!(
            event = "gate.rule",
            release = %rule_set.release,
            rule = ?rule,
            outcome = %entry.outcome,
            status = %entry.status,
        );
        if entry.outcome == RuleOutcome::Fail {
            all_passed = false;
        }
        evidence.push(entry);
    }

    let supported = match rule_set.composition {
        Composition::AllOf => all_passed,
        Composition::VirtualMachineOverride => {
            if facts.virtual_machine {
                evidence.push(Evidence {
                    rule: SupportRule::BoardId,
                    status: "Virtual machine".to_string(),
                    outcome: RuleOutcome::Pass,
                });
                true
            } else {
                all_passed
            }
        }
    };

    debug!(
        event = "gate.verdict",
        release = %rule_set.release,
        supported = supported,
    );

    Verdict { supported, evidence }
}

fn check_rule(rule: SupportRule, rule_set: &RuleSet, facts: &HostFacts) -> Evidence {
    match rule {
        SupportRule::BoardId => check_board_id(rule_set, facts),
        SupportRule::Model => check_model(rule_set, facts),
        SupportRule::Memory => check_memory(rule_set, facts),
        SupportRule::Cpu64Bit => check_cpu(facts),
        SupportRule::SystemVersion => check_system_version(rule_set, facts),
    }
}

fn check_board_id(rule_set: &RuleSet, facts: &HostFacts) -> Evidence {
    // The allowlist-shaped installers accept virtual machines in place of a
    // known board id; the override composition already handled VMs at the
    // top level, so no exemption applies here.
    if rule_set.composition == Composition::AllOf && facts.virtual_machine {
        return Evidence {
            rule: SupportRule::BoardId,
            status: "Virtual machine".to_string(),
            outcome: RuleOutcome::Pass,
        };
    }

    match facts.board_id.as_deref() {
        Some(id) if table_contains(rule_set.board_id_allowlist, id) => Evidence {
            rule: SupportRule::BoardId,
            status: id.to_string(),
            outcome: RuleOutcome::Pass,
        },
        Some(id) => Evidence {
            rule: SupportRule::BoardId,
            status: format!("\"{id}\" is not supported"),
            outcome: RuleOutcome::Fail,
        },
        None => Evidence {
            rule: SupportRule::BoardId,
            status: "board id not available".to_string(),
            outcome: RuleOutcome::Fail,
        },
    }
}

fn check_model(rule_set: &RuleSet, facts: &HostFacts) -> Evidence {
    let model = facts.model_id.as_str();
    if model.is_empty() {
        return Evidence {
            rule: SupportRule::Model,
            status: "model identifier not available".to_string(),
            outcome: RuleOutcome::Fail,
        };
    }
    if table_contains(rule_set.model_denylist, model) {
        Evidence {
            rule: SupportRule::Model,
            status: format!("\"{model}\" is not supported"),
            outcome: RuleOutcome::Fail,
        }
    } else {
        Evidence {
            rule: SupportRule::Model,
            status: model.to_string(),
            outcome: RuleOutcome::Pass,
        }
    }
}

fn check_memory(rule_set: &RuleSet, facts: &HostFacts) -> Evidence {
    const GIB: u64 = 1024 * 1024 * 1024;
    let installed_gb = facts.physical_memory_bytes / GIB;
    if facts.physical_memory_bytes >= rule_set.minimum_memory_bytes {
        Evidence {
            rule: SupportRule::Memory,
            status: format!("{installed_gb} GB physical memory installed"),
            outcome: RuleOutcome::Pass,
        }
    } else {
        let required_gb = rule_set.minimum_memory_bytes / GIB;
        Evidence {
            rule: SupportRule::Memory,
            status: format!("{installed_gb} GB installed, {required_gb} GB required"),
            outcome: RuleOutcome::Fail,
        }
    }
}

fn check_cpu(facts: &HostFacts) -> Evidence {
    if facts.cpu_64bit_capable {
        Evidence {
            rule: SupportRule::Cpu64Bit,
            status: "64 bit capable".to_string(),
            outcome: RuleOutcome::Pass,
        }
    } else {
        Evidence {
            rule: SupportRule::Cpu64Bit,
            status: "not 64 bit capable".to_string(),
            outcome: RuleOutcome::Fail,
        }
    }
}

fn check_system_version(rule_set: &RuleSet, facts: &HostFacts) -> Evidence {
    let version = &facts.os_product_version;
    let outcome = if rule_set.window.contains(version) {
        RuleOutcome::Pass
    } else {
        RuleOutcome::Fail
    };
    Evidence {
        rule: SupportRule::SystemVersion,
        status: format!("{} {}", facts.os_product_name, version),
        outcome,
    }
}
