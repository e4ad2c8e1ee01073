//! maccompat Core Library
//!
//! Decides whether the current machine is supported by a given macOS
//! release. Host facts (board id, model, CPU capability, memory, OS
//! version, virtual-machine flag) are gathered through the
//! [`HostFactsProvider`] seam, evaluated against a release [`RuleSet`], and
//! reported as a [`Verdict`] with a full evidence trail.

pub mod conditional;
pub mod error;
pub mod facts;
pub mod fakes;
pub mod release;
pub mod report;
pub mod rules;
pub mod system;
pub mod telemetry;
pub mod version;

mod tables;

pub use conditional::{deployment_tool_installed, ConditionalItemsStore};
pub use error::{CompatError, Result};
pub use facts::{HostFacts, HostFactsProvider};
pub use fakes::{StaticFactsProvider, UnavailableFactsProvider};
pub use release::Release;
pub use report::EvidenceReporter;
pub use rules::{
    evaluate, Composition, Evidence, RuleOutcome, RuleSet, SupportRule, Verdict, VersionWindow,
};
pub use system::SystemFactsProvider;
pub use telemetry::init_tracing;
pub use version::OsVersion;
