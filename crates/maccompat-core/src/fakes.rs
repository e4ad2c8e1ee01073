//! In-memory fakes for the host-facts provider (testing only)
//!
//! Provides `StaticFactsProvider` and `UnavailableFactsProvider` that
//! satisfy the [`HostFactsProvider`] contract without touching real
//! hardware.

use crate::error::{CompatError, Result};
use crate::facts::{HostFacts, HostFactsProvider};

/// Provider that returns the same canned facts on every call.
#[derive(Debug, Clone)]
pub struct StaticFactsProvider {
    facts: HostFacts,
}

impl StaticFactsProvider {
    pub fn new(facts: HostFacts) -> Self {
        Self { facts }
    }
}

impl HostFactsProvider for StaticFactsProvider {
    fn current(&self) -> Result<HostFacts> {
        Ok(self.facts.clone())
    }
}

/// Provider that always fails, for exercising error paths.
#[derive(Debug, Clone, Default)]
pub struct UnavailableFactsProvider;

impl HostFactsProvider for UnavailableFactsProvider {
    fn current(&self) -> Result<HostFacts> {
        Err(CompatError::FactsUnavailable {
            query: "fake".to_string(),
            reason: "provider configured to fail".to_string(),
        })
    }
}
