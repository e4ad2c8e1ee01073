//! Conditional-items store for the deployment tool integration.
//!
//! The deployment tool reads per-machine boolean facts from a mapping file
//! in its managed-installs directory. The gate merges one
//! `{release}_supported` key into that file without disturbing any other
//! keys: load the existing mapping if present, overwrite/insert the one
//! key, write the whole mapping back.
//!
//! A persistence failure is surfaced to the caller but must never change
//! the computed verdict or the process exit code.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::error::{CompatError, Result};
use crate::system::command_stdout;

/// Preferences file holding the deployment tool's settings.
pub const MANAGED_INSTALLS_PREFS: &str = "/Library/Preferences/ManagedInstalls";
/// Preference key naming the managed-installs directory.
pub const MANAGED_INSTALL_DIR_KEY: &str = "ManagedInstallDir";
/// Fallback managed-installs directory when the preference is unset.
pub const DEFAULT_MANAGED_INSTALLS_DIR: &str = "/Library/Managed Installs";
/// File name of the conditional-items mapping inside the directory.
pub const CONDITIONAL_ITEMS_FILE: &str = "ConditionalItems.json";

/// Package ids whose presence marks the deployment tool as installed.
const DEPLOYMENT_TOOL_PACKAGE_IDS: &[&str] = &[
    "com.googlecode.munki.core",
    "com.mac-msp.gruntwork.munki3",
];

/// Read-merge-write store for the conditional-items mapping file.
#[derive(Debug, Clone)]
pub struct ConditionalItemsStore {
    path: PathBuf,
}

impl ConditionalItemsStore {
    /// Store at an explicit path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Discover the store location from the deployment tool's preferences,
    /// falling back to the default managed-installs directory.
    pub fn discover(timeout: Duration) -> Self {
        let dir = match command_stdout(
            "defaults",
            &["read", MANAGED_INSTALLS_PREFS, MANAGED_INSTALL_DIR_KEY],
            timeout,
        ) {
            Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => PathBuf::from(DEFAULT_MANAGED_INSTALLS_DIR),
        };
        Self {
            path: dir.join(CONDITIONAL_ITEMS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge one boolean flag into the mapping.
    ///
    /// Existing unrelated keys are preserved untouched; an existing entry
    /// for `key` is overwritten. The file is created when absent.
    pub fn merge_flag(&self, key: &str, value: bool) -> Result<()> {
        let mut mapping = self.load()?;
        mapping.insert(key.to_string(), Value::Bool(value));

        let rendered = serde_json::to_string_pretty(&Value::Object(mapping)).map_err(|e| {
            CompatError::Persistence {
                path: self.path.clone(),
                reason: e.to_string(),
            }
        })?;
        std::fs::write(&self.path, rendered + "\n").map_err(|e| CompatError::Persistence {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        info!(event = "conditional.merged", path = %self.path.display(), key = %key, value = value);
        Ok(())
    }

    fn load(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            debug!(event = "conditional.new_store", path = %self.path.display());
            return Ok(Map::new());
        }
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| CompatError::Persistence {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| CompatError::Persistence {
                path: self.path.clone(),
                reason: format!("existing store is not valid JSON: {e}"),
            })?;
        match parsed {
            Value::Object(mapping) => Ok(mapping),
            other => Err(CompatError::Persistence {
                path: self.path.clone(),
                reason: format!("existing store is not a mapping (found {})", kind_of(&other)),
            }),
        }
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Whether the deployment tool is installed on this host.
///
/// Probes the package receipt database for the known package ids.
pub fn deployment_tool_installed(timeout: Duration) -> bool {
    DEPLOYMENT_TOOL_PACKAGE_IDS
        .iter()
        .any(|id| command_stdout("pkgutil", &["--pkg-info", id], timeout).is_ok())
}
