//! macOS host fact gathering via system utilities.
//!
//! Shells out to `sw_vers`, `ioreg`, and `sysctl` to assemble a
//! [`HostFacts`] snapshot. Every call runs under a bounded timeout so a
//! hung utility fails the run instead of hanging the gate.
//!
//! Per the gate's error contract, an unreadable board id or model id is not
//! an error: those facts degrade to "absent" and fail their owning rule
//! with explicit evidence. Every other failed query is
//! [`CompatError::FactsUnavailable`].

use std::process::Command;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use tracing::warn;

use crate::error::{CompatError, Result};
use crate::facts::{HostFacts, HostFactsProvider};
use crate::version::OsVersion;

/// Default per-call deadline for external utilities.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(10);

/// Run a command and return its trimmed stdout, failing on non-zero exit,
/// spawn error, or deadline expiry.
pub(crate) fn command_stdout(program: &str, args: &[&str], timeout: Duration) -> Result<String> {
    let query = format!("{program} {}", args.join(" "));
    let program = program.to_string();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();

    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let output = Command::new(&program).args(&args).output();
        // Receiver may be gone if the deadline already expired.
        let _ = tx.send(output);
    });

    match rx.recv_timeout(timeout) {
        Ok(Ok(output)) if output.status.success() => {
            Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
        }
        Ok(Ok(output)) => {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            Err(CompatError::FactsUnavailable { query, reason })
        }
        Ok(Err(e)) => Err(CompatError::FactsUnavailable {
            query,
            reason: e.to_string(),
        }),
        Err(_) => Err(CompatError::FactsUnavailable {
            query,
            reason: format!("timed out after {}s", timeout.as_secs_f64()),
        }),
    }
}

/// [`HostFactsProvider`] backed by the macOS system utilities.
#[derive(Debug, Clone)]
pub struct SystemFactsProvider {
    timeout: Duration,
}

impl SystemFactsProvider {
    pub fn new() -> Self {
        Self {
            timeout: DEFAULT_COMMAND_TIMEOUT,
        }
    }

    /// Override the per-call deadline.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn query(&self, program: &str, args: &[&str]) -> Result<String> {
        command_stdout(program, args, self.timeout)
    }

    /// `sw_vers` product name and version. A version string that does not
    /// parse as dotted integers aborts the run.
    fn system_version(&self) -> Result<(String, OsVersion)> {
        let name = self.query("sw_vers", &["-productName"])?;
        let raw = self.query("sw_vers", &["-productVersion"])?;
        let version = OsVersion::parse(&raw)?;
        Ok((name, version))
    }

    /// The `board-id` property from the device-tree root, or `None` when it
    /// is absent, unreadable, or lacks the platform prefix.
    fn board_id(&self) -> Option<String> {
        let dump = match self.query("ioreg", &["-p", "IODeviceTree", "-r", "-n", "/", "-d", "1"]) {
            Ok(dump) => dump,
            Err(err) => {
                warn!(event = "facts.board_id_unreadable", error = %err);
                return None;
            }
        };
        let pattern = match regex::Regex::new(r#""board-id" = <"([^"]+)">"#) {
            Ok(pattern) => pattern,
            Err(err) => {
                warn!(event = "facts.board_id_unreadable", error = %err);
                return None;
            }
        };
        let captured = pattern
            .captures(&dump)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())?;
        if captured.starts_with("Mac") {
            Some(captured)
        } else {
            None
        }
    }

    /// `hw.model`, degraded to an empty string when unreadable so the model
    /// rule fails with explicit evidence instead of crashing the run.
    fn model_id(&self) -> String {
        match self.query("sysctl", &["-n", "hw.model"]) {
            Ok(model) => model,
            Err(err) => {
                warn!(event = "facts.model_unreadable", error = %err);
                String::new()
            }
        }
    }

    fn cpu_64bit_capable(&self) -> Result<bool> {
        let raw = self.query("sysctl", &["-n", "hw.cpu64bit_capable"])?;
        match raw.as_str() {
            "1" => Ok(true),
            "0" => Ok(false),
            other => Err(CompatError::FactsUnavailable {
                query: "sysctl -n hw.cpu64bit_capable".to_string(),
                reason: format!("unexpected value '{other}'"),
            }),
        }
    }

    fn physical_memory_bytes(&self) -> Result<u64> {
        let raw = self.query("sysctl", &["-n", "hw.memsize"])?;
        raw.parse::<u64>()
            .map_err(|_| CompatError::FactsUnavailable {
                query: "sysctl -n hw.memsize".to_string(),
                reason: format!("unparsable memory size '{raw}'"),
            })
    }

    /// The hypervisor sets the `VMM` CPU feature flag inside a guest.
    fn virtual_machine(&self) -> Result<bool> {
        let features = self.query("sysctl", &["-n", "machdep.cpu.features"])?;
        Ok(features.split_whitespace().any(|f| f == "VMM"))
    }
}

impl Default for SystemFactsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HostFactsProvider for SystemFactsProvider {
    fn current(&self) -> Result<HostFacts> {
        let (os_product_name, os_product_version) = self.system_version()?;
        Ok(HostFacts {
            board_id: self.board_id(),
            model_id: self.model_id(),
            cpu_64bit_capable: self.cpu_64bit_capable()?,
            physical_memory_bytes: self.physical_memory_bytes()?,
            os_product_name,
            os_product_version,
            virtual_machine: self.virtual_machine()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_stdout_trims_output() {
        let out = command_stdout("echo", &["hello"], Duration::from_secs(5)).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn command_stdout_times_out() {
        let err = command_stdout("sleep", &["5"], Duration::from_millis(100)).unwrap_err();
        match err {
            CompatError::FactsUnavailable { query, reason } => {
                assert_eq!(query, "sleep 5");
                assert!(reason.contains("timed out"), "reason: {reason}");
            }
            other => panic!("expected FactsUnavailable, got {other:?}"),
        }
    }

    #[test]
    fn command_stdout_reports_spawn_failure() {
        let err =
            command_stdout("definitely-not-a-real-binary", &[], Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, CompatError::FactsUnavailable { .. }));
    }
}
