//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::PathBuf;
use std::process::Output;

use anyhow::Result;
use ec2ops_common::LogCategory;
use serde_json::Value;

use crate::domain::{Ec2OpsConfig, LogEntry, ProviderFault, StorageError};

// ── Compute Provider Port ─────────────────────────────────────────────────────

/// Instance lifecycle calls against the compute API.
///
/// Every call either returns the provider's JSON response or a typed fault.
#[allow(async_fn_in_trait)]
pub trait ComputeProvider {
    /// Fetch the full instance inventory.
    async fn describe_instances(&self) -> Result<Value, ProviderFault>;
    async fn start_instances(&self, instance_id: &str) -> Result<Value, ProviderFault>;
    async fn stop_instances(&self, instance_id: &str) -> Result<Value, ProviderFault>;
    async fn reboot_instances(&self, instance_id: &str) -> Result<Value, ProviderFault>;
    /// Enable detailed monitoring.
    async fn monitor_instances(&self, instance_id: &str) -> Result<Value, ProviderFault>;
    /// Disable detailed monitoring.
    async fn unmonitor_instances(&self, instance_id: &str) -> Result<Value, ProviderFault>;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

// ── Audit Storage Port ────────────────────────────────────────────────────────

/// Persists category logs and the inventory snapshot.
pub trait AuditStore {
    /// Prepend `entry` to the category's log, creating the log if needed.
    fn append(&self, category: LogCategory, entry: &LogEntry) -> Result<(), StorageError>;
    /// Replace the inventory snapshot, returning where it was written.
    fn write_snapshot(&self, inventory: &Value) -> Result<PathBuf, StorageError>;
    /// Display location of a category log, used in status messages.
    fn location(&self, category: LogCategory) -> String;
}

// ── Operator Input Port ───────────────────────────────────────────────────────

/// Blocking line input (menu choices, instance IDs).
#[allow(async_fn_in_trait)]
pub trait LineSource {
    /// Show `prompt` and read one line. `Ok(None)` means input is closed.
    async fn read_line(&self, prompt: &str) -> Result<Option<String>>;
}

// ── Reporting Port ────────────────────────────────────────────────────────────

/// Handle on a running status indicator.
pub trait StatusIndicator {
    /// Stop and clear the indicator. Safe to call more than once.
    fn stop(&self);
}

/// Abstracts operator-facing output so services can emit events without
/// depending on the Presentation layer. Sync trait.
pub trait Reporter {
    /// Start a status indicator for a call in flight.
    fn begin(&self, message: &str) -> Box<dyn StatusIndicator + '_>;
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a failure message. Never suppressed.
    fn failure(&self, message: &str);
    /// Emit a warning message.
    fn warn(&self, message: &str);
    /// Emit an informational message.
    fn info(&self, message: &str);
    /// Display the numbered menu.
    fn menu(&self, entries: &[(usize, &str)]);
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Loads the persisted configuration.
pub trait ConfigStore {
    /// Load configuration, returning defaults when no file exists.
    fn load(&self) -> Result<Ec2OpsConfig>;
    /// Location of the configuration file.
    fn path(&self) -> Result<PathBuf>;
}
