use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six instance lifecycle actions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OperationKind {
    Info,
    EnableMonitoring,
    DisableMonitoring,
    Start,
    Stop,
    Reboot,
}

impl OperationKind {
    /// Every kind, in the order batch mode executes them.
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Info,
        OperationKind::EnableMonitoring,
        OperationKind::DisableMonitoring,
        OperationKind::Start,
        OperationKind::Stop,
        OperationKind::Reboot,
    ];

    /// Whether the operation targets a single instance.
    #[must_use]
    pub fn requires_instance_id(self) -> bool {
        !matches!(self, OperationKind::Info)
    }

    /// Short operator-facing label, used by the menu.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            OperationKind::Info => "Get EC2 information",
            OperationKind::EnableMonitoring => "Enable detailed monitoring",
            OperationKind::DisableMonitoring => "Disable detailed monitoring",
            OperationKind::Start => "Start instance",
            OperationKind::Stop => "Stop instance",
            OperationKind::Reboot => "Reboot instance",
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OperationKind::Info => "info",
            OperationKind::EnableMonitoring => "monitor",
            OperationKind::DisableMonitoring => "unmonitor",
            OperationKind::Start => "start",
            OperationKind::Stop => "stop",
            OperationKind::Reboot => "reboot",
        };
        f.write_str(name)
    }
}

/// Batch (flag-driven) or interactive (menu loop) execution.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    Batch,
    Interactive,
}

impl ExecutionMode {
    /// Failures end the process in batch mode only.
    #[must_use]
    pub fn failure_is_fatal(self) -> bool {
        matches!(self, ExecutionMode::Batch)
    }
}

/// Audit log category. Each maps to one `<name>.log` file.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogCategory {
    InstanceState,
    Monitoring,
    Error,
}

impl LogCategory {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            LogCategory::InstanceState => "instance_state",
            LogCategory::Monitoring => "monitoring",
            LogCategory::Error => "error",
        }
    }

    /// File name of the backing log, e.g. `monitoring.log`.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.log", self.name())
    }
}

impl fmt::Display for LogCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalized provider state, covering both instance states and
/// detailed-monitoring states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum StateToken {
    Pending,
    Running,
    ShuttingDown,
    Terminated,
    Stopping,
    Stopped,
    Enabled,
    Disabling,
    Disabled,
    #[serde(other)]
    Unknown,
}

impl StateToken {
    /// Normalize a raw provider state name. Case and surrounding
    /// whitespace are ignored; anything unrecognized is `Unknown`.
    #[must_use]
    pub fn from_name(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => StateToken::Pending,
            "running" => StateToken::Running,
            "shutting-down" => StateToken::ShuttingDown,
            "terminated" => StateToken::Terminated,
            "stopping" => StateToken::Stopping,
            "stopped" => StateToken::Stopped,
            "enabled" => StateToken::Enabled,
            "disabling" => StateToken::Disabling,
            "disabled" => StateToken::Disabled,
            _ => StateToken::Unknown,
        }
    }
}
