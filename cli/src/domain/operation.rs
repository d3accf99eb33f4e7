//! Operation requests, outcomes, and the per-kind operation table.
//!
//! Pure data only. The executor reads an `OperationSpec` to know which
//! success rule to apply, where to log, and what to print.

use ec2ops_common::{ExecutionMode, LogCategory, OperationKind, StateToken};
use serde_json::Value;

use crate::domain::error::InputError;

// ── Request ───────────────────────────────────────────────────────────────────

/// A single operation to execute. The instance ID belongs to this request
/// only and is never carried over to the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationRequest {
    kind: OperationKind,
    instance_id: Option<String>,
    mode: ExecutionMode,
}

impl OperationRequest {
    /// Build a request, checking that an instance ID is present exactly when
    /// the operation needs one.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MissingInstanceId` when the kind targets an
    /// instance and no (non-blank) ID was supplied.
    pub fn new(
        kind: OperationKind,
        instance_id: Option<String>,
        mode: ExecutionMode,
    ) -> Result<Self, InputError> {
        let instance_id = if kind.requires_instance_id() {
            let id = instance_id
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .ok_or_else(|| InputError::MissingInstanceId(kind.to_string()))?;
            Some(id)
        } else {
            None
        };
        Ok(Self {
            kind,
            instance_id,
            mode,
        })
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    #[must_use]
    pub fn instance_id(&self) -> Option<&str> {
        self.instance_id.as_deref()
    }

    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }
}

// ── Outcome ───────────────────────────────────────────────────────────────────

/// Result of one executed operation. Produced once, never modified.
#[derive(Debug, Clone, PartialEq)]
pub struct OperationOutcome {
    succeeded: bool,
    message: String,
    response: Value,
}

impl OperationOutcome {
    #[must_use]
    pub fn success(message: impl Into<String>, response: Value) -> Self {
        Self {
            succeeded: true,
            message: message.into(),
            response,
        }
    }

    #[must_use]
    pub fn failure(message: impl Into<String>, response: Value) -> Self {
        Self {
            succeeded: false,
            message: message.into(),
            response,
        }
    }

    #[must_use]
    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn response(&self) -> &Value {
        &self.response
    }
}

// ── Operation table ───────────────────────────────────────────────────────────

/// How a returned response is judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessRule {
    /// At least one normalized state token must be in the set.
    StateIn(&'static [StateToken]),
    /// The call returning without a fault is the only signal available.
    NoFault,
}

/// Where a successful response goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Record {
    /// Prepend an entry to a category log.
    Log(LogCategory),
    /// Overwrite the inventory snapshot file.
    Snapshot,
}

/// Everything that differs between operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub kind: OperationKind,
    pub rule: SuccessRule,
    pub record: Record,
    /// Infinitive used in failure messages, e.g. "stop".
    pub verb: &'static str,
    /// Status indicator text; `{id}` is replaced with the instance ID.
    pub progress: &'static str,
    /// Success message; `{id}` and `{log}` are replaced.
    pub success: &'static str,
}

pub const START_STATES: &[StateToken] = &[StateToken::Pending, StateToken::Running];
pub const STOP_STATES: &[StateToken] = &[StateToken::Stopping, StateToken::Stopped];
pub const MONITOR_STATES: &[StateToken] = &[StateToken::Enabled, StateToken::Pending];
pub const UNMONITOR_STATES: &[StateToken] = &[StateToken::Disabling, StateToken::Disabled];

/// Inventory snapshot file name.
pub const INVENTORY_FILE: &str = "ec2_info.json";

/// Generic message for a response outside the expected state set.
pub const STATE_REJECTED_MESSAGE: &str = "Something went wrong. Please try again.";

impl OperationSpec {
    #[must_use]
    pub fn for_kind(kind: OperationKind) -> Self {
        match kind {
            OperationKind::Info => Self {
                kind,
                rule: SuccessRule::NoFault,
                record: Record::Snapshot,
                verb: "describe",
                progress: "Requesting EC2 information...",
                success: "Your AWS EC2 information has been saved in {log}",
            },
            OperationKind::EnableMonitoring => Self {
                kind,
                rule: SuccessRule::StateIn(MONITOR_STATES),
                record: Record::Log(LogCategory::Monitoring),
                verb: "enable monitoring on",
                progress: "Enabling detailed monitoring on {id}...",
                success: "Detailed monitoring is being enabled on {id}. Details recorded in {log}",
            },
            OperationKind::DisableMonitoring => Self {
                kind,
                rule: SuccessRule::StateIn(UNMONITOR_STATES),
                record: Record::Log(LogCategory::Monitoring),
                verb: "disable monitoring on",
                progress: "Disabling detailed monitoring on {id}...",
                success: "Detailed monitoring is being disabled on {id}. Details recorded in {log}",
            },
            OperationKind::Start => Self {
                kind,
                rule: SuccessRule::StateIn(START_STATES),
                record: Record::Log(LogCategory::InstanceState),
                verb: "start",
                progress: "Starting instance {id}...",
                success: "Instance {id} is starting. Details recorded in {log}",
            },
            OperationKind::Stop => Self {
                kind,
                rule: SuccessRule::StateIn(STOP_STATES),
                record: Record::Log(LogCategory::InstanceState),
                verb: "stop",
                progress: "Stopping instance {id}...",
                success: "Instance {id} is stopping. Details recorded in {log}",
            },
            OperationKind::Reboot => Self {
                kind,
                rule: SuccessRule::NoFault,
                record: Record::Log(LogCategory::InstanceState),
                verb: "reboot",
                progress: "Rebooting instance {id}...",
                success: "Instance {id} is rebooting. Details recorded in {log}",
            },
        }
    }

    /// Status indicator text for `instance_id`.
    #[must_use]
    pub fn progress_message(&self, instance_id: Option<&str>) -> String {
        render(self.progress, instance_id, "")
    }

    /// Success message naming the instance and where the record went.
    #[must_use]
    pub fn success_message(&self, instance_id: Option<&str>, location: &str) -> String {
        render(self.success, instance_id, location)
    }
}

fn render(template: &str, instance_id: Option<&str>, location: &str) -> String {
    template
        .replace("{id}", instance_id.unwrap_or("all instances"))
        .replace("{log}", location)
}
