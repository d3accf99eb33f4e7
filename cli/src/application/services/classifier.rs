//! Error classifier: turns a provider fault into a recorded, printed failure.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use chrono::Local;
use ec2ops_common::{LogCategory, OperationKind};
use serde_json::json;

use crate::application::ports::{AuditStore, Reporter};
use crate::domain::operation::OperationSpec;
use crate::domain::{LogEntry, OperationOutcome, OperationRequest, ProviderFault};

/// Records provider faults to the `error` log and reports them.
pub struct ErrorClassifier<'a, A, R> {
    audit: &'a A,
    reporter: &'a R,
}

impl<'a, A: AuditStore, R: Reporter> ErrorClassifier<'a, A, R> {
    pub fn new(audit: &'a A, reporter: &'a R) -> Self {
        Self { audit, reporter }
    }

    /// Log and print `fault`, returning the failed outcome.
    ///
    /// Whether the failure ends the process is decided by the caller from
    /// the request's mode; the classifier never exits.
    pub fn classify(&self, fault: &ProviderFault, request: &OperationRequest) -> OperationOutcome {
        let message = describe_fault(fault, request.kind(), request.instance_id());
        tracing::debug!(code = fault.code(), mode = ?request.mode(), "provider fault");

        let entry = LogEntry::message(&Local::now(), &message);
        if let Err(e) = self.audit.append(LogCategory::Error, &entry) {
            tracing::warn!(error = %e, "error log write failed");
            self.reporter.warn(&format!("Could not record the error: {e}"));
        }
        self.reporter.failure(&message);

        OperationOutcome::failure(
            message,
            json!({"Error": {"Code": fault.code(), "Message": fault.to_string()}}),
        )
    }
}

/// Operator-facing text for a fault.
#[must_use]
pub fn describe_fault(
    fault: &ProviderFault,
    kind: OperationKind,
    instance_id: Option<&str>,
) -> String {
    let verb = OperationSpec::for_kind(kind).verb;
    let target = match instance_id {
        Some(id) => format!("instance {id}"),
        None => "instances".to_string(),
    };
    match fault {
        ProviderFault::IncorrectState { .. } if kind == OperationKind::Reboot => {
            format!("Cannot reboot {target}: it is not in a state from which it can be rebooted.")
        }
        ProviderFault::IncorrectState { .. } => {
            format!("Cannot {verb} {target}: it is not in a state that allows this.")
        }
        ProviderFault::InstanceNotFound { .. } => {
            let id = instance_id.unwrap_or("?");
            format!("Instance {id} was not found. Check the instance ID and region.")
        }
        ProviderFault::Api { code, message } => {
            format!("Failed to {verb} {target}: {code}: {message}")
        }
        ProviderFault::Invocation(detail) => {
            format!("Could not reach the compute provider: {detail}")
        }
    }
}
