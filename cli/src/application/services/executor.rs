//! Instance operation executor: one routine for every operation kind.
//!
//! Calls the provider under a status indicator, applies the success-state
//! oracle, records the result and reports it. Per-kind differences come from
//! `OperationSpec`.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.

use chrono::Local;
use ec2ops_common::OperationKind;
use serde_json::Value;

use crate::application::ports::{AuditStore, ComputeProvider, Reporter};
use crate::application::services::classifier::ErrorClassifier;
use crate::domain::operation::{Record, STATE_REJECTED_MESSAGE};
use crate::domain::oracle::{self, Judgement};
use crate::domain::{LogEntry, OperationOutcome, OperationRequest, OperationSpec, ProviderFault};

/// Executes operation requests against a provider.
pub struct Executor<'a, P, A, R> {
    provider: &'a P,
    audit: &'a A,
    reporter: &'a R,
}

impl<'a, P, A, R> Executor<'a, P, A, R>
where
    P: ComputeProvider,
    A: AuditStore,
    R: Reporter,
{
    pub fn new(provider: &'a P, audit: &'a A, reporter: &'a R) -> Self {
        Self {
            provider,
            audit,
            reporter,
        }
    }

    /// Run one operation to completion. Never fails: every path ends in an
    /// outcome that has already been reported to the operator.
    pub async fn execute(&self, request: &OperationRequest) -> OperationOutcome {
        let spec = OperationSpec::for_kind(request.kind());
        let instance_id = request.instance_id();
        tracing::info!(
            operation = %spec.kind,
            instance_id = instance_id.unwrap_or("-"),
            mode = ?request.mode(),
            "executing operation"
        );

        let indicator = self.reporter.begin(&spec.progress_message(instance_id));
        let result = call(self.provider, spec.kind, instance_id).await;
        indicator.stop();

        match result {
            Err(fault) => ErrorClassifier::new(self.audit, self.reporter).classify(&fault, request),
            Ok(response) => match oracle::judge(&spec, &response) {
                Judgement::Accepted => self.record(&spec, instance_id, response),
                Judgement::Rejected { observed } => {
                    tracing::warn!(operation = %spec.kind, ?observed, "response outside expected states");
                    self.reporter.failure(STATE_REJECTED_MESSAGE);
                    OperationOutcome::failure(STATE_REJECTED_MESSAGE, response)
                }
            },
        }
    }

    fn record(
        &self,
        spec: &OperationSpec,
        instance_id: Option<&str>,
        response: Value,
    ) -> OperationOutcome {
        match spec.record {
            Record::Snapshot => match self.audit.write_snapshot(&response) {
                Ok(path) => {
                    let message = spec.success_message(instance_id, &path.display().to_string());
                    self.reporter.success(&message);
                    OperationOutcome::success(message, response)
                }
                Err(e) => {
                    tracing::warn!(error = %e, "inventory snapshot write failed");
                    let message = format!("Could not save EC2 information: {e}");
                    self.reporter.warn(&message);
                    OperationOutcome::failure(message, response)
                }
            },
            Record::Log(category) => {
                let message = spec.success_message(instance_id, &self.audit.location(category));
                let written = LogEntry::metadata(&Local::now(), &response)
                    .map_err(crate::domain::StorageError::from)
                    .and_then(|entry| self.audit.append(category, &entry));
                if let Err(e) = written {
                    tracing::warn!(error = %e, %category, "audit log write failed");
                    self.reporter
                        .warn(&format!("Could not write to {category} log: {e}"));
                }
                self.reporter.success(&message);
                OperationOutcome::success(message, response)
            }
        }
    }
}

async fn call<P: ComputeProvider>(
    provider: &P,
    kind: OperationKind,
    instance_id: Option<&str>,
) -> Result<Value, ProviderFault> {
    let id = instance_id.unwrap_or_default();
    match kind {
        OperationKind::Info => provider.describe_instances().await,
        OperationKind::EnableMonitoring => provider.monitor_instances(id).await,
        OperationKind::DisableMonitoring => provider.unmonitor_instances(id).await,
        OperationKind::Start => provider.start_instances(id).await,
        OperationKind::Stop => provider.stop_instances(id).await,
        OperationKind::Reboot => provider.reboot_instances(id).await,
    }
}
