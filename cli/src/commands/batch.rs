//! Batch mode: run each flagged operation once, in fixed order.

use std::process::ExitCode;

use anyhow::Result;
use ec2ops_common::{ExecutionMode, OperationKind};

use super::{Session, instance_id_prompt};
use crate::application::ports::{AuditStore, ComputeProvider, LineSource, Reporter};
use crate::domain::OperationRequest;
use crate::domain::menu::validate_instance_id;

/// Execute `kinds` in order. The first failed operation ends the run with
/// exit code 1 and no later operation is attempted.
///
/// # Errors
///
/// Returns an error if reading the instance ID fails.
pub async fn run<P, A, R, L>(session: &Session<'_, P, A, R, L>, kinds: &[OperationKind]) -> Result<ExitCode>
where
    P: ComputeProvider,
    A: AuditStore,
    R: Reporter,
    L: LineSource,
{
    let executor = session.executor();
    for &kind in kinds {
        let instance_id = if kind.requires_instance_id() {
            let Some(line) = session.input.read_line(&instance_id_prompt(kind)).await? else {
                session
                    .reporter
                    .failure("Input closed before an instance ID was entered.");
                return Ok(ExitCode::FAILURE);
            };
            match validate_instance_id(&line) {
                Ok(id) => Some(id),
                Err(e) => {
                    session.reporter.failure(&e.to_string());
                    return Ok(ExitCode::FAILURE);
                }
            }
        } else {
            None
        };

        let request = OperationRequest::new(kind, instance_id, ExecutionMode::Batch)?;
        let outcome = executor.execute(&request).await;
        if !outcome.succeeded() && request.mode().failure_is_fatal() {
            tracing::info!(operation = %kind, "batch run stopped after failure");
            return Ok(ExitCode::FAILURE);
        }
    }
    Ok(ExitCode::SUCCESS)
}
