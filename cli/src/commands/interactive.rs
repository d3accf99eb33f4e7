//! Interactive mode: the numbered menu loop.

use std::process::ExitCode;

use anyhow::Result;
use ec2ops_common::ExecutionMode;

use super::{FAREWELL, Session, instance_id_prompt};
use crate::application::ports::{AuditStore, ComputeProvider, LineSource, Reporter};
use crate::domain::OperationRequest;
use crate::domain::menu::{MenuChoice, menu_entries, parse_choice, validate_instance_id};

const CHOICE_PROMPT: &str = "Choose an option";

/// Show the menu until the operator quits or input ends.
///
/// Invalid input and failed operations are reported and the menu is shown
/// again. Quit and end of input both exit 0.
///
/// # Errors
///
/// Returns an error if operator input cannot be read.
pub async fn run<P, A, R, L>(session: &Session<'_, P, A, R, L>) -> Result<ExitCode>
where
    P: ComputeProvider,
    A: AuditStore,
    R: Reporter,
    L: LineSource,
{
    let executor = session.executor();
    let entries = menu_entries();
    loop {
        session.reporter.menu(&entries);
        let Some(line) = session.input.read_line(CHOICE_PROMPT).await? else {
            return Ok(farewell(session.reporter));
        };

        let kind = match parse_choice(&line) {
            Ok(MenuChoice::Quit) => return Ok(farewell(session.reporter)),
            Ok(MenuChoice::Run(kind)) => kind,
            Err(e) => {
                session.reporter.failure(&e.to_string());
                continue;
            }
        };

        // A fresh ID is read for every operation.
        let instance_id = if kind.requires_instance_id() {
            let Some(line) = session.input.read_line(&instance_id_prompt(kind)).await? else {
                return Ok(farewell(session.reporter));
            };
            match validate_instance_id(&line) {
                Ok(id) => Some(id),
                Err(e) => {
                    session.reporter.failure(&e.to_string());
                    continue;
                }
            }
        } else {
            None
        };

        let request = OperationRequest::new(kind, instance_id, ExecutionMode::Interactive)?;
        let outcome = executor.execute(&request).await;
        tracing::debug!(operation = %kind, succeeded = outcome.succeeded(), "menu operation finished");
    }
}

fn farewell<R: Reporter>(reporter: &R) -> ExitCode {
    reporter.info(FAREWELL);
    ExitCode::SUCCESS
}
