//! Mode controllers.
//!
//! With any operation flag present the tool runs in batch mode; otherwise it
//! drives the numbered menu. Both modes share one `Session` and one executor,
//! and differ only in what a failed outcome means for the process.

pub mod batch;
pub mod interactive;

use std::process::ExitCode;

use anyhow::Result;
use ec2ops_common::OperationKind;

use crate::app::AppContext;
use crate::application::ports::{AuditStore, ComputeProvider, LineSource, Reporter};
use crate::application::services::executor::Executor;
use crate::domain::{Interrupted, OperationSpec};

/// Printed on Quit, end of input, and Ctrl-C.
pub const FAREWELL: &str = "Goodbye!";

/// Everything a mode controller needs, borrowed for the life of one run.
pub struct Session<'a, P, A, R, L> {
    pub provider: &'a P,
    pub audit: &'a A,
    pub reporter: &'a R,
    pub input: &'a L,
}

impl<'a, P, A, R, L> Session<'a, P, A, R, L>
where
    P: ComputeProvider,
    A: AuditStore,
    R: Reporter,
    L: LineSource,
{
    pub fn new(provider: &'a P, audit: &'a A, reporter: &'a R, input: &'a L) -> Self {
        Self {
            provider,
            audit,
            reporter,
            input,
        }
    }

    fn executor(&self) -> Executor<'a, P, A, R> {
        Executor::new(self.provider, self.audit, self.reporter)
    }
}

/// Prompt shown before reading the instance ID for `kind`.
#[must_use]
pub fn instance_id_prompt(kind: OperationKind) -> String {
    format!("Instance ID to {}", OperationSpec::for_kind(kind).verb)
}

/// Whether `err` means the operator pressed Ctrl-C at a prompt.
#[must_use]
pub fn is_interrupt(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| cause.is::<Interrupted>())
}

/// Run the selected operations, or the menu when none were selected.
///
/// # Errors
///
/// Returns an error only when operator input cannot be read, including
/// [`Interrupted`] when the operator presses Ctrl-C at a prompt.
pub async fn run(app: &AppContext, kinds: &[OperationKind]) -> Result<ExitCode> {
    let reporter = app.reporter();
    let session = Session::new(&app.provider, &app.audit, &reporter, &app.input);
    if kinds.is_empty() {
        interactive::run(&session).await
    } else {
        batch::run(&session, kinds).await
    }
}
