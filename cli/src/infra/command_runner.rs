//! Infrastructure implementation of the `CommandRunner` port.
//!
//! Used by the `aws` CLI adapter. Every call is bounded by a timeout and the
//! child is killed when it fires.

use std::process::{Output, Stdio};
use std::time::Duration;

use anyhow::{Context, Result};

use crate::application::ports::CommandRunner;

/// Production `CommandRunner` backed by `tokio::process`.
///
/// Children are spawned with `kill_on_drop`, so abandoning the output future
/// on timeout sends them SIGKILL.
pub struct TokioCommandRunner {
    timeout: Duration,
}

impl TokioCommandRunner {
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output> {
        self.run_with_timeout(program, args, self.timeout).await
    }

    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<Output> {
        // stdin stays null so the child can never compete with the prompt.
        let child = tokio::process::Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .with_context(|| format!("failed to spawn {program}"))?;

        match tokio::time::timeout(timeout, child.wait_with_output()).await {
            Ok(output) => output.with_context(|| format!("waiting for {program}")),
            Err(_) => anyhow::bail!("{program} timed out after {}s", timeout.as_secs()),
        }
    }
}
