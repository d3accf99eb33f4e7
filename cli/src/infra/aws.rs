//! Infrastructure implementation of the `ComputeProvider` port.
//!
//! `AwsCliProvider<R>` routes every call through the `aws ec2` CLI via a
//! `CommandRunner`, so tests can inject a fake runner without spawning
//! processes.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde_json::Value;

use crate::application::ports::{CommandRunner, ComputeProvider};
use crate::domain::ProviderFault;
use crate::domain::config::AwsConfig;
use crate::infra::command_runner::TokioCommandRunner;

/// `An error occurred (Code) when calling the Op operation: message`
#[allow(clippy::expect_used)] // Pattern is a compile-time constant
static CLI_ERROR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"An error occurred \((?P<code>[^)]+)\)(?: when calling the \w+ operation)?: (?P<message>.+)",
    )
    .expect("valid regex")
});

/// Compute provider backed by the `aws` command-line tool.
pub struct AwsCliProvider<R: CommandRunner> {
    runner: R,
    binary: String,
    region: String,
    profile: Option<String>,
}

impl<R: CommandRunner> AwsCliProvider<R> {
    /// Create a provider with an explicit runner.
    pub fn new(runner: R, config: &AwsConfig) -> Self {
        Self {
            runner,
            binary: config.binary.clone(),
            region: config.region.clone(),
            profile: config.profile.clone(),
        }
    }

    async fn invoke(&self, operation: &str, instance_id: Option<&str>) -> Result<Value, ProviderFault> {
        let mut args = vec!["ec2", operation];
        if let Some(id) = instance_id {
            args.extend(["--instance-ids", id]);
        }
        args.extend(["--region", self.region.as_str(), "--output", "json"]);
        if let Some(profile) = &self.profile {
            args.extend(["--profile", profile.as_str()]);
        }
        tracing::debug!(binary = %self.binary, ?args, "invoking provider");

        let output = self
            .runner
            .run(&self.binary, &args)
            .await
            .map_err(|e| ProviderFault::Invocation(format!("{e:#}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::debug!(status = ?output.status.code(), %stderr, "provider call failed");
            return Err(parse_cli_error(&stderr));
        }
        parse_response(&output.stdout)
    }
}

impl AwsCliProvider<TokioCommandRunner> {
    /// Convenience constructor for production use.
    #[must_use]
    pub fn from_config(config: &AwsConfig) -> Self {
        Self::new(
            TokioCommandRunner::new(Duration::from_secs(config.timeout_secs)),
            config,
        )
    }
}

impl<R: CommandRunner> ComputeProvider for AwsCliProvider<R> {
    async fn describe_instances(&self) -> Result<Value, ProviderFault> {
        self.invoke("describe-instances", None).await
    }

    async fn start_instances(&self, instance_id: &str) -> Result<Value, ProviderFault> {
        self.invoke("start-instances", Some(instance_id)).await
    }

    async fn stop_instances(&self, instance_id: &str) -> Result<Value, ProviderFault> {
        self.invoke("stop-instances", Some(instance_id)).await
    }

    async fn reboot_instances(&self, instance_id: &str) -> Result<Value, ProviderFault> {
        self.invoke("reboot-instances", Some(instance_id)).await
    }

    async fn monitor_instances(&self, instance_id: &str) -> Result<Value, ProviderFault> {
        self.invoke("monitor-instances", Some(instance_id)).await
    }

    async fn unmonitor_instances(&self, instance_id: &str) -> Result<Value, ProviderFault> {
        self.invoke("unmonitor-instances", Some(instance_id)).await
    }
}

/// Decode a successful CLI response. Calls such as `reboot-instances`
/// print nothing, which becomes an empty object.
fn parse_response(stdout: &[u8]) -> Result<Value, ProviderFault> {
    if stdout.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(stdout)
        .map_err(|e| ProviderFault::Invocation(format!("unreadable provider response: {e}")))
}

/// Map CLI error output onto a typed fault.
#[must_use]
pub fn parse_cli_error(stderr: &str) -> ProviderFault {
    let Some(caps) = CLI_ERROR.captures(stderr) else {
        let text = stderr.trim();
        return ProviderFault::Api {
            code: "Unknown".to_string(),
            message: if text.is_empty() {
                "provider exited without an error message".to_string()
            } else {
                text.to_string()
            },
        };
    };
    let code = caps["code"].to_string();
    let message = caps["message"].trim().to_string();
    match code.as_str() {
        "IncorrectInstanceState" => ProviderFault::IncorrectState { message },
        "InvalidInstanceID.NotFound" | "InvalidInstanceID.Malformed" => {
            ProviderFault::InstanceNotFound { code, message }
        }
        _ => ProviderFault::Api { code, message },
    }
}
