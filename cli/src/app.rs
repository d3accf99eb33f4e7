//! Application context: unified state passed to the mode controllers.
//!
//! Built once in `Cli::run()` from the merged configuration and the output
//! flags, then borrowed by whichever mode runs.

use crate::domain::Ec2OpsConfig;
use crate::infra::audit_log::FileAuditLog;
use crate::infra::aws::AwsCliProvider;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::prompt::TerminalPrompt;
use crate::output::{OutputContext, TerminalReporter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Unified application context.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Effective configuration after flags and environment were applied.
    pub config: Ec2OpsConfig,
    /// `aws` CLI adapter.
    pub provider: AwsCliProvider<TokioCommandRunner>,
    /// Category logs and the inventory snapshot.
    pub audit: FileAuditLog,
    /// Operator input.
    pub input: TerminalPrompt,
}

impl AppContext {
    #[must_use]
    pub fn new(flags: &OutputFlags, config: Ec2OpsConfig) -> Self {
        let audit = FileAuditLog::new(config.output_dir.clone());
        // A Ctrl-C exit mid-write skips temp file cleanup.
        audit.remove_stale_temp_files();
        Self {
            output: OutputContext::new(flags.no_color, flags.quiet),
            provider: AwsCliProvider::from_config(&config.aws),
            audit,
            input: TerminalPrompt::new(),
            config,
        }
    }

    /// Reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }
}
