//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ec2ops_common::OperationKind;

use crate::app::{AppContext, OutputFlags};
use crate::application::ports::ConfigStore;
use crate::commands;
use crate::domain::ConfigOverrides;
use crate::infra::config::{YamlConfigStore, env_overrides};

/// Inspect and control EC2 instances.
///
/// With one or more operation flags the operations run once, in the order
/// info, monitor, unmonitor, start, stop, reboot, and the first failure exits
/// with status 1. Without flags an interactive menu is shown.
#[derive(Parser, Debug)]
#[command(name = "ec2ops", version)]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Save information about all instances to ec2_info.json
    #[arg(short = 'i', long)]
    pub info: bool,

    /// Enable detailed monitoring on an instance
    #[arg(long)]
    pub monitor: bool,

    /// Disable detailed monitoring on an instance
    #[arg(long)]
    pub unmonitor: bool,

    /// Start an instance
    #[arg(long)]
    pub start: bool,

    /// Stop an instance
    #[arg(long)]
    pub stop: bool,

    /// Reboot an instance
    #[arg(long)]
    pub reboot: bool,

    /// AWS region to operate in
    #[arg(long, global = true)]
    pub region: Option<String>,

    /// Named AWS credentials profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Directory for ec2_info.json and the log files
    #[arg(long, global = true, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    pub no_color: bool,
}

impl Cli {
    /// Operations requested by flag, in execution order.
    #[must_use]
    pub fn selected_operations(&self) -> Vec<OperationKind> {
        OperationKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                OperationKind::Info => self.info,
                OperationKind::EnableMonitoring => self.monitor,
                OperationKind::DisableMonitoring => self.unmonitor,
                OperationKind::Start => self.start,
                OperationKind::Stop => self.stop,
                OperationKind::Reboot => self.reboot,
            })
            .collect()
    }

    /// Execute the requested mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or operator input
    /// cannot be read.
    pub async fn run(self) -> Result<ExitCode> {
        let kinds = self.selected_operations();
        let store = YamlConfigStore;
        let file_config = store.load()?;

        let flags = ConfigOverrides {
            region: self.region,
            profile: self.profile,
            binary: None,
            output_dir: self.output_dir,
        };
        let config = flags
            .or(env_overrides())
            .apply(file_config)
            .context("invalid configuration")?;
        tracing::debug!(?config, ?kinds, "configuration resolved");

        let app = AppContext::new(
            &OutputFlags {
                no_color: self.no_color,
                quiet: self.quiet,
            },
            config,
        );
        commands::run(&app, &kinds).await
    }
}
