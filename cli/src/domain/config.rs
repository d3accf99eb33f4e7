//! Domain types and validators for ec2ops configuration.
//!
//! Pure functions only. No I/O, no async, no filesystem access.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

pub const DEFAULT_REGION: &str = "us-east-2";
pub const DEFAULT_AWS_BINARY: &str = "aws";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// ── Config schema ────────────────────────────────────────────────────────────

/// Top-level configuration stored in `~/.ec2ops/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Ec2OpsConfig {
    /// Provider settings.
    pub aws: AwsConfig,
    /// Directory receiving `ec2_info.json` and the category logs.
    pub output_dir: PathBuf,
}

impl Default for Ec2OpsConfig {
    fn default() -> Self {
        Self {
            aws: AwsConfig::default(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// Settings handed to the `aws` CLI.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AwsConfig {
    pub region: String,
    /// Named credentials profile; the CLI default chain is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    /// Path or name of the `aws` executable.
    pub binary: String,
    /// Per-call timeout.
    pub timeout_secs: u64,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            profile: None,
            binary: DEFAULT_AWS_BINARY.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Values that take precedence over the config file (CLI flags, env vars).
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub binary: Option<String>,
    pub output_dir: Option<PathBuf>,
}

impl ConfigOverrides {
    /// Layer `other` underneath `self`: fields already set here win.
    #[must_use]
    pub fn or(self, other: ConfigOverrides) -> ConfigOverrides {
        ConfigOverrides {
            region: self.region.or(other.region),
            profile: self.profile.or(other.profile),
            binary: self.binary.or(other.binary),
            output_dir: self.output_dir.or(other.output_dir),
        }
    }

    /// Apply the overrides and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the merged configuration is invalid.
    pub fn apply(self, mut config: Ec2OpsConfig) -> Result<Ec2OpsConfig, ConfigError> {
        if let Some(region) = self.region {
            config.aws.region = region;
        }
        if let Some(profile) = self.profile {
            config.aws.profile = Some(profile);
        }
        if let Some(binary) = self.binary {
            config.aws.binary = binary;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        validate(&config)?;
        Ok(config)
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Validates a region name such as `us-east-2` or `ap-southeast-1`.
///
/// # Errors
///
/// Returns an error if the name is not lowercase, hyphen-separated, with a
/// trailing numeric part.
pub fn validate_region(region: &str) -> Result<(), ConfigError> {
    let parts: Vec<&str> = region.split('-').collect();
    let well_formed = parts.len() >= 3
        && parts.iter().all(|p| !p.is_empty())
        && parts[..parts.len() - 1]
            .iter()
            .all(|p| p.chars().all(|c| c.is_ascii_lowercase()))
        && parts[parts.len() - 1].chars().all(|c| c.is_ascii_digit());
    if well_formed {
        Ok(())
    } else {
        Err(ConfigError::InvalidRegion(region.to_string()))
    }
}

/// Validates a complete configuration.
///
/// # Errors
///
/// Returns the first invalid setting found.
pub fn validate(config: &Ec2OpsConfig) -> Result<(), ConfigError> {
    validate_region(&config.aws.region)?;
    if config.aws.timeout_secs == 0 {
        return Err(ConfigError::InvalidTimeout);
    }
    if config.aws.binary.trim().is_empty() {
        return Err(ConfigError::EmptyBinary);
    }
    Ok(())
}
