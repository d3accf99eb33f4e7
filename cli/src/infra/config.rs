//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::config::{ConfigOverrides, Ec2OpsConfig};

/// Production implementation of `ConfigStore` that uses a YAML file on disk.
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<Ec2OpsConfig> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(Ec2OpsConfig::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        serde_yaml::from_str(&content).with_context(|| format!("cannot parse {}", path.display()))
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var("EC2OPS_CONFIG") {
            return Ok(PathBuf::from(val));
        }
        let home =
            dirs::home_dir().ok_or_else(|| anyhow::anyhow!("cannot determine home directory"))?;
        Ok(home.join(".ec2ops").join("config.yaml"))
    }
}

/// Overrides read from `EC2OPS_*` environment variables.
#[must_use]
pub fn env_overrides() -> ConfigOverrides {
    let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
    ConfigOverrides {
        region: var("EC2OPS_REGION"),
        profile: var("EC2OPS_PROFILE"),
        binary: var("EC2OPS_AWS_BIN"),
        output_dir: var("EC2OPS_OUTPUT_DIR").map(PathBuf::from),
    }
}
