//! Domain layer: pure types and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, or `std::process`.
//! All functions are synchronous and take data in, returning data out.

pub mod audit;
pub mod config;
pub mod error;
pub mod menu;
pub mod operation;
pub mod oracle;

pub use audit::LogEntry;
pub use config::{ConfigOverrides, Ec2OpsConfig};
pub use error::{ConfigError, InputError, Interrupted, ProviderFault, StorageError};
pub use menu::MenuChoice;
pub use operation::{OperationOutcome, OperationRequest, OperationSpec};
