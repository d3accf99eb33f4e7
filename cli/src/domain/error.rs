//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, or `std::process`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

// ── Provider faults ───────────────────────────────────────────────────────────

/// An error raised by the compute provider, as opposed to a response that
/// came back but does not show the expected state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderFault {
    /// The instance cannot make the requested transition from its current
    /// state (`IncorrectInstanceState`).
    #[error("{message}")]
    IncorrectState { message: String },

    /// The instance ID does not exist or is malformed.
    #[error("{message}")]
    InstanceNotFound { code: String, message: String },

    /// Any other API error reported by the provider.
    #[error("{code}: {message}")]
    Api { code: String, message: String },

    /// The provider could not be invoked at all (missing binary, timeout,
    /// unreadable output).
    #[error("{0}")]
    Invocation(String),
}

impl ProviderFault {
    /// Provider error code, where one was reported.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            ProviderFault::IncorrectState { .. } => "IncorrectInstanceState",
            ProviderFault::InstanceNotFound { code, .. } | ProviderFault::Api { code, .. } => code,
            ProviderFault::Invocation(_) => "InvocationFailed",
        }
    }
}

// ── Storage errors ────────────────────────────────────────────────────────────

/// Errors writing audit logs or the inventory snapshot.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("cannot create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize log body: {0}")]
    Serialize(#[from] serde_json::Error),
}

// ── Input errors ──────────────────────────────────────────────────────────────

/// Rejected operator input. Always recoverable.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("Invalid Input: '{0}' is not a menu option. Enter a number from 1 to 7.")]
    InvalidChoice(String),

    #[error("Invalid Input: an instance ID is required.")]
    EmptyInstanceId,

    #[error("No instance ID provided for '{0}'.")]
    MissingInstanceId(String),
}

/// The operator pressed Ctrl-C while a prompt owned the terminal.
///
/// Ends the session with the farewell message, same as a signal received
/// between prompts.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("input interrupted")]
pub struct Interrupted;

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to configuration value validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid region '{0}': expected a name like 'us-east-2'")]
    InvalidRegion(String),

    #[error("Invalid timeout: timeout_secs must be greater than zero")]
    InvalidTimeout,

    #[error("Invalid provider binary: the aws binary path must not be empty")]
    EmptyBinary,
}
