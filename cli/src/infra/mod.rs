//! Infrastructure layer: concrete implementations of application port traits.
//!
//! This module contains all I/O-performing code: process execution, the
//! `aws` CLI adapter, log files, configuration, and terminal input.
//!
//! Imports from `crate::domain` and `crate::application::ports` are allowed.
//! Imports from `crate::commands` or `crate::output` are forbidden.

pub mod audit_log;
pub mod aws;
pub mod command_runner;
pub mod config;
pub mod prompt;
