//! Progress indicators using indicatif

#![allow(clippy::expect_used)] // Templates are compile-time constants

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a spinner for indeterminate progress.
///
/// # Panics
///
/// Panics if the spinner template string is invalid (it is a compile-time constant and will not panic).
#[must_use]
pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"])
            .template("  {spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

/// Spinner that is cleared when stopped or dropped, whichever comes first.
pub struct SpinnerGuard {
    pb: Option<ProgressBar>,
}

impl SpinnerGuard {
    /// Start a spinner, or a no-op guard when `visible` is false.
    #[must_use]
    pub fn start(msg: &str, visible: bool) -> Self {
        Self {
            pb: visible.then(|| spinner(msg)),
        }
    }

    /// Stop and clear the spinner line.
    pub fn stop(&self) {
        if let Some(pb) = &self.pb
            && !pb.is_finished()
        {
            pb.finish_and_clear();
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.pb.as_ref().is_some_and(|pb| !pb.is_finished())
    }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        self.stop();
    }
}
