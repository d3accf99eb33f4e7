//! Terminal implementation of the `Reporter` port.
//!
//! Wraps `&OutputContext` and implements the `application::ports::Reporter`
//! trait so application services can emit events without depending on
//! any presentation type directly.

use crate::application::ports::{Reporter, StatusIndicator};
use crate::output::OutputContext;
use crate::output::progress::SpinnerGuard;

const MENU_TITLE: &str = "EC2 Operations";

/// Terminal reporter that wraps an `OutputContext`.
///
/// - `success()` prints `"  ✓ {message}"` (suppressed when `ctx.quiet`)
/// - `failure()` prints `"  ✗ {message}"` to stderr (never suppressed)
/// - `warn()` prints `"  ⚠ {message}"` to stderr (suppressed when `ctx.quiet`)
pub struct TerminalReporter<'a> {
    ctx: &'a OutputContext,
}

impl<'a> TerminalReporter<'a> {
    /// Create a new `TerminalReporter` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }
}

impl StatusIndicator for SpinnerGuard {
    fn stop(&self) {
        SpinnerGuard::stop(self);
    }
}

impl Reporter for TerminalReporter<'_> {
    fn begin(&self, message: &str) -> Box<dyn StatusIndicator + '_> {
        Box::new(SpinnerGuard::start(message, self.ctx.show_progress()))
    }

    fn success(&self, message: &str) {
        self.ctx.success(message);
    }

    fn failure(&self, message: &str) {
        self.ctx.error(message);
    }

    fn warn(&self, message: &str) {
        self.ctx.warn(message);
    }

    fn info(&self, message: &str) {
        self.ctx.info(message);
    }

    fn menu(&self, entries: &[(usize, &str)]) {
        self.ctx.menu(MENU_TITLE, entries);
    }
}
