//! Output formatting module

pub mod progress;
pub mod reporter;
pub mod styles;

use console::Term;
use owo_colors::{OwoColorize as _, Style};
pub use reporter::TerminalReporter;
pub use styles::Styles;

/// Output context carrying styling and terminal state.
pub struct OutputContext {
    /// Stylesheet for colored output.
    pub styles: Styles,
    /// Whether stdout is a TTY.
    pub is_tty: bool,
    /// Whether to suppress non-error output.
    pub quiet: bool,
}

impl OutputContext {
    /// Create output context based on CLI flags and environment.
    #[must_use]
    pub fn new(no_color: bool, quiet: bool) -> Self {
        let is_tty = Term::stdout().is_term();
        let use_colors = !no_color && is_tty && std::env::var("NO_COLOR").is_err();

        let mut styles = Styles::default();
        if use_colors {
            styles.colorize();
        }

        Self {
            styles,
            is_tty,
            quiet,
        }
    }

    /// Check if progress indicators should be shown.
    #[must_use]
    pub fn show_progress(&self) -> bool {
        self.is_tty && !self.quiet
    }

    /// `✓ msg` on stdout. Suppressed when `quiet`.
    pub fn success(&self, msg: &str) {
        if !self.quiet {
            println!("{}", status_line("✓", self.styles.success, msg));
        }
    }

    /// `⚠ msg` on stderr. Suppressed when `quiet`.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            eprintln!("{}", status_line("⚠", self.styles.warning, msg));
        }
    }

    /// `✗ msg` on stderr, all in the error color. Never suppressed.
    pub fn error(&self, msg: &str) {
        let msg = msg.style(self.styles.error).to_string();
        eprintln!("{}", status_line("✗", self.styles.error, &msg));
    }

    /// `ℹ msg` on stdout. Suppressed when `quiet`.
    pub fn info(&self, msg: &str) {
        if !self.quiet {
            println!("{}", status_line("ℹ", self.styles.info, msg));
        }
    }

    /// Print the numbered menu under a title.
    ///
    /// The menu is the prompt itself, so only the title honors `quiet`.
    pub fn menu(&self, title: &str, entries: &[(usize, &str)]) {
        if !self.quiet {
            println!();
            println!("  {}", title.style(self.styles.header));
        }
        for (number, label) in entries {
            println!("  {}  {label}", format!("{number})").style(self.styles.number));
        }
    }
}

fn status_line(icon: &str, style: Style, msg: &str) -> String {
    format!("  {} {msg}", icon.style(style))
}
