//! Output styles using owo-colors stylesheet pattern

use owo_colors::Style;

/// Centralized stylesheet for CLI output colors.
#[derive(Default, Clone)]
pub struct Styles {
    /// `✓` marker (green)
    pub success: Style,
    /// `⚠` marker (yellow)
    pub warning: Style,
    /// `✗` marker (red)
    pub error: Style,
    /// `ℹ` marker (blue)
    pub info: Style,
    /// Menu title
    pub header: Style,
    /// Menu item numbers
    pub number: Style,
}

impl Styles {
    /// Apply colors to the stylesheet.
    pub fn colorize(&mut self) {
        self.success = Style::new().green();
        self.warning = Style::new().yellow();
        self.error = Style::new().red();
        self.info = Style::new().blue();
        self.header = Style::new().bold().cyan();
        self.number = Style::new().bold();
    }
}
