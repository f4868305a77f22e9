//! Visual theme and styling.

use console::Style;

/// Verscout's visual theme.
#[derive(Debug, Clone)]
pub struct ScoutTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (yellow).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for informational/secondary facts (cyan).
    pub info: Style,
    /// Style for dim text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for section headers (magenta bold).
    pub header: Style,
    /// Style for key labels in key-value displays (white).
    pub key: Style,
    /// Style for values in key-value displays (green bold).
    pub value: Style,
    /// Style for separator rules (cyan).
    pub border: Style,
}

impl Default for ScoutTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoutTheme {
    /// Create the default Verscout theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().yellow(),
            error: Style::new().red().bold(),
            info: Style::new().cyan(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            key: Style::new().white(),
            value: Style::new().green().bold(),
            border: Style::new().cyan(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            info: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            key: Style::new(),
            value: Style::new(),
            border: Style::new(),
        }
    }

    /// Format a horizontal separator rule.
    pub fn separator(&self) -> String {
        format!("{}", self.border.apply_to("━".repeat(72)))
    }

    /// Format a section header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in yellow).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format a `label: value` line.
    pub fn label_value(&self, label: &str, value: &str) -> String {
        format!(
            "{}{}",
            self.key.apply_to(format!("{}: ", label)),
            self.value.apply_to(value)
        )
    }

    /// Format a library detection row: name, version, and the strategy that
    /// produced it.
    pub fn library_row(&self, name: &str, version: &str, method: &str) -> String {
        format!(
            "{}{}{}",
            self.key.apply_to(format!("{}: ", name)),
            self.value.apply_to(format!("v{}", version)),
            self.info.apply_to(format!(" (detected via {})", method))
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
