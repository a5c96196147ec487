//! Configuration for a validation run.
//!
//! Only presentation is configurable; the manifest schema itself is fixed.

use crate::formatter::OutputFormat;

#[derive(Debug, Clone, Default)]
pub struct ValidatorConfig {
    /// How the report is rendered.
    pub format: OutputFormat,
    /// Report the path as given instead of its base name.
    pub show_full_path: bool,
}

impl ValidatorConfig {
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_full_path(mut self, show_full_path: bool) -> Self {
        self.show_full_path = show_full_path;
        self
    }
}
