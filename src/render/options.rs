//! Rendering options and configuration.

/// Default highlight for placeholder tokens in previews.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#FFFF00";

/// Options for rendering HTML previews.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Background color behind placeholder tokens (CSS color value)
    pub highlight_color: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the placeholder highlight color.
    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.highlight_color = color.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_string(),
        }
    }
}
