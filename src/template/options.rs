//! Synthesis options and configuration.

/// Options for document synthesis.
#[derive(Debug, Clone, Default)]
pub struct SynthesizeOptions {
    /// What to emit for a placeholder with no supplied value
    pub missing_field: MissingField,
}

impl SynthesizeOptions {
    /// Create new synthesis options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-field mode.
    pub fn with_missing_field(mut self, mode: MissingField) -> Self {
        self.missing_field = mode;
        self
    }

    /// Keep the literal bracketed text for fields with no value.
    pub fn keep_missing(mut self) -> Self {
        self.missing_field = MissingField::KeepPlaceholder;
        self
    }
}

/// Behavior for a placeholder whose field has no supplied value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingField {
    /// Drop the bracketed token entirely, emitting nothing in its place
    #[default]
    Omit,
    /// Leave the literal bracketed text in the output, formatting intact
    KeepPlaceholder,
}
