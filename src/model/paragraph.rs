//! Paragraph and text-level types.

use serde::{Deserialize, Serialize};

/// A paragraph of text content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<TextRun>,

    /// Paragraph style
    pub style: ParagraphStyle,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self {
            runs: Vec::new(),
            style: ParagraphStyle::default(),
        }
    }

    /// Create a paragraph with a single unstyled run.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Add an unstyled text run to the paragraph.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(TextRun::new(text));
    }

    /// Add a styled text run.
    pub fn add_run(&mut self, run: TextRun) {
        self.runs.push(run);
    }

    /// Get plain text content of the paragraph.
    ///
    /// Run texts are concatenated in order with no separators, which is the
    /// flattened text that placeholder matching operates on.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Check if the paragraph has no text content.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

/// A run of text with consistent formatting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    /// The text content
    pub text: String,

    /// Run formatting
    pub style: TextStyle,
}

impl TextRun {
    /// Create a new text run with unset formatting.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: TextStyle::default(),
        }
    }

    /// Create a text run with explicit formatting.
    pub fn styled(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Run formatting properties.
///
/// Toggles are tri-state, matching WordprocessingML semantics: `Some(true)`
/// and `Some(false)` are explicit settings, `None` means the property is
/// unset and inherits from the surrounding style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Bold text
    pub bold: Option<bool>,

    /// Italic text
    pub italic: Option<bool>,

    /// Underlined text
    pub underline: Option<bool>,

    /// Font name (w:rFonts/@w:ascii)
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,
}

impl TextStyle {
    /// Check if any toggle is explicitly enabled.
    pub fn has_styling(&self) -> bool {
        self.bold == Some(true) || self.italic == Some(true) || self.underline == Some(true)
    }
}

/// Paragraph formatting properties.
///
/// Spacing values are kept in twentieths of a point, as stored in the
/// document XML. `None` means the attribute is unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParagraphStyle {
    /// Text alignment, or None when unset
    pub alignment: Option<Alignment>,

    /// First line indent in twentieths of a point
    pub first_line_indent: Option<i64>,

    /// Space before the paragraph in twentieths of a point
    pub space_before: Option<i64>,

    /// Space after the paragraph in twentieths of a point
    pub space_after: Option<i64>,
}

/// Text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

impl Alignment {
    /// Map a WordprocessingML `w:jc` value to an alignment.
    pub fn from_docx(value: &str) -> Option<Self> {
        match value {
            "left" | "start" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" | "end" => Some(Alignment::Right),
            "both" | "justify" => Some(Alignment::Justify),
            _ => None,
        }
    }

    /// The `w:jc` value written back to document XML.
    pub fn as_docx(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }

    /// The CSS `text-align` keyword used in HTML previews.
    pub fn as_css(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "justify",
        }
    }
}
