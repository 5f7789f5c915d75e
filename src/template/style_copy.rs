//! Formatting-copy helper shared by pass-through and substitution paths.

use crate::model::TextStyle;
use std::fmt;

/// An attribute that could not be carried over to a new run.
///
/// Copying is best-effort and never aborts synthesis; callers decide
/// whether to log or ignore each issue.
#[derive(Debug, Clone, PartialEq)]
pub enum CopyIssue {
    /// Font size is not a positive finite number of points
    InvalidFontSize(f32),
    /// Font name attribute is present but empty
    EmptyFontName,
}

impl fmt::Display for CopyIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CopyIssue::InvalidFontSize(size) => write!(f, "invalid font size: {}pt", size),
            CopyIssue::EmptyFontName => write!(f, "empty font name"),
        }
    }
}

/// Copy run formatting from a source style.
///
/// Bold, italic, and underline are carried over as-is, including the unset
/// state. Font name and size are copied only when present and valid; a
/// rejected attribute is reported as a [`CopyIssue`] and left unset in the
/// result.
pub fn copy_text_style(source: &TextStyle) -> (TextStyle, Vec<CopyIssue>) {
    let mut issues = Vec::new();
    let mut style = TextStyle {
        bold: source.bold,
        italic: source.italic,
        underline: source.underline,
        font_name: None,
        font_size: None,
    };

    match &source.font_name {
        Some(name) if name.is_empty() => issues.push(CopyIssue::EmptyFontName),
        Some(name) => style.font_name = Some(name.clone()),
        None => {}
    }

    match source.font_size {
        Some(size) if !size.is_finite() || size <= 0.0 => {
            issues.push(CopyIssue::InvalidFontSize(size));
        }
        Some(size) => style.font_size = Some(size),
        None => {}
    }

    (style, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_preserves_tri_state() {
        let source = TextStyle {
            bold: Some(true),
            italic: Some(false),
            underline: None,
            font_name: Some("Calibri".to_string()),
            font_size: Some(12.0),
        };

        let (copied, issues) = copy_text_style(&source);
        assert!(issues.is_empty());
        assert_eq!(copied, source);
    }

    #[test]
    fn test_copy_rejects_invalid_font_size() {
        let source = TextStyle {
            font_size: Some(-4.0),
            ..Default::default()
        };

        let (copied, issues) = copy_text_style(&source);
        assert_eq!(copied.font_size, None);
        assert_eq!(issues, vec![CopyIssue::InvalidFontSize(-4.0)]);
    }

    #[test]
    fn test_copy_rejects_empty_font_name() {
        let source = TextStyle {
            font_name: Some(String::new()),
            ..Default::default()
        };

        let (copied, issues) = copy_text_style(&source);
        assert_eq!(copied.font_name, None);
        assert_eq!(issues, vec![CopyIssue::EmptyFontName]);
    }

    #[test]
    fn test_copy_issue_display() {
        assert_eq!(
            CopyIssue::InvalidFontSize(f32::NAN).to_string(),
            "invalid font size: NaNpt"
        );
        assert_eq!(CopyIssue::EmptyFontName.to_string(), "empty font name");
    }
}
