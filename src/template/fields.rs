//! Placeholder detection and field discovery.

use crate::model::Document;
use regex::Regex;
use std::sync::LazyLock;

/// Bracketed placeholder pattern: `[` + any characters (non-greedy) + `]`.
///
/// Matching is non-greedy and left to right, so an unmatched `[` with no
/// closing bracket simply produces no match.
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(.*?)\]").expect("valid placeholder regex"));

/// A placeholder occurrence within a paragraph's flattened text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder {
    /// Byte offset of the opening bracket
    pub start: usize,

    /// Byte offset one past the closing bracket
    pub end: usize,

    /// Field name: the bracketed text with surrounding whitespace trimmed
    pub name: String,
}

impl Placeholder {
    /// Length of the literal bracketed token in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for the degenerate `[]` token.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

/// Find all placeholder occurrences in a flattened paragraph text.
///
/// Matches are non-overlapping and returned in left-to-right order.
pub fn find_placeholders(text: &str) -> Vec<Placeholder> {
    PLACEHOLDER_REGEX
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let inner = caps.get(1)?;
            Some(Placeholder {
                start: whole.start(),
                end: whole.end(),
                name: inner.as_str().trim().to_string(),
            })
        })
        .collect()
}

/// Scan a whole document for placeholder fields.
///
/// Returns the unique field names in first-occurrence order, scanning
/// paragraphs top to bottom. Names are deduplicated after trimming, so
/// `[Nome]` and `[ Nome ]` collapse into a single field.
pub fn scan_fields(document: &Document) -> Vec<String> {
    let mut fields: Vec<String> = Vec::new();
    for paragraph in &document.paragraphs {
        let text = paragraph.plain_text();
        for placeholder in find_placeholders(&text) {
            if !fields.contains(&placeholder.name) {
                fields.push(placeholder.name);
            }
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Paragraph;

    #[test]
    fn test_find_placeholders_basic() {
        let found = find_placeholders("Dear [Name], welcome to [City].");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "Name");
        assert_eq!(found[0].start, 5);
        assert_eq!(found[0].end, 11);
        assert_eq!(found[1].name, "City");
    }

    #[test]
    fn test_find_placeholders_trims_whitespace() {
        let found = find_placeholders("[  Nome do Cliente ]");
        assert_eq!(found[0].name, "Nome do Cliente");
        // Offsets still cover the literal token including the padding
        assert_eq!(found[0].start, 0);
        assert_eq!(found[0].end, 20);
    }

    #[test]
    fn test_unmatched_bracket_yields_no_match() {
        assert!(find_placeholders("no closing [bracket here").is_empty());
        assert!(find_placeholders("no brackets at all").is_empty());
    }

    #[test]
    fn test_non_greedy_matching() {
        let found = find_placeholders("[A] and [B]");
        assert_eq!(found.len(), 2);
        assert_eq!(found[0].name, "A");
        assert_eq!(found[1].name, "B");
    }

    #[test]
    fn test_empty_placeholder() {
        let found = find_placeholders("x[]y");
        assert_eq!(found.len(), 1);
        assert!(found[0].is_empty());
        assert_eq!(found[0].len(), 2);
    }

    #[test]
    fn test_scan_fields_dedup_first_occurrence() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("[A] text [B] more [A]"));
        doc.add_paragraph(Paragraph::with_text("[C] and [B]"));

        assert_eq!(scan_fields(&doc), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_scan_fields_across_runs() {
        // Placeholder split over two runs is still found in the
        // flattened paragraph text.
        let mut para = Paragraph::new();
        para.add_text("Dear [Na");
        para.add_text("me], welcome");

        let mut doc = Document::new();
        doc.add_paragraph(para);

        assert_eq!(scan_fields(&doc), vec!["Name"]);
    }
}
