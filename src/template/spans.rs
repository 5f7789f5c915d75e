//! Run span table: offset index over a paragraph's flattened text.
//!
//! Placeholder matches are byte ranges in the concatenation of a
//! paragraph's run texts. The span table records which run owns each
//! `[start, end)` range of that concatenation, so any match offset can be
//! resolved back to the run whose formatting applies. Resolution is by
//! offset lookup, never by substring search, which keeps the mapping
//! unambiguous even when the same text fragment appears in several runs.

use crate::model::Paragraph;

/// The `[start, end)` range a run occupies in the flattened text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSpan {
    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,

    /// Index of the owning run in the paragraph
    pub run: usize,
}

/// A slice of a gap between placeholders, cut at run boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapSegment {
    /// Start byte offset (inclusive)
    pub start: usize,

    /// End byte offset (exclusive)
    pub end: usize,

    /// Owning run index, or None when no run covers the offset
    pub run: Option<usize>,
}

/// Offset index mapping flattened-text ranges to their originating run.
#[derive(Debug, Clone)]
pub struct SpanTable {
    text: String,
    spans: Vec<RunSpan>,
}

impl SpanTable {
    /// Build the span table for a paragraph.
    ///
    /// Empty runs produce zero-width spans that never own an offset.
    pub fn build(paragraph: &Paragraph) -> Self {
        let mut text = String::new();
        let mut spans = Vec::with_capacity(paragraph.runs.len());
        for (index, run) in paragraph.runs.iter().enumerate() {
            let start = text.len();
            text.push_str(&run.text);
            spans.push(RunSpan {
                start,
                end: text.len(),
                run: index,
            });
        }
        Self { text, spans }
    }

    /// The flattened paragraph text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Resolve a byte offset to the index of the run containing it.
    pub fn run_at(&self, offset: usize) -> Option<usize> {
        self.spans
            .iter()
            .find(|span| span.start <= offset && offset < span.end)
            .map(|span| span.run)
    }

    /// Split the `[start, end)` range at run boundaries.
    ///
    /// Each returned segment lies entirely within one run, so its text can
    /// carry that run's formatting. Segments are returned in order and
    /// cover the range exactly, without gaps or overlaps.
    pub fn split_at_run_boundaries(&self, start: usize, end: usize) -> Vec<GapSegment> {
        let mut segments = Vec::new();
        let mut offset = start.min(end);
        while offset < end {
            match self
                .spans
                .iter()
                .find(|span| span.start <= offset && offset < span.end)
            {
                Some(span) => {
                    let segment_end = span.end.min(end);
                    segments.push(GapSegment {
                        start: offset,
                        end: segment_end,
                        run: Some(span.run),
                    });
                    offset = segment_end;
                }
                None => {
                    // Offsets past the recorded spans cannot happen for
                    // text built from the same runs, but stay total anyway.
                    segments.push(GapSegment {
                        start: offset,
                        end,
                        run: None,
                    });
                    break;
                }
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Paragraph, TextRun, TextStyle};

    fn three_run_paragraph() -> Paragraph {
        let mut para = Paragraph::new();
        para.add_text("Dear ");
        para.add_run(TextRun::styled(
            "[Name]",
            TextStyle {
                bold: Some(true),
                ..Default::default()
            },
        ));
        para.add_text(", welcome");
        para
    }

    #[test]
    fn test_build_records_offsets() {
        let table = SpanTable::build(&three_run_paragraph());
        assert_eq!(table.text(), "Dear [Name], welcome");
        assert_eq!(table.run_at(0), Some(0));
        assert_eq!(table.run_at(4), Some(0));
        assert_eq!(table.run_at(5), Some(1));
        assert_eq!(table.run_at(10), Some(1));
        assert_eq!(table.run_at(11), Some(2));
        assert_eq!(table.run_at(19), Some(2));
        assert_eq!(table.run_at(20), None);
    }

    #[test]
    fn test_empty_runs_never_own_offsets() {
        let mut para = Paragraph::new();
        para.add_text("ab");
        para.add_text("");
        para.add_text("cd");

        let table = SpanTable::build(&para);
        assert_eq!(table.run_at(1), Some(0));
        assert_eq!(table.run_at(2), Some(2));
    }

    #[test]
    fn test_split_within_single_run() {
        let table = SpanTable::build(&three_run_paragraph());
        let segments = table.split_at_run_boundaries(0, 5);
        assert_eq!(
            segments,
            vec![GapSegment {
                start: 0,
                end: 5,
                run: Some(0)
            }]
        );
    }

    #[test]
    fn test_split_across_runs() {
        let table = SpanTable::build(&three_run_paragraph());
        let segments = table.split_at_run_boundaries(3, 13);
        assert_eq!(segments.len(), 3);
        assert_eq!((segments[0].start, segments[0].end), (3, 5));
        assert_eq!(segments[0].run, Some(0));
        assert_eq!((segments[1].start, segments[1].end), (5, 11));
        assert_eq!(segments[1].run, Some(1));
        assert_eq!((segments[2].start, segments[2].end), (11, 13));
        assert_eq!(segments[2].run, Some(2));
    }

    #[test]
    fn test_split_empty_range() {
        let table = SpanTable::build(&three_run_paragraph());
        assert!(table.split_at_run_boundaries(5, 5).is_empty());
    }
}
