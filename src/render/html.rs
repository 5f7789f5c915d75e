//! HTML preview rendering with highlighted placeholders.

use crate::error::Result;
use crate::model::{Document, Paragraph, TextStyle};
use crate::template::{find_placeholders, SpanTable};

use super::RenderOptions;

/// Render a document as styled HTML with placeholders highlighted.
///
/// Each paragraph becomes a `<p>` tag carrying its text alignment. Text
/// between placeholders keeps its run formatting as inline styles, and
/// every placeholder token is wrapped in a highlighted span. Paragraph
/// fragments are joined with newlines.
pub fn to_html(document: &Document, options: &RenderOptions) -> Result<String> {
    let fragments: Vec<String> = document
        .paragraphs
        .iter()
        .map(|paragraph| render_paragraph(paragraph, options))
        .collect();
    Ok(fragments.join("\n"))
}

fn render_paragraph(paragraph: &Paragraph, options: &RenderOptions) -> String {
    let alignment = paragraph.style.alignment.unwrap_or_default();
    let mut html = format!("<p style=\"text-align: {};\">", alignment.as_css());

    let table = SpanTable::build(paragraph);
    let text = table.text();

    let mut cursor = 0;
    for placeholder in find_placeholders(text) {
        if placeholder.start > cursor {
            render_gap(&mut html, paragraph, &table, cursor, placeholder.start);
        }
        html.push_str(&format!(
            "<span style=\"background-color: {}; padding: 0 2px;\">{}</span>",
            options.highlight_color,
            escape_html(&text[placeholder.start..placeholder.end])
        ));
        cursor = placeholder.end;
    }
    if cursor < text.len() {
        render_gap(&mut html, paragraph, &table, cursor, text.len());
    }

    html.push_str("</p>");
    html
}

/// Render the text between placeholders, one styled span per run segment.
fn render_gap(html: &mut String, paragraph: &Paragraph, table: &SpanTable, start: usize, end: usize) {
    for segment in table.split_at_run_boundaries(start, end) {
        let escaped = escape_html(&table.text()[segment.start..segment.end]);
        let declarations = match segment.run {
            Some(run) => style_declarations(&paragraph.runs[run].style),
            None => Vec::new(),
        };
        if declarations.is_empty() {
            html.push_str(&escaped);
        } else {
            html.push_str(&format!(
                "<span style=\"{}\">{}</span>",
                declarations.join("; "),
                escaped
            ));
        }
    }
}

fn style_declarations(style: &TextStyle) -> Vec<&'static str> {
    let mut declarations = Vec::new();
    if style.bold == Some(true) {
        declarations.push("font-weight: bold");
    }
    if style.italic == Some(true) {
        declarations.push("font-style: italic");
    }
    if style.underline == Some(true) {
        declarations.push("text-decoration: underline");
    }
    declarations
}

/// Escape text for inclusion in HTML markup.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Alignment, TextRun};

    fn render(doc: &Document) -> String {
        to_html(doc, &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_paragraph_alignment_defaults_to_left() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("hello"));

        let html = render(&doc);
        assert_eq!(html, "<p style=\"text-align: left;\">hello</p>");
    }

    #[test]
    fn test_paragraph_alignment_keyword() {
        let mut para = Paragraph::with_text("centered");
        para.style.alignment = Some(Alignment::Center);
        let mut doc = Document::new();
        doc.add_paragraph(para);

        assert!(render(&doc).starts_with("<p style=\"text-align: center;\">"));
    }

    #[test]
    fn test_placeholder_is_highlighted() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Dear [Name]!"));

        let html = render(&doc);
        assert!(html.contains(
            "<span style=\"background-color: #FFFF00; padding: 0 2px;\">[Name]</span>"
        ));
        assert!(html.contains("Dear "));
    }

    #[test]
    fn test_custom_highlight_color() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("[X]"));

        let options = RenderOptions::new().with_highlight_color("#00FF00");
        let html = to_html(&doc, &options).unwrap();
        assert!(html.contains("background-color: #00FF00;"));
    }

    #[test]
    fn test_styled_run_wrapped_in_span() {
        let mut para = Paragraph::new();
        para.add_run(TextRun::styled(
            "bold text",
            TextStyle {
                bold: Some(true),
                underline: Some(true),
                ..Default::default()
            },
        ));
        let mut doc = Document::new();
        doc.add_paragraph(para);

        let html = render(&doc);
        assert!(html.contains(
            "<span style=\"font-weight: bold; text-decoration: underline\">bold text</span>"
        ));
    }

    #[test]
    fn test_unstyled_run_has_no_span() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("plain"));

        assert_eq!(render(&doc), "<p style=\"text-align: left;\">plain</p>");
    }

    #[test]
    fn test_explicitly_disabled_toggle_renders_plain() {
        let mut para = Paragraph::new();
        para.add_run(TextRun::styled(
            "not bold",
            TextStyle {
                bold: Some(false),
                ..Default::default()
            },
        ));
        let mut doc = Document::new();
        doc.add_paragraph(para);

        assert!(!render(&doc).contains("font-weight"));
    }

    #[test]
    fn test_html_escaping() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("a < b & c > d [x<y]"));

        let html = render(&doc);
        assert!(html.contains("a &lt; b &amp; c &gt; d "));
        assert!(html.contains("[x&lt;y]"));
        assert!(!html.contains("<y]"));
    }

    #[test]
    fn test_paragraphs_joined_with_newline() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("one"));
        doc.add_paragraph(Paragraph::with_text("two"));

        let html = render(&doc);
        assert_eq!(html.matches("<p ").count(), 2);
        assert!(html.contains("</p>\n<p "));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_html("\"x'\""), "&quot;x&#x27;&quot;");
    }
}
