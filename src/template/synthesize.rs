//! Document synthesizer: placeholder substitution with formatting preserved.

use std::collections::HashMap;

use crate::model::{Document, Paragraph, TextRun, TextStyle};

use super::fields::find_placeholders;
use super::options::{MissingField, SynthesizeOptions};
use super::spans::SpanTable;
use super::style_copy::copy_text_style;

/// Replacement values keyed by trimmed field name.
pub type FieldValues = HashMap<String, String>;

/// Build a new document from a template with placeholders substituted.
///
/// The template is never mutated; the result is a freshly constructed
/// document with one output paragraph per template paragraph. Replacement
/// text inherits the formatting of the run containing the placeholder's
/// opening bracket. Placeholders whose field has no entry in `values`
/// follow `options.missing_field`: by default the bracketed token is
/// silently dropped from the output.
pub fn synthesize_document(
    template: &Document,
    values: &FieldValues,
    options: &SynthesizeOptions,
) -> Document {
    let mut output = Document::new();
    for paragraph in &template.paragraphs {
        output.add_paragraph(synthesize_paragraph(paragraph, values, options));
    }
    output
}

fn synthesize_paragraph(
    source: &Paragraph,
    values: &FieldValues,
    options: &SynthesizeOptions,
) -> Paragraph {
    let mut output = Paragraph::new();

    output.style.alignment = source.style.alignment;
    // Cosmetic spacing attributes carry over only when set and non-zero.
    output.style.first_line_indent = source.style.first_line_indent.filter(|v| *v != 0);
    output.style.space_before = source.style.space_before.filter(|v| *v != 0);
    output.style.space_after = source.style.space_after.filter(|v| *v != 0);

    let table = SpanTable::build(source);
    let placeholders = find_placeholders(table.text());

    if placeholders.is_empty() {
        // Exact pass-through: every run copied in order.
        for run in &source.runs {
            output.add_run(TextRun::styled(run.text.clone(), inherit_style(&run.style)));
        }
        return output;
    }

    let mut cursor = 0;
    for placeholder in &placeholders {
        if placeholder.start > cursor {
            emit_gap(&mut output, source, &table, cursor, placeholder.start);
        }

        match values.get(&placeholder.name) {
            Some(value) => {
                let style = match table.run_at(placeholder.start) {
                    Some(run) => inherit_style(&source.runs[run].style),
                    None => TextStyle::default(),
                };
                output.add_run(TextRun::styled(value.clone(), style));
            }
            None => match options.missing_field {
                MissingField::Omit => {}
                MissingField::KeepPlaceholder => {
                    emit_gap(&mut output, source, &table, placeholder.start, placeholder.end);
                }
            },
        }

        cursor = placeholder.end;
    }

    if cursor < table.text().len() {
        emit_gap(&mut output, source, &table, cursor, table.text().len());
    }

    output
}

/// Emit the text between placeholders, split at run boundaries so each new
/// run carries the formatting of the original run that owned its offsets.
fn emit_gap(output: &mut Paragraph, source: &Paragraph, table: &SpanTable, start: usize, end: usize) {
    for segment in table.split_at_run_boundaries(start, end) {
        let style = match segment.run {
            Some(run) => inherit_style(&source.runs[run].style),
            None => TextStyle::default(),
        };
        output.add_run(TextRun::styled(
            table.text()[segment.start..segment.end].to_string(),
            style,
        ));
    }
}

fn inherit_style(source: &TextStyle) -> TextStyle {
    let (style, issues) = copy_text_style(source);
    for issue in issues {
        log::warn!("Skipped formatting attribute while copying run: {}", issue);
    }
    style
}
