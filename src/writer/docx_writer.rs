//! DOCX document writer using zip and quick-xml.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::{Error, Result};
use crate::model::{Document, Paragraph, ParagraphStyle, TextRun, TextStyle};

const WORDPROCESSINGML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">\
<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>\
<Default Extension=\"xml\" ContentType=\"application/xml\"/>\
<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>\
</Types>";

const ROOT_RELS_XML: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\
<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>\
</Relationships>";

/// DOCX document writer.
///
/// Serializes a [`Document`] into a minimal OPC package: content types,
/// package relationships, and the main document part. The whole package is
/// built in memory, so a failed synthesis never leaves a partial file on
/// disk.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxWriter;

impl DocxWriter {
    /// Create a new writer.
    pub fn new() -> Self {
        Self
    }

    /// Serialize a document into DOCX bytes.
    pub fn write(&self, document: &Document) -> Result<Vec<u8>> {
        let document_xml = self.document_part(document)?;

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options)?;
        zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

        zip.start_file("_rels/.rels", options)?;
        zip.write_all(ROOT_RELS_XML.as_bytes())?;

        zip.start_file("word/document.xml", options)?;
        zip.write_all(document_xml.as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Serialize a document and write it to a file in one step.
    pub fn save<P: AsRef<Path>>(&self, document: &Document, path: P) -> Result<()> {
        let bytes = self.write(document)?;
        fs::write(path, bytes)?;
        Ok(())
    }

    /// Build the `word/document.xml` part.
    fn document_part(&self, document: &Document) -> Result<String> {
        let mut writer = Writer::new(Cursor::new(Vec::new()));

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;

        let mut root = BytesStart::new("w:document");
        root.push_attribute(("xmlns:w", WORDPROCESSINGML_NS));
        writer.write_event(Event::Start(root))?;
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        for paragraph in &document.paragraphs {
            self.write_paragraph(&mut writer, paragraph)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        writer.write_event(Event::End(BytesEnd::new("w:document")))?;

        let bytes = writer.into_inner().into_inner();
        String::from_utf8(bytes).map_err(|e| Error::Write(e.to_string()))
    }

    fn write_paragraph(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        paragraph: &Paragraph,
    ) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:p")))?;
        self.write_paragraph_props(writer, &paragraph.style)?;
        for run in &paragraph.runs {
            self.write_run(writer, run)?;
        }
        writer.write_event(Event::End(BytesEnd::new("w:p")))?;
        Ok(())
    }

    fn write_paragraph_props(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        style: &ParagraphStyle,
    ) -> Result<()> {
        let has_props = style.alignment.is_some()
            || style.first_line_indent.is_some()
            || style.space_before.is_some()
            || style.space_after.is_some();
        if !has_props {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;

        // Child order follows the CT_PPr schema sequence: spacing, ind, jc.
        if style.space_before.is_some() || style.space_after.is_some() {
            let mut spacing = BytesStart::new("w:spacing");
            if let Some(before) = style.space_before {
                spacing.push_attribute(("w:before", before.to_string().as_str()));
            }
            if let Some(after) = style.space_after {
                spacing.push_attribute(("w:after", after.to_string().as_str()));
            }
            writer.write_event(Event::Empty(spacing))?;
        }

        if let Some(indent) = style.first_line_indent {
            let mut ind = BytesStart::new("w:ind");
            ind.push_attribute(("w:firstLine", indent.to_string().as_str()));
            writer.write_event(Event::Empty(ind))?;
        }

        if let Some(alignment) = style.alignment {
            let mut jc = BytesStart::new("w:jc");
            jc.push_attribute(("w:val", alignment.as_docx()));
            writer.write_event(Event::Empty(jc))?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        Ok(())
    }

    fn write_run(&self, writer: &mut Writer<Cursor<Vec<u8>>>, run: &TextRun) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:r")))?;
        self.write_run_props(writer, &run.style)?;

        // Tabs and line breaks are elements in WordprocessingML, so the
        // text is emitted as alternating w:t / w:tab / w:br children.
        for piece in split_inline_text(&run.text) {
            match piece {
                InlinePiece::Text(text) => {
                    let mut t = BytesStart::new("w:t");
                    t.push_attribute(("xml:space", "preserve"));
                    writer.write_event(Event::Start(t))?;
                    writer.write_event(Event::Text(BytesText::new(text)))?;
                    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
                }
                InlinePiece::Tab => {
                    writer.write_event(Event::Empty(BytesStart::new("w:tab")))?;
                }
                InlinePiece::Break => {
                    writer.write_event(Event::Empty(BytesStart::new("w:br")))?;
                }
            }
        }

        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
        Ok(())
    }

    fn write_run_props(
        &self,
        writer: &mut Writer<Cursor<Vec<u8>>>,
        style: &TextStyle,
    ) -> Result<()> {
        let has_props = style.bold.is_some()
            || style.italic.is_some()
            || style.underline.is_some()
            || style.font_name.is_some()
            || style.font_size.is_some();
        if !has_props {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;

        if let Some(font_name) = &style.font_name {
            let mut fonts = BytesStart::new("w:rFonts");
            fonts.push_attribute(("w:ascii", font_name.as_str()));
            fonts.push_attribute(("w:hAnsi", font_name.as_str()));
            writer.write_event(Event::Empty(fonts))?;
        }

        if let Some(bold) = style.bold {
            writer.write_event(Event::Empty(toggle_element("w:b", bold)))?;
        }
        if let Some(italic) = style.italic {
            writer.write_event(Event::Empty(toggle_element("w:i", italic)))?;
        }

        if let Some(size) = style.font_size {
            let half_points = ((size * 2.0).round() as i64).to_string();
            let mut sz = BytesStart::new("w:sz");
            sz.push_attribute(("w:val", half_points.as_str()));
            writer.write_event(Event::Empty(sz))?;
            let mut sz_cs = BytesStart::new("w:szCs");
            sz_cs.push_attribute(("w:val", half_points.as_str()));
            writer.write_event(Event::Empty(sz_cs))?;
        }

        if let Some(underline) = style.underline {
            let mut u = BytesStart::new("w:u");
            u.push_attribute(("w:val", if underline { "single" } else { "none" }));
            writer.write_event(Event::Empty(u))?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
        Ok(())
    }
}

fn toggle_element(name: &'static str, enabled: bool) -> BytesStart<'static> {
    let mut element = BytesStart::new(name);
    if !enabled {
        element.push_attribute(("w:val", "0"));
    }
    element
}

enum InlinePiece<'a> {
    Text(&'a str),
    Tab,
    Break,
}

/// Split run text into w:t segments and tab/break elements.
fn split_inline_text(text: &str) -> Vec<InlinePiece<'_>> {
    let mut pieces = Vec::new();
    let mut segment_start = 0;
    for (index, ch) in text.char_indices() {
        if ch == '\t' || ch == '\n' {
            if index > segment_start {
                pieces.push(InlinePiece::Text(&text[segment_start..index]));
            }
            pieces.push(if ch == '\t' {
                InlinePiece::Tab
            } else {
                InlinePiece::Break
            });
            segment_start = index + ch.len_utf8();
        }
    }
    if segment_start < text.len() {
        pieces.push(InlinePiece::Text(&text[segment_start..]));
    }
    pieces
}
