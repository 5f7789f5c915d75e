//! DOCX document parser using zip and quick-xml.

use std::fs::File;
use std::io::{Cursor, Read};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use zip::result::ZipError;
use zip::ZipArchive;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Alignment, Document, Paragraph, TextRun};

/// Main document part inside the OPC package.
const DOCUMENT_PART: &str = "word/document.xml";

/// DOCX document parser.
///
/// Opens the OPC container, pulls out `word/document.xml`, and parses the
/// WordprocessingML body into a [`Document`]. Only body-level paragraphs
/// are collected; content nested inside tables is skipped, and unknown
/// markup is ignored rather than rejected.
pub struct DocxParser {
    document_xml: String,
}

impl DocxParser {
    /// Open a DOCX file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Parse a DOCX from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let mut archive = ZipArchive::new(Cursor::new(data))?;
        let mut part = match archive.by_name(DOCUMENT_PART) {
            Ok(part) => part,
            Err(ZipError::FileNotFound) => {
                return Err(Error::MissingPart(DOCUMENT_PART.to_string()))
            }
            Err(e) => return Err(e.into()),
        };

        let mut document_xml = String::new();
        part.read_to_string(&mut document_xml)?;
        Ok(Self { document_xml })
    }

    /// Parse a DOCX from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Parse the document body and return a structured Document.
    pub fn parse(&self) -> Result<Document> {
        parse_document_xml(&self.document_xml)
    }
}

/// Parse the WordprocessingML main part into the document model.
fn parse_document_xml(xml: &str) -> Result<Document> {
    let mut reader = Reader::from_str(xml);
    let mut builder = BodyBuilder::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => builder.start(&e)?,
            Event::Empty(e) => builder.empty(&e)?,
            Event::End(e) => builder.end(e.name().as_ref()),
            Event::Text(t) => {
                if builder.in_text {
                    let text = t.unescape()?;
                    builder.push_text(&text);
                }
            }
            Event::CData(t) => {
                if builder.in_text {
                    let text = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    builder.push_text(&text);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(builder.document)
}

/// Streaming state for the body parse.
#[derive(Default)]
struct BodyBuilder {
    document: Document,
    paragraph: Option<Paragraph>,
    run: Option<TextRun>,
    in_paragraph_props: bool,
    in_run_props: bool,
    in_text: bool,
    table_depth: usize,
}

impl BodyBuilder {
    fn start(&mut self, element: &BytesStart) -> Result<()> {
        match element.name().as_ref() {
            b"w:tbl" => self.table_depth += 1,
            b"w:p" if self.table_depth == 0 => self.paragraph = Some(Paragraph::new()),
            b"w:pPr" => self.in_paragraph_props = true,
            b"w:rPr" => self.in_run_props = true,
            b"w:r" if self.table_depth == 0 => {
                if self.paragraph.is_some() {
                    self.run = Some(TextRun::new(""));
                }
            }
            b"w:t" => {
                if self.run.is_some() && !self.in_run_props {
                    self.in_text = true;
                }
            }
            _ => self.apply_property(element)?,
        }
        Ok(())
    }

    fn empty(&mut self, element: &BytesStart) -> Result<()> {
        match element.name().as_ref() {
            b"w:p" if self.table_depth == 0 => self.document.add_paragraph(Paragraph::new()),
            b"w:r" if self.table_depth == 0 => {
                if let Some(paragraph) = self.paragraph.as_mut() {
                    paragraph.add_run(TextRun::new(""));
                }
            }
            b"w:tbl" | b"w:t" => {}
            _ => self.apply_property(element)?,
        }
        Ok(())
    }

    fn end(&mut self, name: &[u8]) {
        match name {
            b"w:tbl" => self.table_depth = self.table_depth.saturating_sub(1),
            b"w:p" => {
                if self.table_depth == 0 {
                    if let Some(paragraph) = self.paragraph.take() {
                        self.document.add_paragraph(paragraph);
                    }
                }
            }
            b"w:pPr" => self.in_paragraph_props = false,
            b"w:rPr" => self.in_run_props = false,
            b"w:r" => {
                if let Some(run) = self.run.take() {
                    if let Some(paragraph) = self.paragraph.as_mut() {
                        paragraph.add_run(run);
                    }
                }
            }
            b"w:t" => self.in_text = false,
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }

    /// Handle property and inline-content elements, Start or Empty alike.
    fn apply_property(&mut self, element: &BytesStart) -> Result<()> {
        let name = element.name();
        let name = name.as_ref();

        if self.in_paragraph_props && !self.in_run_props {
            if let Some(paragraph) = self.paragraph.as_mut() {
                match name {
                    b"w:jc" => {
                        if let Some(value) = attr_value(element, b"w:val")? {
                            paragraph.style.alignment = Alignment::from_docx(&value);
                        }
                    }
                    b"w:ind" => {
                        if let Some(value) = attr_value(element, b"w:firstLine")? {
                            paragraph.style.first_line_indent = value.parse().ok();
                        }
                    }
                    b"w:spacing" => {
                        if let Some(value) = attr_value(element, b"w:before")? {
                            paragraph.style.space_before = value.parse().ok();
                        }
                        if let Some(value) = attr_value(element, b"w:after")? {
                            paragraph.style.space_after = value.parse().ok();
                        }
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        if self.in_run_props {
            if let Some(run) = self.run.as_mut() {
                match name {
                    b"w:b" => run.style.bold = Some(toggle_value(attr_value(element, b"w:val")?)),
                    b"w:i" => run.style.italic = Some(toggle_value(attr_value(element, b"w:val")?)),
                    b"w:u" => {
                        run.style.underline = Some(toggle_value(attr_value(element, b"w:val")?))
                    }
                    b"w:rFonts" => {
                        if let Some(value) = attr_value(element, b"w:ascii")? {
                            run.style.font_name = Some(value);
                        }
                    }
                    b"w:sz" => {
                        if let Some(value) = attr_value(element, b"w:val")? {
                            // Stored in half-points
                            if let Ok(half_points) = value.parse::<f32>() {
                                run.style.font_size = Some(half_points / 2.0);
                            }
                        }
                    }
                    _ => {}
                }
            }
            return Ok(());
        }

        if let Some(run) = self.run.as_mut() {
            match name {
                b"w:tab" => run.text.push('\t'),
                b"w:br" | b"w:cr" => run.text.push('\n'),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Look up an attribute value by qualified name.
fn attr_value(element: &BytesStart, name: &[u8]) -> Result<Option<String>> {
    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::Xml(e.to_string()))?;
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Interpret an OOXML on/off value: absent means enabled.
fn toggle_value(value: Option<String>) -> bool {
    !matches!(value.as_deref(), Some("0") | Some("false") | Some("none"))
}
