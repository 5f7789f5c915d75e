//! # minuta
//!
//! DOCX template filling library for Rust.
//!
//! This library locates bracketed placeholder fields (`[Nome]`, `[Data]`)
//! inside a `.docx` template, renders the template as styled HTML for
//! preview, and produces a new document with placeholders substituted
//! while the original run-level formatting (bold/italic/underline/font)
//! is preserved.
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! fn main() -> minuta::Result<()> {
//!     // Discover fields and render a highlighted preview
//!     let extraction = minuta::extract("templates/contrato.docx")?;
//!     println!("fields: {:?}", extraction.fields);
//!
//!     // Fill the template and write the generated document
//!     let mut values = HashMap::new();
//!     values.insert("Nome".to_string(), "Ana".to_string());
//!     let path = minuta::synthesize("templates/contrato.docx", &values)?;
//!     println!("generated: {}", path.display());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Field discovery**: deduplicated placeholder names in first-occurrence order
//! - **HTML preview**: paragraph alignment and run styling as inline CSS,
//!   placeholders highlighted
//! - **Formatting-preserving substitution**: replacement text inherits the
//!   formatting of the run that contained the placeholder
//! - **Timestamped output**: generated files never overwrite each other

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod store;
pub mod template;
pub mod writer;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_docx, is_docx_bytes};
pub use error::{Error, Result};
pub use model::{Alignment, Document, Paragraph, ParagraphStyle, TextRun, TextStyle};
pub use parser::DocxParser;
pub use render::{to_html, RenderOptions};
pub use store::TemplateStore;
pub use template::{
    find_placeholders, scan_fields, synthesize_document, CopyIssue, FieldValues, MissingField,
    Placeholder, SynthesizeOptions,
};
pub use writer::DocxWriter;

use std::path::{Path, PathBuf};

/// Result of field extraction: the discovered fields and the HTML preview.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Unique placeholder names in first-occurrence order
    pub fields: Vec<String>,

    /// HTML rendering of the template with placeholders highlighted
    pub rendered_html: String,
}

/// Parse a DOCX file and return a structured document.
///
/// # Example
///
/// ```no_run
/// let doc = minuta::parse_file("templates/contrato.docx").unwrap();
/// println!("paragraphs: {}", doc.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    DocxParser::open(path)?.parse()
}

/// Parse a DOCX from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    DocxParser::from_bytes(data)?.parse()
}

/// Extract placeholder fields and the highlighted HTML preview.
///
/// Scans the whole document once for the field list, then renders every
/// paragraph with its run formatting and highlighted placeholder tokens.
pub fn extract<P: AsRef<Path>>(path: P) -> Result<Extraction> {
    let document = parse_file(path)?;
    extract_document(&document, &RenderOptions::default())
}

/// Extract fields and preview from DOCX bytes.
pub fn extract_bytes(data: &[u8]) -> Result<Extraction> {
    let document = parse_bytes(data)?;
    extract_document(&document, &RenderOptions::default())
}

fn extract_document(document: &Document, options: &RenderOptions) -> Result<Extraction> {
    Ok(Extraction {
        fields: scan_fields(document),
        rendered_html: to_html(document, options)?,
    })
}

/// Fill a template and write the generated document.
///
/// Substitutes every placeholder that has an entry in `values` (missing
/// fields are silently dropped), writes the result into the `generated/`
/// directory next to the current working directory, and returns the path
/// of the new file.
pub fn synthesize<P: AsRef<Path>>(template_path: P, values: &FieldValues) -> Result<PathBuf> {
    let document = parse_file(template_path)?;
    let output = synthesize_document(&document, values, &SynthesizeOptions::default());
    TemplateStore::new(".").save_generated(&output)
}

/// Builder for opening and filling DOCX templates.
///
/// # Example
///
/// ```no_run
/// use std::collections::HashMap;
///
/// let template = minuta::Minuta::new()
///     .with_highlight_color("#FFE066")
///     .keep_missing_fields()
///     .open("templates/contrato.docx")?;
///
/// println!("{}", template.to_html()?);
/// let path = template.fill_to_file(&HashMap::new())?;
/// # Ok::<(), minuta::Error>(())
/// ```
pub struct Minuta {
    render_options: RenderOptions,
    synthesize_options: SynthesizeOptions,
    output_dir: Option<PathBuf>,
}

impl Minuta {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
            synthesize_options: SynthesizeOptions::default(),
            output_dir: None,
        }
    }

    /// Set the placeholder highlight color used in previews.
    pub fn with_highlight_color(mut self, color: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_highlight_color(color);
        self
    }

    /// Keep the literal `[Name]` text for fields with no supplied value
    /// instead of dropping it.
    pub fn keep_missing_fields(mut self) -> Self {
        self.synthesize_options = self.synthesize_options.keep_missing();
        self
    }

    /// Set the directory generated documents are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// Open and parse a template file.
    pub fn open<P: AsRef<Path>>(self, path: P) -> Result<MinutaTemplate> {
        let document = parse_file(path)?;
        Ok(self.into_template(document))
    }

    /// Open and parse a template from bytes.
    pub fn open_bytes(self, data: &[u8]) -> Result<MinutaTemplate> {
        let document = parse_bytes(data)?;
        Ok(self.into_template(document))
    }

    fn into_template(self, document: Document) -> MinutaTemplate {
        MinutaTemplate {
            document,
            render_options: self.render_options,
            synthesize_options: self.synthesize_options,
            output_dir: self.output_dir,
        }
    }
}

impl Default for Minuta {
    fn default() -> Self {
        Self::new()
    }
}

/// A parsed template ready for preview and filling.
pub struct MinutaTemplate {
    document: Document,
    render_options: RenderOptions,
    synthesize_options: SynthesizeOptions,
    output_dir: Option<PathBuf>,
}

impl MinutaTemplate {
    /// The parsed template document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Unique placeholder names in first-occurrence order.
    pub fn fields(&self) -> Vec<String> {
        scan_fields(&self.document)
    }

    /// Render the highlighted HTML preview.
    pub fn to_html(&self) -> Result<String> {
        to_html(&self.document, &self.render_options)
    }

    /// Build a new document with placeholders substituted.
    pub fn fill(&self, values: &FieldValues) -> Document {
        synthesize_document(&self.document, values, &self.synthesize_options)
    }

    /// Fill the template and write the result to the output directory.
    pub fn fill_to_file(&self, values: &FieldValues) -> Result<PathBuf> {
        let output = self.fill(values);
        let output_dir = self
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("generated"));
        let store = TemplateStore::with_dirs(PathBuf::from("templates"), output_dir);
        store.save_generated(&output)
    }
}
