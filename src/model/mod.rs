//! Document model types for WordprocessingML content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! DOCX parsing, template substitution, and output rendering. Only the
//! paragraph/run structure relevant to template filling is modeled;
//! everything else in the source package is ignored.

mod document;
mod paragraph;

pub use document::Document;
pub use paragraph::{Alignment, Paragraph, ParagraphStyle, TextRun, TextStyle};
