//! Template engine: placeholder discovery and document synthesis.
//!
//! A template is an ordinary DOCX document whose body text contains
//! bracketed placeholders such as `[Nome]` or `[Data]`. Placeholders are
//! matched against the flattened plain text of each paragraph, so a single
//! placeholder may span several formatted runs. The engine locates every
//! placeholder, reports the deduplicated field list, and builds a fresh
//! document with the placeholders replaced while the surrounding run
//! formatting is preserved.

mod fields;
mod options;
mod spans;
mod style_copy;
mod synthesize;

pub use fields::{find_placeholders, scan_fields, Placeholder};
pub use options::{MissingField, SynthesizeOptions};
pub use spans::{GapSegment, RunSpan, SpanTable};
pub use style_copy::{copy_text_style, CopyIssue};
pub use synthesize::{synthesize_document, FieldValues};
