//! Rendering module for template previews.

mod html;
mod options;

pub use html::to_html;
pub use options::RenderOptions;
