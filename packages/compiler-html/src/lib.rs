//! HTML export for Pagesmith documents.
//!
//! [`render_body`] turns a tree into markup; [`compile_to_html`] wraps that
//! markup in a standalone page with a responsive stylesheet.

mod compiler;
mod document;


pub use compiler::{escape_html, render_body, render_node, style_to_css, tag_name, to_dashed, CompileOptions};
pub use document::{compile_to_html, ExportArtifact, ExportOptions};

use thiserror::Error;

/// Errors that can occur during HTML export
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompileError {
    #[error("Invalid export file name: {0:?}")]
    InvalidFileName(String),

    #[error("Invalid responsive breakpoint: {0}px")]
    InvalidBreakpoint(u32),
}
