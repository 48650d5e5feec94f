//! Markdown rendering with a configurable extension pipeline.
//!
//! This module renders markdown using comrak, extended with code
//! highlighting (syntect, optional line numbers), heading anchors with a
//! generated table of contents, and admonition blocks.

mod admonition;
mod extensions;
mod highlight;
mod renderer;
mod toc;

pub use extensions::{
    CodeHilite, DEFAULT_CODE_CLASS, DEFAULT_TOC_MARKER, DEFAULT_TOC_TITLE, Extension,
    ExtensionSet, Toc,
};
pub use renderer::MarkdownRenderer;
pub use toc::{Slugger, TocEntry};
