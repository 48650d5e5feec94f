//! Markdown to standalone HTML page converter.

mod assets;
mod config;
mod convert;
mod markdown;
pub mod page;
mod util;

pub use assets::{HIGHLIGHT_CSS_URL, HIGHLIGHT_JS_URL};
pub use config::Config;
pub use convert::{ConvertError, Converter, convert, default_title};
pub use markdown::{
    CodeHilite, DEFAULT_CODE_CLASS, DEFAULT_TOC_MARKER, DEFAULT_TOC_TITLE, Extension,
    ExtensionSet, MarkdownRenderer, Slugger, Toc, TocEntry,
};
pub use util::escape_html;
