//! Stylesheet and script assets embedded in every page

/// Default page stylesheet.
pub const PAGE_CSS: &str = include_str!("../assets/page.css");

/// Client side enhancements run at page load: wraps tables for horizontal
/// scrolling and marks links to other hosts as external.
pub const ENHANCE_JS: &str = include_str!("../assets/enhance.js");

/// highlight.js stylesheet served from cdnjs.
pub const HIGHLIGHT_CSS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.8.0/styles/github.min.css";

/// highlight.js script served from cdnjs.
pub const HIGHLIGHT_JS_URL: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.8.0/highlight.min.js";

/// Inline call that triggers highlight.js on load.
pub const HIGHLIGHT_INIT_JS: &str = "hljs.highlightAll();";
