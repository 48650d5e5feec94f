//! Standalone HTML page shell

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::assets::{ENHANCE_JS, HIGHLIGHT_CSS_URL, HIGHLIGHT_INIT_JS, HIGHLIGHT_JS_URL, PAGE_CSS};

/// Suffix appended to page titles.
pub const TITLE_SUFFIX: &str = " - Markdown 转换";

/// Wraps a rendered fragment in a complete HTML5 document
///
/// The head carries charset and viewport metadata, the embedded default
/// stylesheet, an optional caller stylesheet, and highlight.js from the CDN.
/// The fragment is inserted unescaped inside `div.markdown-body`, followed by
/// the enhancement script.
///
/// # Arguments
///
/// * `title`: Page title text
/// * `stylesheet`: Optional extra stylesheet path or URL, never checked
/// * `fragment`: Rendered HTML fragment
///
/// # Returns
///
/// Complete HTML document markup
pub fn document(title: &str, stylesheet: Option<&str>, fragment: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="zh-CN" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (PreEscaped(PAGE_CSS)) }
                @if let Some(href) = stylesheet {
                    link rel="stylesheet" href=(href);
                }
                link rel="stylesheet" href=(HIGHLIGHT_CSS_URL);
                script src=(HIGHLIGHT_JS_URL) {}
                script { (PreEscaped(HIGHLIGHT_INIT_JS)) }
            }
            body {
                div class="markdown-body" {
                    (PreEscaped(fragment))
                }
                script { (PreEscaped(ENHANCE_JS)) }
            }
        }
    }
}
