//! Heading anchors and table of contents generation.
//!
//! Slugs are ASCII: Chinese characters are transliterated to pinyin
//! (`pinyin` crate) before slugification (`slug` crate), so "快速开始"
//! becomes `kuai-su-kai-shi`.

use std::collections::{HashMap, HashSet};

use pinyin::ToPinyin;
use slug::slugify;

use crate::util::escape_html;

/// Slug used for headings without representable text.
const FALLBACK_SLUG: &str = "section";

/// Heading recorded for the table of contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocEntry {
    pub level: u8,
    pub slug: String,
    pub text: String,
}

/// Generates unique anchor slugs within a single document.
///
/// Duplicates receive monotonic suffixes (`intro`, `intro-2`, `intro-3`),
/// skipping any suffixed form another heading already produced.
#[derive(Debug, Default)]
pub struct Slugger {
    occurrences: HashMap<String, usize>,
    issued: HashSet<String>,
}

impl Slugger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a document unique slug for heading text.
    pub fn slug_for(&mut self, heading: &str) -> String {
        let base = derive_slug(heading);
        let count = self.occurrences.entry(base.clone()).or_insert(0);

        let slug = loop {
            *count += 1;
            let candidate = if *count == 1 {
                base.clone()
            } else {
                format!("{base}-{count}")
            };
            if !self.issued.contains(&candidate) {
                break candidate;
            }
        };

        self.issued.insert(slug.clone());
        slug
    }
}

fn derive_slug(heading: &str) -> String {
    let mut ascii = String::with_capacity(heading.len());

    for ch in heading.chars() {
        if ch.is_ascii() {
            ascii.push(ch);
            continue;
        }

        match ch.to_pinyin() {
            Some(py) => {
                if !ascii.is_empty() && !ascii.ends_with(' ') {
                    ascii.push(' ');
                }
                ascii.push_str(py.plain());
                ascii.push(' ');
            }
            None if ch.is_whitespace() => ascii.push(' '),
            None => ascii.push(ch),
        }
    }

    let slug = slugify(ascii.trim());
    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Renders the table of contents block.
///
/// Entries are nested by heading level; a heading deeper than its
/// predecessor opens a child list. A heading that is shallower than its
/// predecessor but still deeper than the enclosing parent stays in the
/// current list, so `h1 h3 h2` places the `h2` beside the `h3`.
///
/// # Arguments
///
/// * `title`: Text of the `toctitle` span, omitted when empty
/// * `entries`: Headings in document order
pub fn render_toc(title: &str, entries: &[TocEntry]) -> String {
    let mut html = String::from("<div class=\"toc\">");
    if !title.is_empty() {
        html.push_str("<span class=\"toctitle\">");
        html.push_str(&escape_html(title));
        html.push_str("</span>");
    }

    let mut stack: Vec<u8> = Vec::new();

    for entry in entries {
        match stack.last().copied() {
            None => {
                html.push_str("<ul>\n<li>");
                stack.push(entry.level);
            }
            Some(top) if entry.level > top => {
                html.push_str("\n<ul>\n<li>");
                stack.push(entry.level);
            }
            Some(_) => {
                while stack.len() > 1 && entry.level <= stack[stack.len() - 2] {
                    html.push_str("</li>\n</ul>\n");
                    stack.pop();
                }
                if let Some(top) = stack.last_mut() {
                    *top = entry.level;
                }
                html.push_str("</li>\n<li>");
            }
        }

        html.push_str("<a href=\"#");
        html.push_str(&escape_html(&entry.slug));
        html.push_str("\">");
        html.push_str(&escape_html(&entry.text));
        html.push_str("</a>");
    }

    for _ in &stack {
        html.push_str("</li>\n</ul>\n");
    }

    html.push_str("</div>\n");
    html
}
