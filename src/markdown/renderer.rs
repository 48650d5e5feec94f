//! Markdown rendering through the configured extension pipeline.

use comrak::nodes::{AstNode, NodeHtmlBlock, NodeValue};
use comrak::{Arena, Options, format_html, parse_document};
use syntect::parsing::SyntaxSet;
use tracing::debug;

use super::admonition;
use super::highlight::render_code_block;
use super::toc::{Slugger, TocEntry, render_toc};
use super::{CodeHilite, ExtensionSet, Toc};

/// Renders markdown to an HTML fragment.
///
/// Parsing is delegated to comrak with options derived from the
/// [`ExtensionSet`]. Extensions comrak does not provide run as passes around
/// it: admonitions are expanded in the source, code blocks and headings are
/// rewritten in the AST, and the table of contents is built from the
/// collected headings.
pub struct MarkdownRenderer {
    extensions: ExtensionSet,
    options: Options<'static>,
    syntax_set: SyntaxSet,
}

impl MarkdownRenderer {
    /// Creates renderer for the given extension set.
    pub fn new(extensions: ExtensionSet) -> Self {
        let options = extensions.comrak_options();
        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            extensions,
            options,
            syntax_set,
        }
    }

    /// Renders markdown content to an HTML fragment.
    ///
    /// Rendering does not fail: unknown code languages render as plain text
    /// and highlighting errors fall back to escaped code.
    ///
    /// # Arguments
    ///
    /// * `content`: Markdown content to render
    ///
    /// # Returns
    ///
    /// HTML fragment with the table of contents, when enabled and the
    /// document has at least two headings or a `[TOC]` marker
    pub fn render(&self, content: &str) -> String {
        let source = if self.extensions.admonition() {
            admonition::expand(content)
        } else {
            content.to_string()
        };

        let arena = Arena::new();
        let root = parse_document(&arena, &source, &self.options);
        let nodes: Vec<_> = root.descendants().collect();

        if let Some(config) = self.extensions.code_hilite() {
            self.highlight_code_blocks(&nodes, config);
        }

        let toc = self
            .extensions
            .toc()
            .map(|config| (config, self.anchor_headings(&nodes, config)));

        let mut prefix = None;
        if let Some((config, entries)) = &toc {
            let block = render_toc(&config.title, entries);
            let markers = replace_toc_markers(&nodes, &config.marker, &block);
            debug!(headings = entries.len(), markers, "Built table of contents");

            if markers == 0 && entries.len() >= 2 {
                prefix = Some(block);
            }
        }

        let body = to_html(root, &self.options);
        match prefix {
            Some(block) => block + &body,
            None => body,
        }
    }

    /// Replaces every code block with highlighted HTML.
    fn highlight_code_blocks<'a>(&self, nodes: &[&'a AstNode<'a>], config: &CodeHilite) {
        for &node in nodes {
            let html = {
                let data = node.data.borrow();
                let NodeValue::CodeBlock(block) = &data.value else {
                    continue;
                };
                render_code_block(&block.literal, &block.info, config, &self.syntax_set)
            };

            node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal: html + "\n",
            });
        }
    }

    /// Assigns unique ids to headings and collects them for the contents.
    ///
    /// Each heading is rendered and replaced by raw HTML carrying its `id`,
    /// with the content wrapped in a self link when `anchorlink` is set.
    fn anchor_headings<'a>(&self, nodes: &[&'a AstNode<'a>], config: &Toc) -> Vec<TocEntry> {
        let mut slugger = Slugger::new();
        let mut entries = Vec::new();

        for &node in nodes {
            let level = match &node.data.borrow().value {
                NodeValue::Heading(heading) => heading.level,
                _ => continue,
            };

            let text = collect_inline_text(node);
            let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
            let slug = slugger.slug_for(&text);

            let rendered = to_html(node, &self.options);
            let inner = rendered
                .trim_end()
                .strip_prefix(&format!("<h{level}>"))
                .and_then(|rest| rest.strip_suffix(&format!("</h{level}>")))
                .unwrap_or(rendered.trim_end());

            let html = if config.anchorlink {
                format!(
                    "<h{level} id=\"{slug}\"><a class=\"toclink\" href=\"#{slug}\">{inner}</a></h{level}>\n"
                )
            } else {
                format!("<h{level} id=\"{slug}\">{inner}</h{level}>\n")
            };

            node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
                block_type: 0,
                literal: html,
            });
            while let Some(child) = node.first_child() {
                child.detach();
            }

            entries.push(TocEntry { level, slug, text });
        }

        entries
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new(ExtensionSet::default())
    }
}

/// Replaces paragraphs consisting solely of `marker` with `block`.
///
/// Returns the number of markers replaced.
fn replace_toc_markers<'a>(nodes: &[&'a AstNode<'a>], marker: &str, block: &str) -> usize {
    let mut replaced = 0;

    for &node in nodes {
        let is_marker = matches!(node.data.borrow().value, NodeValue::Paragraph)
            && paragraph_text(node).is_some_and(|text| text.trim() == marker);
        if !is_marker {
            continue;
        }

        node.data.borrow_mut().value = NodeValue::HtmlBlock(NodeHtmlBlock {
            block_type: 0,
            literal: block.to_string(),
        });
        while let Some(child) = node.first_child() {
            child.detach();
        }
        replaced += 1;
    }

    replaced
}

/// Text of a paragraph made only of text nodes.
fn paragraph_text<'a>(node: &'a AstNode<'a>) -> Option<String> {
    let mut text = String::new();
    for child in node.children() {
        match &child.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            _ => return None,
        }
    }
    Some(text)
}

fn collect_inline_text<'a>(node: &'a AstNode<'a>) -> String {
    let mut text = String::new();
    for descendant in node.descendants().skip(1) {
        match &descendant.data.borrow().value {
            NodeValue::Text(t) => text.push_str(t),
            NodeValue::Code(code) => text.push_str(&code.literal),
            NodeValue::LineBreak | NodeValue::SoftBreak => text.push(' '),
            _ => {}
        }
    }
    text
}

fn to_html<'a>(node: &'a AstNode<'a>, options: &Options<'_>) -> String {
    let mut html = Vec::new();
    format_html(node, options, &mut html).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&html).into_owned()
}
