//! Code block highlighting with syntect CSS classes.

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;
use tracing::warn;

use super::CodeHilite;
use crate::util::escape_html;

/// Renders a code block as highlighted HTML.
///
/// Produces `<div class="{css_class}"><pre><code>…</code></pre></div>`. With
/// line numbers enabled the block is placed in the right cell of a two column
/// table whose left cell lists the line numbers.
///
/// # Arguments
///
/// * `code`: Literal code block content
/// * `info`: Fence info string; the first word selects the language
/// * `config`: Highlighting options
/// * `syntax_set`: Loaded syntax definitions
///
/// # Returns
///
/// HTML markup for the block. Unknown languages render as plain text and
/// highlighting failures fall back to escaped text.
pub fn render_code_block(
    code: &str,
    info: &str,
    config: &CodeHilite,
    syntax_set: &SyntaxSet,
) -> String {
    let language = info.split_whitespace().next().unwrap_or("");

    let highlighted = highlight_code(code, language, syntax_set).unwrap_or_else(|err| {
        warn!(language, "Falling back to plain code block: {err}");
        escape_html(code)
    });

    let code_open = if language.is_empty() {
        "<code>".to_string()
    } else {
        format!(
            "<code class=\"language-{}\">",
            escape_html(&language.to_ascii_lowercase())
        )
    };

    let class = escape_html(&config.css_class);
    let block = format!("<div class=\"{class}\"><pre>{code_open}{highlighted}</code></pre></div>");

    if !config.linenums {
        return block;
    }

    let line_count = code.lines().count().max(1);
    let numbers: Vec<String> = (1..=line_count).map(|n| n.to_string()).collect();

    format!(
        "<table class=\"{class}table\"><tr><td class=\"linenos\"><div class=\"linenodiv\"><pre>{}</pre></div></td><td class=\"code\">{block}</td></tr></table>",
        numbers.join("\n")
    )
}

/// Highlights code with syntect using spaced scope classes.
fn highlight_code(
    code: &str,
    language: &str,
    syntax_set: &SyntaxSet,
) -> Result<String, syntect::Error> {
    if code.is_empty() {
        return Ok(String::new());
    }

    let syntax = find_syntax(syntax_set, language)
        .unwrap_or_else(|| syntax_set.find_syntax_plain_text());

    let mut generator =
        ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set, ClassStyle::Spaced);

    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }

    Ok(generator.finalize())
}

fn find_syntax<'a>(syntax_set: &'a SyntaxSet, token: &str) -> Option<&'a SyntaxReference> {
    if token.is_empty() {
        return None;
    }

    let lowercase = token.to_ascii_lowercase();
    syntax_set
        .find_syntax_by_token(&lowercase)
        .or_else(|| syntax_set.find_syntax_by_name(token))
        .or_else(|| syntax_set.find_syntax_by_extension(&lowercase))
}
