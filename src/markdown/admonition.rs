//! Admonition (callout) blocks.
//!
//! Rewrites `!!! type "Title"` blocks into raw HTML `div` wrappers before the
//! document reaches comrak. The indented body is dedented and surrounded by
//! blank lines so comrak still parses it as Markdown:
//!
//! ```text
//! !!! warning "Careful"
//!     Body with **markdown**.
//! ```
//!
//! becomes
//!
//! ```text
//! <div class="admonition warning">
//! <p class="admonition-title">Careful</p>
//!
//! Body with **markdown**.
//!
//! </div>
//! ```

use crate::util::{capitalize, escape_html};

const OPENER: &str = "!!!";

/// Parsed `!!!` header line.
#[derive(Debug, PartialEq, Eq)]
struct Header {
    classes: Vec<String>,
    /// `None` when no title was given, `Some("")` to suppress the title.
    title: Option<String>,
}

impl Header {
    fn parse(line: &str) -> Option<Self> {
        let rest = line.strip_prefix(OPENER)?.trim_end();
        let rest = rest.strip_prefix(' ').unwrap_or(rest);

        let (class_part, title) = match rest.find('"') {
            Some(quote) => {
                let quoted = rest[quote + 1..].strip_suffix('"')?;
                (&rest[..quote], Some(quoted.to_string()))
            }
            None => (rest, None),
        };

        let classes: Vec<String> = class_part.split_whitespace().map(String::from).collect();
        if classes.is_empty()
            || !classes
                .iter()
                .all(|c| c.chars().all(|ch| ch.is_alphanumeric() || ch == '-' || ch == '_'))
        {
            return None;
        }

        Some(Self { classes, title })
    }

    fn title(&self) -> Option<String> {
        match &self.title {
            Some(title) if title.is_empty() => None,
            Some(title) => Some(title.clone()),
            None => Some(capitalize(&self.classes[0])),
        }
    }
}

/// Tracks fenced code so `!!!` inside code is left alone.
#[derive(Default)]
struct Fence {
    open: Option<(char, usize)>,
}

impl Fence {
    /// Updates fence state for a line and returns true if the line is code.
    fn observe(&mut self, line: &str) -> bool {
        let indent = line.len() - line.trim_start_matches(' ').len();
        let trimmed = &line[indent..];
        let marker = trimmed.chars().next().filter(|c| *c == '`' || *c == '~');
        let run = marker.map_or(0, |m| trimmed.chars().take_while(|c| *c == m).count());

        match (self.open, marker) {
            (Some((ch, len)), Some(m)) if m == ch && run >= len && indent < 4 => {
                if trimmed[run..].trim().is_empty() {
                    self.open = None;
                }
                true
            }
            (Some(_), _) => true,
            // A backtick in the info string makes the line inline code
            (None, Some('`')) if trimmed[run..].contains('`') => false,
            (None, Some(m)) if run >= 3 && indent < 4 => {
                self.open = Some((m, run));
                true
            }
            (None, _) => false,
        }
    }
}

fn is_body_line(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with("    ") || line.starts_with('\t')
}

fn dedent(line: &str) -> &str {
    if line.trim().is_empty() {
        ""
    } else if let Some(rest) = line.strip_prefix("    ") {
        rest
    } else {
        line.strip_prefix('\t').unwrap_or(line)
    }
}

/// Expands every admonition block in `source`, including nested ones.
///
/// Returns the input unchanged when it contains no `!!!` header.
pub fn expand(source: &str) -> String {
    if !source.contains(OPENER) {
        return source.to_string();
    }

    let lines: Vec<&str> = source.lines().collect();
    let mut out = String::with_capacity(source.len() + 128);
    let mut fence = Fence::default();
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i];

        let header = if fence.observe(line) {
            None
        } else {
            Header::parse(line)
        };

        let Some(header) = header else {
            out.push_str(line);
            out.push('\n');
            i += 1;
            continue;
        };

        let start = i + 1;
        let mut end = start;
        while end < lines.len() && is_body_line(lines[end]) {
            end += 1;
        }
        // Trailing blank lines belong to the surrounding document
        while end > start && lines[end - 1].trim().is_empty() {
            end -= 1;
        }

        let body: Vec<&str> = lines[start..end].iter().map(|l| dedent(l)).collect();
        let body = expand(&body.join("\n"));

        out.push_str("<div class=\"admonition ");
        out.push_str(&escape_html(&header.classes.join(" ")));
        out.push_str("\">\n");
        if let Some(title) = header.title() {
            out.push_str("<p class=\"admonition-title\">");
            out.push_str(&escape_html(&title));
            out.push_str("</p>\n");
        }
        out.push('\n');
        out.push_str(body.trim_end_matches('\n'));
        out.push_str("\n\n</div>\n\n");

        i = end;
    }

    out
}
