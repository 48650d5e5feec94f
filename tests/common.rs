//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing markdown fixtures into temporary
//! directories and reading generated pages back.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Writes markdown fixture into a fresh temporary directory.
///
/// # Arguments
///
/// * `name`: File name of the markdown input
/// * `content`: Markdown content
///
/// # Returns
///
/// Temporary directory and the path of the written input
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn markdown_fixture(name: &str, content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let input = dir.path().join(name);
    std::fs::write(&input, content)?;
    Ok((dir, input))
}

/// Reads generated page as string.
///
/// # Errors
///
/// Returns error if the file is missing or not valid UTF-8
pub fn read_page(path: &Path) -> Result<String> {
    Ok(std::fs::read_to_string(path)?)
}

/// Extracts the contents of the `markdown-body` container.
pub fn body_fragment(page: &str) -> &str {
    let open = "<div class=\"markdown-body\">";
    let start = page.find(open).map_or(0, |p| p + open.len());
    let end = page.rfind("</div><script>").unwrap_or(page.len());
    &page[start..end]
}

/// Collects values of an attribute (`id="..."`, `href="#..."`) in order.
pub fn attribute_values<'a>(html: &'a str, prefix: &str) -> Vec<&'a str> {
    let mut values = Vec::new();
    let mut rest = html;
    while let Some(pos) = rest.find(prefix) {
        let value_start = pos + prefix.len();
        let Some(len) = rest[value_start..].find('"') else {
            break;
        };
        values.push(&rest[value_start..value_start + len]);
        rest = &rest[value_start + len..];
    }
    values
}
