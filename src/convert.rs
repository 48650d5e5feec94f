//! Markdown file to standalone HTML page conversion.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::markdown::{ExtensionSet, MarkdownRenderer};
use crate::page::{self, TITLE_SUFFIX};

/// Conversion failure.
///
/// Input errors occur before anything is written. Output errors may leave a
/// truncated file behind since the write is not atomic.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    /// Input missing, unreadable or not valid UTF-8.
    #[error("failed to read markdown input {path}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output directory missing, permission denied or disk full.
    #[error("failed to write html output {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ConvertError {
    pub fn is_input(&self) -> bool {
        matches!(self, ConvertError::Input { .. })
    }

    pub fn is_output(&self) -> bool {
        matches!(self, ConvertError::Output { .. })
    }

    /// Path of the file that could not be accessed.
    pub fn path(&self) -> &Path {
        match self {
            ConvertError::Input { path, .. } | ConvertError::Output { path, .. } => path,
        }
    }
}

/// Converts markdown files into standalone HTML pages.
pub struct Converter {
    renderer: MarkdownRenderer,
    title: Option<String>,
}

impl Converter {
    /// Creates converter applying the given extensions.
    pub fn new(extensions: ExtensionSet) -> Self {
        Self {
            renderer: MarkdownRenderer::new(extensions),
            title: None,
        }
    }

    /// Overrides the page title otherwise derived from the input file name.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Renders markdown text into a complete HTML document.
    ///
    /// # Arguments
    ///
    /// * `markdown`: Markdown source
    /// * `title`: Page title
    /// * `stylesheet`: Optional extra stylesheet path or URL
    pub fn render_document(&self, markdown: &str, title: &str, stylesheet: Option<&str>) -> String {
        let fragment = self.renderer.render(markdown);
        debug!(bytes = fragment.len(), "Rendered markdown fragment");
        page::document(title, stylesheet, &fragment).into_string()
    }

    /// Converts the markdown file at `input` and writes the page to `output`.
    ///
    /// The output file is overwritten unconditionally. The stylesheet, when
    /// given, is linked as is and its existence is never checked.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Input`] if the input cannot be read as UTF-8
    /// text, and [`ConvertError::Output`] if the page cannot be written.
    pub fn convert(
        &self,
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
        stylesheet: Option<&str>,
    ) -> Result<(), ConvertError> {
        let input = input.as_ref();
        let output = output.as_ref();

        let markdown = fs::read_to_string(input).map_err(|source| ConvertError::Input {
            path: input.to_path_buf(),
            source,
        })?;
        debug!(input = %input.display(), bytes = markdown.len(), "Read markdown input");

        let title = match &self.title {
            Some(title) => title.clone(),
            None => default_title(input),
        };
        let document = self.render_document(&markdown, &title, stylesheet);

        fs::write(output, &document).map_err(|source| ConvertError::Output {
            path: output.to_path_buf(),
            source,
        })?;
        debug!(output = %output.display(), bytes = document.len(), "Wrote html output");

        info!("Conversion complete, output file: {}", output.display());
        Ok(())
    }
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(ExtensionSet::default())
    }
}

/// Converts `input` to a standalone HTML page at `output` using the default
/// extension set.
///
/// # Arguments
///
/// * `input`: Markdown file path
/// * `output`: HTML file path, overwritten if it exists
/// * `css`: Optional extra stylesheet path or URL linked from the page
///
/// # Errors
///
/// Returns [`ConvertError`] if the input cannot be read or the output
/// cannot be written
pub fn convert(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    css: Option<&str>,
) -> Result<(), ConvertError> {
    Converter::default().convert(input, output, css)
}

/// Page title for an input path: its file name followed by the title suffix.
pub fn default_title(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string());
    format!("{name}{TITLE_SUFFIX}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_title() {
        // Arrange & Act & Assert
        assert_eq!(
            default_title(Path::new("docs/report (2).md")),
            "report (2).md - Markdown 转换"
        );
    }

    #[test]
    fn test_render_document() {
        // Arrange
        let converter = Converter::default();

        // Act
        let html = converter.render_document("Hello *world*", "T", None);

        // Assert
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<p>Hello <em>world</em></p>"));
        assert!(html.contains("<title>T</title>"));
    }

    #[test]
    fn test_convert_with_title_override() -> anyhow::Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.html");
        fs::write(&input, "text")?;

        // Act
        Converter::default()
            .with_title("Custom")
            .convert(&input, &output, None)?;

        // Assert
        let html = fs::read_to_string(&output)?;
        assert!(html.contains("<title>Custom</title>"));
        Ok(())
    }

    #[test]
    fn test_missing_input_is_input_error() -> anyhow::Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let input = dir.path().join("missing.md");
        let output = dir.path().join("out.html");

        // Act
        let err = convert(&input, &output, None).expect_err("Should fail");

        // Assert
        assert!(err.is_input());
        assert!(!err.is_output());
        assert_eq!(err.path(), input.as_path());
        assert!(!output.exists(), "No output on input failure");
        Ok(())
    }

    #[test]
    fn test_invalid_utf8_is_input_error() -> anyhow::Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let input = dir.path().join("bad.md");
        let output = dir.path().join("out.html");
        fs::write(&input, [0xff, 0xfe, 0x00, 0xc3])?;

        // Act
        let err = convert(&input, &output, None).expect_err("Should fail");

        // Assert
        assert!(err.is_input(), "Invalid UTF-8 should be an input error");
        assert!(!output.exists());
        Ok(())
    }

    #[test]
    fn test_missing_output_dir_is_output_error() -> anyhow::Result<()> {
        // Arrange
        let dir = TempDir::new()?;
        let input = dir.path().join("in.md");
        let output = dir.path().join("no-such-dir").join("out.html");
        fs::write(&input, "# Title")?;

        // Act
        let err = convert(&input, &output, None).expect_err("Should fail");

        // Assert
        assert!(err.is_output());
        assert_eq!(err.path(), output.as_path());
        assert!(err.to_string().contains("failed to write html output"));
        Ok(())
    }
}
