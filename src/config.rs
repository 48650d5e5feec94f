//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::markdown::{CodeHilite, DEFAULT_TOC_TITLE, Extension, ExtensionSet, Toc};

/// Command line configuration for md2page.
#[derive(Debug, Clone, Parser)]
#[command(name = "md2page", version, about, long_about = None)]
pub struct Config {
    /// Markdown input file
    pub input: PathBuf,

    /// HTML output file [default: input with .html extension]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extra stylesheet path or URL linked from the page
    #[arg(long)]
    pub css: Option<String>,

    /// Page title [default: "<input file name> - Markdown 转换"]
    #[arg(long)]
    pub title: Option<String>,

    /// Title shown above the table of contents
    #[arg(long, default_value = DEFAULT_TOC_TITLE)]
    pub toc_title: String,

    /// Disable line numbers on code blocks
    #[arg(long)]
    pub no_linenums: bool,

    /// Disable heading anchors and the table of contents
    #[arg(long)]
    pub no_toc: bool,

    /// Open the generated page in the default browser
    #[arg(long)]
    pub open: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.input.is_file() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        Ok(())
    }

    /// Returns output path from configuration or the input with `.html`.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(output) => output.clone(),
            None => self.input.with_extension("html"),
        }
    }

    /// Builds the extension set selected by the flags.
    pub fn extensions(&self) -> ExtensionSet {
        let mut extensions = ExtensionSet::default().with(Extension::CodeHilite(CodeHilite {
            linenums: !self.no_linenums,
            ..CodeHilite::default()
        }));

        extensions = if self.no_toc {
            extensions.without("toc")
        } else {
            extensions.with(Extension::Toc(Toc {
                title: self.toc_title.clone(),
                ..Toc::default()
            }))
        };

        extensions
    }
}
