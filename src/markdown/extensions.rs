//! Extension configuration for the Markdown pipeline.

use comrak::Options;

/// Default CSS class wrapped around highlighted code blocks.
pub const DEFAULT_CODE_CLASS: &str = "codehilite";

/// Default title rendered above the table of contents.
pub const DEFAULT_TOC_TITLE: &str = "目录";

/// Paragraph text replaced by the table of contents.
pub const DEFAULT_TOC_MARKER: &str = "[TOC]";

/// Options for syntax highlighted code blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeHilite {
    /// Class of the `div` wrapping each highlighted block.
    pub css_class: String,
    /// Render a line number column next to the code.
    pub linenums: bool,
}

impl Default for CodeHilite {
    fn default() -> Self {
        Self {
            css_class: DEFAULT_CODE_CLASS.to_string(),
            linenums: true,
        }
    }
}

/// Options for the table of contents and heading anchors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toc {
    /// Title shown above the contents list.
    pub title: String,
    /// Wrap heading text in a link to its own anchor.
    pub anchorlink: bool,
    /// Paragraph text replaced by the contents block.
    pub marker: String,
}

impl Default for Toc {
    fn default() -> Self {
        Self {
            title: DEFAULT_TOC_TITLE.to_string(),
            anchorlink: true,
            marker: DEFAULT_TOC_MARKER.to_string(),
        }
    }
}

/// Named unit of optional Markdown syntax support.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extension {
    /// Footnotes and definition lists.
    Extra,
    /// Syntax highlighting for fenced and indented code blocks.
    CodeHilite(CodeHilite),
    /// Heading anchors and a generated table of contents.
    Toc(Toc),
    /// Pipe tables.
    Tables,
    /// Fenced code blocks.
    FencedCode,
    /// `!!! type "Title"` callout blocks.
    Admonition,
}

impl Extension {
    /// Stable identifier of this extension.
    pub fn name(&self) -> &'static str {
        match self {
            Extension::Extra => "extra",
            Extension::CodeHilite(_) => "codehilite",
            Extension::Toc(_) => "toc",
            Extension::Tables => "tables",
            Extension::FencedCode => "fenced_code",
            Extension::Admonition => "admonition",
        }
    }

    /// Enables the comrak options this extension depends on.
    fn configure(&self, options: &mut Options<'_>) {
        match self {
            Extension::Extra => {
                options.extension.footnotes = true;
                options.extension.description_lists = true;
                options.extension.table = true;
            }
            Extension::Tables => options.extension.table = true,
            // Fenced code is CommonMark core syntax
            Extension::FencedCode => {}
            // Handled by renderer passes
            Extension::CodeHilite(_) | Extension::Toc(_) | Extension::Admonition => {}
        }
    }
}

/// Ordered list of extensions applied by the renderer.
///
/// The default set mirrors a typical documentation setup: extra syntax,
/// line numbered highlighting, a table of contents titled "目录" with self
/// linking headings, tables, fenced code and admonitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionSet {
    extensions: Vec<Extension>,
}

impl ExtensionSet {
    /// Creates an empty set (plain CommonMark).
    pub fn empty() -> Self {
        Self {
            extensions: Vec::new(),
        }
    }

    /// Adds an extension at the end, or replaces the one with the same name
    /// in place.
    pub fn with(mut self, extension: Extension) -> Self {
        match self
            .extensions
            .iter_mut()
            .find(|e| e.name() == extension.name())
        {
            Some(existing) => *existing = extension,
            None => self.extensions.push(extension),
        }
        self
    }

    /// Removes the extension with the given name, if present.
    pub fn without(mut self, name: &str) -> Self {
        self.extensions.retain(|e| e.name() != name);
        self
    }

    /// Iterates extensions in application order.
    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.extensions.iter()
    }

    /// Returns true if an extension with this name is enabled.
    pub fn contains(&self, name: &str) -> bool {
        self.extensions.iter().any(|e| e.name() == name)
    }

    pub fn code_hilite(&self) -> Option<&CodeHilite> {
        self.extensions.iter().find_map(|e| match e {
            Extension::CodeHilite(config) => Some(config),
            _ => None,
        })
    }

    pub fn toc(&self) -> Option<&Toc> {
        self.extensions.iter().find_map(|e| match e {
            Extension::Toc(config) => Some(config),
            _ => None,
        })
    }

    pub fn admonition(&self) -> bool {
        self.contains("admonition")
    }

    /// Builds comrak options for this set.
    ///
    /// Raw HTML passes through unmodified; the output is never sanitized.
    pub fn comrak_options(&self) -> Options<'static> {
        let mut options = Options::default();
        options.render.unsafe_ = true;

        for extension in &self.extensions {
            extension.configure(&mut options);
        }

        options
    }
}

impl Default for ExtensionSet {
    fn default() -> Self {
        Self {
            extensions: vec![
                Extension::Extra,
                Extension::CodeHilite(CodeHilite::default()),
                Extension::Toc(Toc::default()),
                Extension::Tables,
                Extension::FencedCode,
                Extension::Admonition,
            ],
        }
    }
}
