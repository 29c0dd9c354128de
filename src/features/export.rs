//! Document-aware exporter
//!
//! Writes rendered LaTeX into a file under the configured save location,
//! either replacing the file or splicing the content next to a document
//! marker.
//!
//! ## Example
//!
//! ```rust
//! use matex::export::{export_with, ExportOptions, TextFormat, WriteMode};
//! use matex::utils::MemoryDocumentStore;
//! use matex::{BracketSet, Config};
//!
//! let store = MemoryDocumentStore::new();
//! let config = Config::default().with_save_location("out");
//!
//! let options = ExportOptions::new(WriteMode::Override, TextFormat::TexDocument)
//!     .with_brackets(BracketSet::BEGIN | BracketSet::END);
//! export_with(&store, "x", "doc", &options, &config).unwrap();
//!
//! let insert = ExportOptions::new(WriteMode::InsertBeforeDocumentEnd, TextFormat::TexFragment);
//! let content = export_with(&store, "y", "doc", &insert, &config).unwrap();
//! assert_eq!(content, r"\begin{document}xy\end{document}");
//! ```

use std::path::{Path, PathBuf};

use crate::core::context::{BracketSet, Config};
use crate::data::templates::{
    FormatTemplate, Splice, DOCUMENT_BEGIN, DOCUMENT_END, MARKDOWN_TEMPLATE, PLAIN_TEMPLATE,
    TEX_DOCUMENT_TEMPLATE, TEX_FRAGMENT_TEMPLATE,
};
use crate::utils::error::ExportError;
use crate::utils::files::{DocumentStore, StdDocumentStore};

/// Wrapping template applied on export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    #[default]
    Plain,
    Markdown,
    /// Bare LaTeX without document markers
    TexFragment,
    /// LaTeX wrapped in the selected document markers
    TexDocument,
}

impl TextFormat {
    pub fn template(self) -> &'static FormatTemplate {
        match self {
            TextFormat::Plain => &PLAIN_TEMPLATE,
            TextFormat::Markdown => &MARKDOWN_TEMPLATE,
            TextFormat::TexFragment => &TEX_FRAGMENT_TEMPLATE,
            TextFormat::TexDocument => &TEX_DOCUMENT_TEMPLATE,
        }
    }
}

/// File-mutation strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Override,
    InsertAfterDocumentStart,
    InsertBeforeDocumentEnd,
}

impl WriteMode {
    pub fn splice(self) -> Splice {
        match self {
            WriteMode::Override => Splice::Replace,
            WriteMode::InsertAfterDocumentStart => Splice::After(DOCUMENT_BEGIN),
            WriteMode::InsertBeforeDocumentEnd => Splice::Before(DOCUMENT_END),
        }
    }
}

/// Placement instructions for one export call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExportOptions {
    pub mode: WriteMode,
    pub format: TextFormat,
    /// Markers to emit; `None` uses the config's default bracket set
    pub brackets: Option<BracketSet>,
}

impl ExportOptions {
    pub fn new(mode: WriteMode, format: TextFormat) -> Self {
        Self {
            mode,
            format,
            brackets: None,
        }
    }

    /// Override a whole file with a document carrying both markers
    pub fn document() -> Self {
        Self {
            mode: WriteMode::Override,
            format: TextFormat::TexDocument,
            brackets: Some(BracketSet::all()),
        }
    }

    pub fn with_brackets(mut self, brackets: BracketSet) -> Self {
        self.brackets = Some(brackets);
        self
    }
}

/// Resolve the target path, appending the format's extension when the
/// filename has none
pub fn target_path(filename: &str, format: TextFormat, config: &Config) -> PathBuf {
    let path = config.target_path(filename);
    if Path::new(filename).extension().is_some() {
        path
    } else {
        path.with_extension(format.template().extension)
    }
}

/// Apply the format template to `content`
pub fn apply_template(
    content: &str,
    format: TextFormat,
    brackets: BracketSet,
    config: &Config,
) -> String {
    if !format.template().document_markers {
        return content.to_string();
    }
    let separator = if config.pretty_printing { "\n" } else { "" };
    let mut out = String::with_capacity(content.len() + 32);
    if brackets.contains(BracketSet::BEGIN) {
        out.push_str(DOCUMENT_BEGIN);
        out.push_str(separator);
    }
    out.push_str(content);
    if brackets.contains(BracketSet::END) {
        out.push_str(separator);
        out.push_str(DOCUMENT_END);
    }
    out
}

/// Export `content` to `config.save_location / filename` on the filesystem
///
/// Returns the full content of the file after the write.
pub fn export(
    content: &str,
    filename: &str,
    options: &ExportOptions,
    config: &Config,
) -> Result<String, ExportError> {
    export_with(&StdDocumentStore, content, filename, options, config)
}

/// Export through an explicit store
pub fn export_with(
    store: &dyn DocumentStore,
    content: &str,
    filename: &str,
    options: &ExportOptions,
    config: &Config,
) -> Result<String, ExportError> {
    let path = target_path(filename, options.format, config);
    let brackets = options.brackets.unwrap_or(config.default_brackets);
    let wrapped = apply_template(content, options.format, brackets, config);

    let splice = options.mode.splice();
    let result = match splice.anchor() {
        None => wrapped,
        Some(marker) => {
            let existing = store
                .read(&path)
                .map_err(|e| ExportError::io(&path, e))?
                .unwrap_or_default();
            splice
                .apply(&existing, &wrapped)
                .ok_or_else(|| ExportError::MissingAnchor {
                    marker,
                    path: path.clone(),
                })?
        }
    };

    store
        .write(&path, &result)
        .map_err(|e| ExportError::io(&path, e))?;
    Ok(result)
}
