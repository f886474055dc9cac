//! Trait definitions for document converters.

use std::path::{Path, PathBuf};

/// Outcome of a single converter run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Source document that was converted
    pub source: PathBuf,

    /// Whether the converter reported success
    pub success: bool,

    /// Diagnostic output captured from the converter, if any
    pub diagnostics: String,
}

impl Conversion {
    /// A successful conversion with no diagnostics.
    pub fn ok(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            success: true,
            diagnostics: String::new(),
        }
    }
}

/// Errors that can occur when running a converter.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to launch converter `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid source path: {0}")]
    InvalidPath(String),

    #[error("Failed to scan source directory: {0}")]
    Scan(String),

    #[error("Failed to check timestamps for {path}: {source}")]
    Timestamp {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A converter that turns one source document into an HTML shell.
///
/// Implementations write the shell next to the source, with the same file
/// stem and an `.html` extension.
pub trait Converter {
    /// Converter identifier used in log output.
    fn name(&self) -> &str;

    /// Convert `source` and block until the converter has finished.
    ///
    /// A converter that runs but reports failure is not an error; the
    /// returned [`Conversion`] carries the outcome instead.
    fn convert(&self, source: &Path) -> Result<Conversion, ConvertError>;
}
