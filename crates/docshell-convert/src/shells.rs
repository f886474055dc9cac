//! Shell generation over a source directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::staleness::needs_rebuild;
use crate::traits::{ConvertError, Converter};

/// Extension of source documents.
pub const SOURCE_EXT: &str = "adoc";

/// Extension of generated shells.
pub const SHELL_EXT: &str = "html";

/// How to treat shells that already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellMode {
    /// Convert every source document
    #[default]
    Full,
    /// Convert only sources whose shell is missing or older
    Update,
}

/// Summary of a shell generation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellReport {
    /// Sources handed to the converter
    pub converted: usize,

    /// Sources left alone because their shell was fresh
    pub skipped: usize,

    /// Sources for which the converter reported failure
    pub failed: Vec<PathBuf>,
}

/// List the files directly inside `dir` with the given extension, sorted by
/// file name.
pub fn discover(dir: &Path, ext: &str) -> Result<Vec<PathBuf>, ConvertError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| ConvertError::Scan(e.to_string()))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some(ext) {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Run `converter` over every source document in `src_dir`.
///
/// Runs are sequential and blocking. A converter that exits unsuccessfully
/// is logged and recorded in the report; it does not stop the pass.
pub fn generate_shells(
    src_dir: &Path,
    converter: &dyn Converter,
    mode: ShellMode,
) -> Result<ShellReport, ConvertError> {
    let mut report = ShellReport::default();

    for source in discover(src_dir, SOURCE_EXT)? {
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        match mode {
            ShellMode::Full => {
                tracing::info!("Converting file: {}", file_name);
            }
            ShellMode::Update => {
                let shell = source.with_extension(SHELL_EXT);
                let stale =
                    needs_rebuild(&source, &shell).map_err(|e| ConvertError::Timestamp {
                        path: source.display().to_string(),
                        source: e,
                    })?;
                if !stale {
                    tracing::debug!("Up to date: {}", file_name);
                    report.skipped += 1;
                    continue;
                }
                tracing::info!("Updating file: {}", file_name);
            }
        }

        let conversion = converter.convert(&source)?;
        report.converted += 1;

        if !conversion.success {
            tracing::warn!(
                "{} failed on {}: {}",
                converter.name(),
                file_name,
                conversion.diagnostics.trim()
            );
            report.failed.push(source);
        } else if !conversion.diagnostics.trim().is_empty() {
            tracing::warn!("{}: {}", file_name, conversion.diagnostics.trim());
        }
    }

    Ok(report)
}
