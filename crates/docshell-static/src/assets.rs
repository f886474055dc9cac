//! Stylesheet copying and minification.

use std::fs;
use std::path::{Path, PathBuf};

/// Asset pipeline utilities.
pub struct AssetPipeline;

impl AssetPipeline {
    /// Copy each stylesheet from `source_dir` into the root of `output_dir`.
    ///
    /// Missing stylesheets are skipped with a warning. Returns the paths
    /// that were written.
    pub fn copy_stylesheets(
        source_dir: &Path,
        output_dir: &Path,
        stylesheets: &[String],
        minify: bool,
    ) -> std::io::Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        for sheet in stylesheets {
            let source_path = source_dir.join(sheet);
            if !source_path.is_file() {
                tracing::warn!("Stylesheet not found: {}", source_path.display());
                continue;
            }

            let file_name = source_path
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(sheet));
            let target = output_dir.join(file_name);

            if minify {
                let css = fs::read_to_string(&source_path)?;
                let css = match Self::minify_css(&css) {
                    Ok(minified) => minified,
                    Err(e) => {
                        tracing::warn!("Copying {} unminified: {}", sheet, e);
                        css
                    }
                };
                fs::write(&target, css)?;
            } else {
                fs::copy(&source_path, &target)?;
            }

            tracing::info!("Copied stylesheet {}", sheet);
            written.push(target);
        }

        Ok(written)
    }

    /// Minify CSS using lightningcss.
    pub fn minify_css(css: &str) -> Result<String, String> {
        use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};

        let stylesheet = StyleSheet::parse(css, ParserOptions::default())
            .map_err(|e| format!("CSS parse error: {}", e))?;

        let minified = stylesheet
            .to_css(PrinterOptions {
                minify: true,
                ..Default::default()
            })
            .map_err(|e| format!("CSS minify error: {}", e))?;

        Ok(minified.code)
    }
}
