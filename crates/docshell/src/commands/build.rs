//! Full site rebuild command.

use std::path::PathBuf;

use anyhow::Result;
use docshell_static::SiteBuilder;

use crate::config::ConfigFile;

/// Run the build command.
pub fn run(config: &ConfigFile, output: Option<PathBuf>) -> Result<()> {
    tracing::info!("Building site...");

    let mut build_config = config.build_config()?;
    if let Some(output) = output {
        build_config.output_dir = output;
    }

    let result = SiteBuilder::new(build_config, config.converter())?.build()?;

    if result.failed > 0 {
        tracing::warn!("{} documents failed to convert", result.failed);
    }
    tracing::info!(
        "Converted {} documents into {} pages in {}ms",
        result.converted,
        result.pages,
        result.duration_ms
    );
    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}
