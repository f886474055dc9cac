//! Incremental rebuild command.

use anyhow::Result;
use docshell_static::SiteBuilder;

use crate::config::ConfigFile;

/// Run the update command.
pub fn run(config: &ConfigFile) -> Result<()> {
    tracing::info!("Updating site...");

    let result = SiteBuilder::new(config.build_config()?, config.converter())?.update()?;

    if result.failed > 0 {
        tracing::warn!("{} documents failed to convert", result.failed);
    }
    tracing::info!(
        "Converted {} documents ({} up to date), assembled {} pages in {}ms",
        result.converted,
        result.skipped,
        result.pages,
        result.duration_ms
    );

    Ok(())
}
