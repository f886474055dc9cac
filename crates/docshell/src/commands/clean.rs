//! Clean command.

use anyhow::Result;
use docshell_static::SiteBuilder;

use crate::config::ConfigFile;

/// Run the clean command.
pub fn run(config: &ConfigFile) -> Result<()> {
    let builder = SiteBuilder::new(config.build_config()?, config.converter())?;
    let result = builder.clean()?;

    tracing::info!(
        "Removed {} shells{}",
        result.shells_removed,
        if result.output_removed {
            format!(" and {}", builder.config().output_dir.display())
        } else {
            String::new()
        }
    );

    Ok(())
}
