use std::path::Path;

use anyhow::{Context, Result};

use crate::formatter::{DisplayLine, render_missing_config, render_report};
use crate::services::{ConfigError, InvolvementService, Settings};

/// Produces the lines printed for one run from the merged settings.
///
/// Missing token or login yields the unconfigured panel without building a
/// client, so no request is made. Any other failure is returned as an error
/// and nothing should be printed.
pub async fn report_lines(settings: Settings, config_path: Option<&Path>) -> Result<Vec<DisplayLine>> {
    let config = match settings.into_config() {
        Ok(config) => config,
        Err(ConfigError::Missing { fields }) => {
            tracing::warn!("Missing configuration: {}", fields.join(", "));
            return Ok(render_missing_config(config_path));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::debug!("Loaded configuration: {:?}", config);

    let service = InvolvementService::from_config(&config)?;
    let report = service
        .run(&config)
        .await
        .context("Failed to fetch pull requests")?;

    Ok(render_report(&report, config.wip_label.as_deref()))
}
