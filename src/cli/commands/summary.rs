use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Settings;

/// Computes the dashboard summary from the files on disk and prints it.
pub async fn summary(settings: Settings) -> Result<()> {
    let provider = settings.provider();
    let data = &settings.data;

    let daily = provider
        .read_rows(&data.daily_file)
        .await
        .with_context(|| format!("Failed to read {}", data.daily_file))?;
    let monthly = provider
        .read_rows(&data.monthly_file)
        .await
        .with_context(|| format!("Failed to read {}", data.monthly_file))?;
    debug!("Loaded {} daily and {} monthly rows", daily.len(), monthly.len());

    let summary = compute::summarize(&daily, &monthly, &settings.schema);
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
