use anyhow::{Context, Result};

use crate::cli::Dataset;
use crate::config::Settings;

/// Prints one forecast file as the JSON array served by the API.
pub async fn show(settings: Settings, dataset: Dataset) -> Result<()> {
    let filename = match dataset {
        Dataset::Daily => &settings.data.daily_file,
        Dataset::Monthly => &settings.data.monthly_file,
    };

    let rows = settings
        .provider()
        .read_rows(filename)
        .await
        .with_context(|| format!("Failed to read {}", filename))?;
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
