use compute::DatasetSchemas;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::provider::{CsvProvider, MalformedRowPolicy};
use crate::schemas::AppState;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "wattcast";
/// Prefix of environment overrides, e.g. `WATTCAST__DATA__DIR`.
pub const ENV_PREFIX: &str = "WATTCAST";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration error: {0}")]
    Load(#[from] config::ConfigError),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub schema: DatasetSchemas,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind_address: String,
    pub request_timeout_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:5000".to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerSettings {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding the forecast CSV files
    pub dir: PathBuf,
    /// Hourly load forecast for the next day
    pub daily_file: String,
    /// Per-day price forecast for the next thirty days
    pub monthly_file: String,
    pub malformed_rows: MalformedRowPolicy,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            daily_file: "next_day_energy_prediction.csv".to_string(),
            monthly_file: "monthly_price_prediction.csv".to_string(),
            malformed_rows: MalformedRowPolicy::default(),
        }
    }
}

impl Settings {
    /// Layers built-in defaults, the config file and `WATTCAST__*` variables.
    ///
    /// Without `config_path` an optional `wattcast.{toml,yaml,json}` in the
    /// working directory is used; an explicit path must exist.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let file = match config_path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                File::from(path).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }

    /// Applies command-line overrides on top of the layered values.
    pub fn with_overrides(mut self, bind_address: Option<String>, data_dir: Option<PathBuf>) -> Self {
        if let Some(bind_address) = bind_address {
            self.server.bind_address = bind_address;
        }
        if let Some(dir) = data_dir {
            self.data.dir = dir;
        }
        self
    }

    pub fn provider(&self) -> CsvProvider {
        CsvProvider::new(self.data.dir.clone(), self.data.malformed_rows)
    }
}

/// Initialize application state from resolved settings
pub fn initialize_app_state(settings: Settings) -> AppState {
    info!("Serving forecasts from: {}", settings.data.dir.display());
    if !settings.data.dir.is_dir() {
        warn!(
            "Data directory {} does not exist; endpoints will return empty datasets",
            settings.data.dir.display()
        );
    }
    debug!(
        daily = %settings.data.daily_file,
        monthly = %settings.data.monthly_file,
        policy = ?settings.data.malformed_rows,
        "Dataset files"
    );

    AppState {
        provider: settings.provider(),
        settings: Arc::new(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_forecast_job_output() {
        let settings = Settings::default();
        assert_eq!(settings.server.bind_address, "0.0.0.0:5000");
        assert_eq!(settings.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(settings.data.dir, PathBuf::from("."));
        assert_eq!(settings.data.daily_file, "next_day_energy_prediction.csv");
        assert_eq!(settings.data.monthly_file, "monthly_price_prediction.csv");
        assert_eq!(settings.data.malformed_rows, MalformedRowPolicy::Pad);
        assert_eq!(settings.schema.daily.load_column, "predicted_kVAh");
        assert_eq!(settings.schema.monthly.price_column, "predicted_price");
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wattcast.toml");
        std::fs::write(
            &path,
            r#"
[server]
bind_address = "127.0.0.1:8080"

[data]
dir = "/srv/forecasts"
malformed_rows = "reject"

[schema.daily]
load_column = "yhat"
"#,
        )
        .unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.server.bind_address, "127.0.0.1:8080");
        assert_eq!(settings.server.request_timeout_secs, 30);
        assert_eq!(settings.data.dir, PathBuf::from("/srv/forecasts"));
        assert_eq!(settings.data.daily_file, "next_day_energy_prediction.csv");
        assert_eq!(settings.data.malformed_rows, MalformedRowPolicy::Reject);
        assert_eq!(settings.schema.daily.load_column, "yhat");
        assert_eq!(settings.schema.daily.hour_column, "hour");
    }

    #[test]
    fn test_explicit_config_file_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Settings::load(Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let settings = Settings::default()
            .with_overrides(Some("127.0.0.1:5001".to_string()), Some(PathBuf::from("data")));
        assert_eq!(settings.server.bind_address, "127.0.0.1:5001");
        assert_eq!(settings.data.dir, PathBuf::from("data"));

        let untouched = Settings::default().with_overrides(None, None);
        assert_eq!(untouched.server.bind_address, "0.0.0.0:5000");
    }
}
