use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod commands;

use commands::{serve, show, summary};

use crate::config::Settings;

#[derive(Parser)]
#[command(name = "wattcast")]
#[command(about = "Serves electricity demand and billing forecasts to the dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the configuration and forecast files come from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Configuration file (TOML, YAML or JSON)
    ///
    /// Defaults to an optional `wattcast.toml` in the working directory.
    /// Values can also be set with `WATTCAST__SECTION__KEY` variables,
    /// e.g. WATTCAST__DATA__MALFORMED_ROWS=reject.
    #[arg(short, long, env = "WATTCAST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the forecast CSV files
    #[arg(short, long, env = "DATA_DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dataset {
    /// Next-day hourly load forecast
    Daily,
    /// Thirty-day price forecast
    Monthly,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        #[command(flatten)]
        source: SourceArgs,

        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:5000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS")]
        bind_address: Option<String>,
    },
    /// Print the dashboard summary as JSON
    Summary {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Print the rows of one forecast file as the API would return them
    Show {
        /// Which forecast to print
        #[arg(value_enum)]
        dataset: Dataset,

        #[command(flatten)]
        source: SourceArgs,
    },
}

impl SourceArgs {
    fn settings(&self, bind_address: Option<String>) -> Result<Settings> {
        let settings = Settings::load(self.config.as_deref())?;
        Ok(settings.with_overrides(bind_address, self.data_dir.clone()))
    }
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { source, bind_address } => {
                serve(source.settings(bind_address)?).await?;
            }
            Commands::Summary { source } => {
                summary(source.settings(None)?).await?;
            }
            Commands::Show { dataset, source } => {
                show(source.settings(None)?, dataset).await?;
            }
        }
        Ok(())
    }
}
