//! Declared column layout of the two forecast datasets.
//!
//! The forecast job writes fixed headers; these structs name the columns the
//! statistics read instead of guessing them from the header row.

use common::Row;
use serde::{Deserialize, Serialize};

use crate::error::{ComputeError, Result};

/// Columns of the per-hour load forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DailySchema {
    /// Forecast load in kVAh
    pub load_column: String,
    /// Hour of day, e.g. "06:00"
    pub hour_column: String,
}

impl Default for DailySchema {
    fn default() -> Self {
        Self {
            load_column: "predicted_kVAh".to_string(),
            hour_column: "hour".to_string(),
        }
    }
}

impl DailySchema {
    pub fn require(&self, rows: &[Row]) -> Result<()> {
        require_columns(rows, "daily", &[&self.load_column, &self.hour_column])
    }
}

/// Columns of the per-day price forecast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonthlySchema {
    /// Forecast day, YYYY-MM-DD
    pub date_column: String,
    /// Forecast cost of the day
    pub price_column: String,
}

impl Default for MonthlySchema {
    fn default() -> Self {
        Self {
            date_column: "date".to_string(),
            price_column: "predicted_price".to_string(),
        }
    }
}

impl MonthlySchema {
    pub fn require(&self, rows: &[Row]) -> Result<()> {
        require_columns(rows, "monthly", &[&self.price_column])
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSchemas {
    pub daily: DailySchema,
    pub monthly: MonthlySchema,
}

/// Checks that the dataset carries every column in `columns`.
///
/// Rows built from one CSV share the header, so only the first row is
/// inspected. An empty dataset passes.
pub fn require_columns(rows: &[Row], dataset: &'static str, columns: &[&str]) -> Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    match columns.iter().find(|column| !first.contains_column(column)) {
        Some(missing) => Err(ComputeError::MissingColumn {
            dataset,
            column: missing.to_string(),
        }),
        None => Ok(()),
    }
}
