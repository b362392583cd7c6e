//! Peak and eco scans over the hourly load forecast.

use common::Row;
use tracing::{instrument, trace};

use crate::error::{ComputeError, Result};
use crate::schema::DailySchema;

/// A row of the daily forecast together with its parsed load.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadPoint<'a> {
    pub row: &'a Row,
    pub load: f64,
}

impl LoadPoint<'_> {
    /// Raw hour cell of the row.
    pub fn hour<'s>(&'s self, schema: &DailySchema) -> Option<&'s str> {
        self.row.get(&schema.hour_column)
    }
}

/// Parses the load cell of a row.
pub fn load_value(row: &Row, schema: &DailySchema) -> Result<f64> {
    let raw = row
        .get(&schema.load_column)
        .ok_or_else(|| ComputeError::MissingColumn {
            dataset: "daily",
            column: schema.load_column.clone(),
        })?;
    match raw.trim().parse::<f64>() {
        Ok(load) if load.is_finite() => Ok(load),
        _ => Err(ComputeError::InvalidNumber {
            column: schema.load_column.clone(),
            value: raw.to_string(),
        }),
    }
}

/// Row with the highest load. Ties keep the earliest row.
#[instrument(skip(rows, schema), fields(num_rows = rows.len()))]
pub fn peak_row<'a>(rows: &'a [Row], schema: &DailySchema) -> Option<LoadPoint<'a>> {
    scan(rows, schema, |candidate, best| candidate > best)
}

/// Row with the lowest load. Ties keep the earliest row.
#[instrument(skip(rows, schema), fields(num_rows = rows.len()))]
pub fn eco_row<'a>(rows: &'a [Row], schema: &DailySchema) -> Option<LoadPoint<'a>> {
    scan(rows, schema, |candidate, best| candidate < best)
}

/// Single pass keeping the row preferred by `better`; rows without a numeric
/// load are skipped.
fn scan<'a>(
    rows: &'a [Row],
    schema: &DailySchema,
    better: impl Fn(f64, f64) -> bool,
) -> Option<LoadPoint<'a>> {
    let mut best: Option<LoadPoint<'a>> = None;
    for (index, row) in rows.iter().enumerate() {
        let load = match load_value(row, schema) {
            Ok(load) => load,
            Err(e) => {
                trace!(index, error = %e, "Skipping row without numeric load");
                continue;
            }
        };
        match best {
            Some(current) if !better(load, current.load) => {}
            _ => best = Some(LoadPoint { row, load }),
        }
    }
    best
}
