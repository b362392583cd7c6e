//! Bill total and billing period of the per-day price forecast.

use chrono::NaiveDate;
use common::{DateRange, Row};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;
use tracing::{debug, instrument, warn};

use crate::error::{ComputeError, Result};
use crate::schema::MonthlySchema;

/// Decimal places of a rendered bill.
pub const BILL_SCALE: u32 = 2;

/// Parses the price cell of a row.
pub fn price_value(row: &Row, schema: &MonthlySchema) -> Result<Decimal> {
    let raw = row
        .get(&schema.price_column)
        .ok_or_else(|| ComputeError::MissingColumn {
            dataset: "monthly",
            column: schema.price_column.clone(),
        })?;
    let trimmed = raw.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| ComputeError::InvalidNumber {
            column: schema.price_column.clone(),
            value: raw.to_string(),
        })
}

/// Parses the date cell of a row.
pub fn date_value(row: &Row, schema: &MonthlySchema) -> Result<NaiveDate> {
    let raw = row
        .get(&schema.date_column)
        .ok_or_else(|| ComputeError::MissingColumn {
            dataset: "monthly",
            column: schema.date_column.clone(),
        })?;
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| ComputeError::InvalidDate {
        column: schema.date_column.clone(),
        value: raw.to_string(),
    })
}

/// Sum of the daily prices, rounded half away from zero to [`BILL_SCALE`]
/// places. Cells without a number count as zero. A price that would overflow
/// the running sum is left out.
#[instrument(skip(rows, schema), fields(num_rows = rows.len()))]
pub fn total_bill(rows: &[Row], schema: &MonthlySchema) -> Decimal {
    let mut sum = Decimal::ZERO;
    for (index, row) in rows.iter().enumerate() {
        let price = match price_value(row, schema) {
            Ok(price) => price,
            Err(e) => {
                debug!(index, error = %e, "Counting price as zero");
                continue;
            }
        };
        match sum.checked_add(price) {
            Some(next) => sum = next,
            None => warn!(index, %price, "Price overflows the bill total, skipping"),
        }
    }

    let mut total = sum.round_dp_with_strategy(BILL_SCALE, RoundingStrategy::MidpointAwayFromZero);
    total.rescale(BILL_SCALE);
    total
}

/// Earliest and latest forecast day. `None` when no row has a valid date.
#[instrument(skip(rows, schema), fields(num_rows = rows.len()))]
pub fn billing_period(rows: &[Row], schema: &MonthlySchema) -> Option<DateRange> {
    rows.iter()
        .filter_map(|row| date_value(row, schema).ok())
        .fold(None, |range: Option<DateRange>, date| match range {
            None => Some(DateRange::new(date, date)),
            Some(range) => Some(DateRange::new(range.start.min(date), range.end.max(date))),
        })
}
