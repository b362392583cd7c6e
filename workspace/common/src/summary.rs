use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display value used while a statistic cannot be derived.
pub const PENDING: &str = "Pending";

/// Inclusive date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct DateRange {
    /// First day (YYYY-MM-DD)
    pub start: NaiveDate,
    /// Last day (YYYY-MM-DD)
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }
}

/// Headline figures shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DashboardSummary {
    /// Window containing the highest forecast load, e.g. "18:00 - 22:00"
    pub peak_window: String,
    /// Highest forecast load
    pub peak_load: Option<f64>,
    /// Hour with the lowest forecast load, e.g. "03:00"
    pub eco_hour: String,
    /// Lowest forecast load
    pub eco_load: Option<f64>,
    /// Sum of the daily predicted prices, two decimal places
    #[schema(value_type = String)]
    pub total_bill: Decimal,
    /// Days covered by the monthly forecast
    pub billing_period: Option<DateRange>,
    /// Number of rows in the daily forecast
    pub daily_rows: usize,
    /// Number of rows in the monthly forecast
    pub monthly_rows: usize,
}

impl DashboardSummary {
    /// Summary with placeholders for every derived value.
    pub fn pending() -> Self {
        Self {
            peak_window: PENDING.to_string(),
            peak_load: None,
            eco_hour: PENDING.to_string(),
            eco_load: None,
            total_bill: Decimal::new(0, 2),
            billing_period: None,
            daily_rows: 0,
            monthly_rows: 0,
        }
    }
}

impl Default for DashboardSummary {
    fn default() -> Self {
        Self::pending()
    }
}
