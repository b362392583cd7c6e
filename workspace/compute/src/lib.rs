pub mod billing;
pub mod error;
pub mod hours;
pub mod load;
pub mod schema;

use common::{DashboardSummary, Row};
use tracing::{instrument, warn};

pub use error::{ComputeError, Result};
pub use schema::{DailySchema, DatasetSchemas, MonthlySchema};

/// Derives the dashboard headline figures from both forecast datasets.
///
/// Each dataset is checked against its declared schema first. A dataset that
/// is empty or lacks a declared column leaves its figures at the placeholder
/// values of [`DashboardSummary::pending`].
#[instrument(skip(daily, monthly, schemas), fields(daily_rows = daily.len(), monthly_rows = monthly.len()))]
pub fn summarize(daily: &[Row], monthly: &[Row], schemas: &DatasetSchemas) -> DashboardSummary {
    let mut summary = DashboardSummary {
        daily_rows: daily.len(),
        monthly_rows: monthly.len(),
        ..DashboardSummary::pending()
    };

    match schemas.daily.require(daily) {
        Ok(()) => {
            if let Some(peak) = load::peak_row(daily, &schemas.daily) {
                summary.peak_window = hours::format_time_range(peak.hour(&schemas.daily).unwrap_or_default());
                summary.peak_load = Some(peak.load);
            }
            if let Some(eco) = load::eco_row(daily, &schemas.daily) {
                summary.eco_hour = hours::format_hour_label(eco.hour(&schemas.daily).unwrap_or_default());
                summary.eco_load = Some(eco.load);
            }
        }
        Err(e) => warn!(error = %e, "Daily forecast does not match its schema"),
    }

    match schemas.monthly.require(monthly) {
        Ok(()) => {
            summary.total_bill = billing::total_bill(monthly, &schemas.monthly);
            summary.billing_period = billing::billing_period(monthly, &schemas.monthly);
        }
        Err(e) => warn!(error = %e, "Monthly forecast does not match its schema"),
    }

    summary
}
