use common::{DashboardSummary, DateRange, Row};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::config::Settings;
use crate::provider::CsvProvider;

pub use common::ApiResponse;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Reader for the forecast CSV files
    pub provider: CsvProvider,
    /// Resolved configuration
    pub settings: Arc<Settings>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            success: false,
        }
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Directory the forecasts are read from
    pub data_dir: String,
    /// Whether the daily forecast file is present
    pub daily_available: bool,
    /// Whether the monthly forecast file is present
    pub monthly_available: bool,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::forecasts::get_daily_forecast,
        crate::handlers::forecasts::get_monthly_forecast,
        crate::handlers::summary::get_summary,
    ),
    components(
        schemas(
            Row,
            ApiResponse<DashboardSummary>,
            DashboardSummary,
            DateRange,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "forecasts", description = "Raw forecast rows"),
        (name = "summary", description = "Dashboard headline figures"),
    ),
    info(
        title = "Wattcast API",
        description = "Electricity demand and billing forecasts for the dashboard",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
