use axum::{extract::State, http::StatusCode, response::Json};
use common::DashboardSummary;
use tracing::{debug, info, instrument};

use crate::handlers::forecasts::load_dataset;
use crate::schemas::{ApiResponse, AppState, ErrorResponse};

/// Peak window, eco hour and bill total derived from both forecasts
#[utoipa::path(
    get,
    path = "/api/summary",
    tag = "summary",
    responses(
        (status = 200, description = "Dashboard summary computed successfully", body = ApiResponse<DashboardSummary>),
        (status = 500, description = "Forecast file could not be parsed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_summary(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<DashboardSummary>>, (StatusCode, Json<ErrorResponse>)> {
    info!("Request received for dashboard summary");
    let data = &state.settings.data;

    let (daily, monthly) = tokio::try_join!(
        load_dataset(&state, &data.daily_file),
        load_dataset(&state, &data.monthly_file),
    )?;
    debug!("Loaded {} daily and {} monthly rows", daily.len(), monthly.len());

    let summary = compute::summarize(&daily, &monthly, &state.settings.schema);

    Ok(Json(ApiResponse {
        data: summary,
        message: "Dashboard summary computed successfully".to_string(),
        success: true,
    }))
}
