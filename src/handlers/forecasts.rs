use axum::{extract::State, http::StatusCode, response::Json};
use common::Row;
use tracing::{error, info, instrument};

use crate::provider::ProviderError;
use crate::schemas::{AppState, ErrorResponse};

/// Reads one dataset, mapping provider failures to an HTTP error.
pub(crate) async fn load_dataset(
    state: &AppState,
    filename: &str,
) -> Result<Vec<Row>, (StatusCode, Json<ErrorResponse>)> {
    state.provider.read_rows(filename).await.map_err(|e| {
        error!("Failed to load {}: {}", filename, e);
        provider_error_response(&e)
    })
}

pub(crate) fn provider_error_response(e: &ProviderError) -> (StatusCode, Json<ErrorResponse>) {
    let code = match e {
        ProviderError::MalformedRow { .. } => "MALFORMED_ROW",
        ProviderError::Csv { .. } => "CSV_PARSE_ERROR",
        ProviderError::Io { .. } | ProviderError::Task(_) => "DATASET_UNREADABLE",
    };
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(e.to_string(), code)),
    )
}

/// Hourly load forecast for the next day
#[utoipa::path(
    get,
    path = "/api/daily",
    tag = "forecasts",
    responses(
        (status = 200, description = "Rows of the daily forecast; empty when the file is absent", body = [Row]),
        (status = 500, description = "Forecast file could not be parsed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_daily_forecast(
    State(state): State<AppState>,
) -> Result<Json<Vec<Row>>, (StatusCode, Json<ErrorResponse>)> {
    info!("Request received for daily forecast");
    let rows = load_dataset(&state, &state.settings.data.daily_file).await?;
    Ok(Json(rows))
}

/// Per-day price forecast for the next thirty days
#[utoipa::path(
    get,
    path = "/api/monthly",
    tag = "forecasts",
    responses(
        (status = 200, description = "Rows of the monthly forecast; empty when the file is absent", body = [Row]),
        (status = 500, description = "Forecast file could not be parsed", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_monthly_forecast(
    State(state): State<AppState>,
) -> Result<Json<Vec<Row>>, (StatusCode, Json<ErrorResponse>)> {
    info!("Request received for monthly forecast");
    let rows = load_dataset(&state, &state.settings.data.monthly_file).await?;
    Ok(Json(rows))
}
