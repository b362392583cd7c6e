use crate::handlers::{
    forecasts::{get_daily_forecast, get_monthly_forecast},
    health::health_check,
    index::index,
    summary::get_summary,
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let timeout = state.settings.server.request_timeout();

    Router::new()
        // Landing page and health check
        .route("/", get(index))
        .route("/health", get(health_check))
        // Forecast routes
        .route("/api/daily", get(get_daily_forecast))
        .route("/api/monthly", get(get_monthly_forecast))
        .route("/api/summary", get(get_summary))
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Add middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(timeout))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
