#[cfg(test)]
mod integration_tests {
    use crate::provider::MalformedRowPolicy;
    use crate::schemas::{ApiResponse, ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{
        setup_test_server, setup_test_server_with, TestData, DAILY_CSV,
    };
    use axum::http::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN};
    use axum::http::{HeaderValue, StatusCode};
    use common::{DashboardSummary, Row};
    use serde_json::json;

    #[tokio::test]
    async fn test_health_check() {
        let data = TestData::new();
        data.write("next_day_energy_prediction.csv", DAILY_CSV);
        let server = setup_test_server(&data);

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.data_dir, data.path().display().to_string());
        assert!(body.daily_available);
        assert!(!body.monthly_available);
    }

    #[tokio::test]
    async fn test_index_serves_static_html() {
        let data = TestData::new();
        let server = setup_test_server(&data);

        let response = server.get("/").await;

        response.assert_status(StatusCode::OK);
        let content_type = response.headers().get(CONTENT_TYPE).unwrap().to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));
        assert!(response.text().contains("Server is Running!"));
        assert!(response.text().contains("/api/daily"));
    }

    #[tokio::test]
    async fn test_daily_returns_rows_keyed_by_header() {
        let data = TestData::new();
        data.write("next_day_energy_prediction.csv", "h1,h2\na,b\n");
        let server = setup_test_server(&data);

        let response = server.get("/api/daily").await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!([{ "h1": "a", "h2": "b" }]));
    }

    #[tokio::test]
    async fn test_daily_forecast_rows() {
        let data = TestData::with_forecasts();
        let server = setup_test_server(&data);

        let response = server.get("/api/daily").await;

        response.assert_status(StatusCode::OK);
        let rows: Vec<Row> = response.json();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1].get("hour"), Some("01:00"));
        assert_eq!(rows[1].get("predicted_kVAh"), Some("7"));
        assert_eq!(rows[0].columns().collect::<Vec<_>>(), vec!["hour", "predicted_kVAh"]);
    }

    #[tokio::test]
    async fn test_monthly_forecast_rows() {
        let data = TestData::with_forecasts();
        let server = setup_test_server(&data);

        let response = server.get("/api/monthly").await;

        response.assert_status(StatusCode::OK);
        response.assert_json(&json!([
            { "date": "2025-03-01", "yhat": "1.615", "predicted_price": "10.5" },
            { "date": "2025-03-02", "yhat": "3.115", "predicted_price": "20.25" },
        ]));
    }

    #[tokio::test]
    async fn test_missing_files_return_empty_arrays() {
        let data = TestData::new();
        let server = setup_test_server(&data);

        for path in ["/api/daily", "/api/monthly"] {
            let response = server.get(path).await;
            response.assert_status(StatusCode::OK);
            response.assert_json(&json!([]));
        }
    }

    #[tokio::test]
    async fn test_repeated_calls_return_identical_json() {
        let data = TestData::with_forecasts();
        let server = setup_test_server(&data);

        for path in ["/api/daily", "/api/monthly"] {
            let first = server.get(path).await;
            first.assert_status(StatusCode::OK);
            let rows: Vec<Row> = first.json();
            assert!(!rows.is_empty(), "{path} returned no rows");

            let second = server.get(path).await;
            assert_eq!(first.text(), second.text());
        }
    }

    #[tokio::test]
    async fn test_rewritten_file_is_read_again() {
        let data = TestData::new();
        let server = setup_test_server(&data);

        server.get("/api/daily").await.assert_json(&json!([]));

        data.write("next_day_energy_prediction.csv", "hour,predicted_kVAh\n05:00,2.5\n");
        server
            .get("/api/daily")
            .await
            .assert_json(&json!([{ "hour": "05:00", "predicted_kVAh": "2.5" }]));
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let data = TestData::with_forecasts();
        let server = setup_test_server(&data);

        let response = server
            .get("/api/daily")
            .add_header(ORIGIN, HeaderValue::from_static("http://localhost:3000"))
            .await;

        response.assert_status(StatusCode::OK);
        assert_eq!(response.json::<Vec<Row>>().len(), 4);
        assert_eq!(
            response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("*"))
        );
    }

    #[tokio::test]
    async fn test_short_rows_are_padded_by_default() {
        let data = TestData::new();
        data.write("monthly_price_prediction.csv", "date,predicted_price\n2025-03-01\n");
        let server = setup_test_server(&data);

        server
            .get("/api/monthly")
            .await
            .assert_json(&json!([{ "date": "2025-03-01", "predicted_price": "" }]));
    }

    #[tokio::test]
    async fn test_reject_policy_surfaces_malformed_rows() {
        let data = TestData::new();
        data.write("monthly_price_prediction.csv", "date,predicted_price\n2025-03-01,1,extra\n");
        let mut settings = data.settings();
        settings.data.malformed_rows = MalformedRowPolicy::Reject;
        let server = setup_test_server_with(settings);

        let response = server.get("/api/monthly").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body: ErrorResponse = response.json();
        assert!(!body.success);
        assert_eq!(body.code, "MALFORMED_ROW");
        assert!(body.error.contains("line 2"));

        // The other dataset is unaffected
        server.get("/api/daily").await.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_configured_filenames_are_used() {
        let data = TestData::new();
        data.write("load.csv", "h,v\n1,2\n");
        let mut settings = data.settings();
        settings.data.daily_file = "load.csv".to_string();
        let server = setup_test_server_with(settings);

        server.get("/api/daily").await.assert_json(&json!([{ "h": "1", "v": "2" }]));
    }

    #[tokio::test]
    async fn test_summary_endpoint() {
        let data = TestData::with_forecasts();
        let server = setup_test_server(&data);

        let response = server.get("/api/summary").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<DashboardSummary> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Dashboard summary computed successfully");
        assert_eq!(body.data.peak_window, "01:00 - 02:00");
        assert_eq!(body.data.peak_load, Some(7.0));
        assert_eq!(body.data.eco_hour, "02:00");
        assert_eq!(body.data.eco_load, Some(1.0));
        assert_eq!(body.data.total_bill.to_string(), "30.75");
        assert_eq!(body.data.daily_rows, 4);
        assert_eq!(body.data.monthly_rows, 2);

        let raw: serde_json::Value = response.json();
        assert_eq!(raw["data"]["total_bill"], "30.75");
        assert_eq!(raw["data"]["billing_period"], json!({ "start": "2025-03-01", "end": "2025-03-02" }));
    }

    #[tokio::test]
    async fn test_summary_without_files_is_pending() {
        let data = TestData::new();
        let server = setup_test_server(&data);

        let response = server.get("/api/summary").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<DashboardSummary> = response.json();
        assert_eq!(body.data, DashboardSummary::pending());
    }

    #[tokio::test]
    async fn test_summary_uses_configured_schema() {
        let data = TestData::new();
        data.write(
            "next_day_energy_prediction.csv",
            "ds,yhat\n07:00,4\n19:00,9\n03:00,2\n",
        );
        let mut settings = data.settings();
        settings.schema.daily.load_column = "yhat".to_string();
        settings.schema.daily.hour_column = "ds".to_string();
        let server = setup_test_server_with(settings);

        let body: ApiResponse<DashboardSummary> = server.get("/api/summary").await.json();
        assert_eq!(body.data.peak_window, "18:00 - 22:00");
        assert_eq!(body.data.peak_load, Some(9.0));
        assert_eq!(body.data.eco_hour, "03:00");
        assert_eq!(body.data.total_bill.to_string(), "0.00");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let data = TestData::new();
        let server = setup_test_server(&data);

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let doc: serde_json::Value = response.json();
        assert!(doc["paths"]["/api/daily"].is_object());
        assert!(doc["paths"]["/api/summary"].is_object());
    }
}
