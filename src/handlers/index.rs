use axum::response::Html;

pub const INDEX_HTML: &str =
    "<h1>Server is Running!</h1><p>Try <a href='/api/daily'>/api/daily</a></p>";

/// Static landing page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
