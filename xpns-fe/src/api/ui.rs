//! UI serving routes
//!
//! Serves the embedded entry form page.

use axum::response::Html;

const INDEX_HTML: &str = include_str!("../ui/index.html");

/// GET /
///
/// Serves the expense entry form
pub async fn serve_index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
