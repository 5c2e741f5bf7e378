//! Frontend route handler.
//!
//! Serves the embedded single-page upload form.

use axum::response::{Html, IntoResponse};

const INDEX_HTML: &str = include_str!("../../../../assets/web/index.html");

/// GET / - Serve the analysis frontend.
pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}
