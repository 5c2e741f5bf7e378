//! CrisisLens Web Server
//!
//! Axum-based web server exposing the crisis analysis API.

pub mod error;
pub mod routes;
pub mod state;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use state::AppState;

/// Largest accepted request body, in bytes. Bounds the multipart upload.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::frontend::index))
        .route("/health", get(routes::health::health))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(state: AppState, host: &str, port: u16) -> anyhow::Result<()> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    tracing::info!("Web server listening on http://{host}:{port}");

    axum::serve(listener, app).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::VisionCapability;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const BOUNDARY: &str = "crisislens-test-boundary";

    fn unconfigured_router() -> Router {
        create_router(AppState::new(VisionCapability::from_config(None, "test-model")))
    }

    fn configured_router() -> Router {
        create_router(AppState::new(VisionCapability::from_config(
            Some("test-key"),
            "test-model",
        )))
    }

    /// Build a multipart POST to /analyze. Each part is
    /// (field name, optional content type, payload).
    fn analyze_request(parts: &[(&str, Option<&str>, &[u8])]) -> Request<Body> {
        let mut body = Vec::new();
        for &(name, content_type, data) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            match content_type {
                Some(ct) => body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{name}\"; filename=\"upload\"\r\nContent-Type: {ct}\r\n\r\n"
                    )
                    .as_bytes(),
                ),
                None => body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
                ),
            }
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_always_ok() {
        // No model configured; health must not care.
        let response = unconfigured_router()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_analyze_unconfigured_returns_503() {
        let request = analyze_request(&[
            ("image", Some("image/png"), b"pretend-png"),
            ("text", None, b"Flooding near the river"),
        ]);
        let response = unconfigured_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_unsupported_media_type() {
        let request = analyze_request(&[
            ("image", Some("image/gif"), b"GIF89a"),
            ("text", None, b"help"),
        ]);
        let response = configured_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("Unsupported media type"));
    }

    #[tokio::test]
    async fn test_analyze_rejects_undecodable_image() {
        let request = analyze_request(&[
            ("image", Some("image/png"), b"not a real png"),
            ("text", None, b"help"),
        ]);
        let response = configured_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().contains("Invalid image"));
    }

    #[tokio::test]
    async fn test_analyze_requires_text_field() {
        let request = analyze_request(&[("image", Some("image/png"), b"pretend-png")]);
        let response = configured_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["detail"]
            .as_str()
            .unwrap()
            .contains("Missing required field: text"));
    }
}
