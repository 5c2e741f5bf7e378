//! Crisis analysis route handler.

use axum::extract::{Multipart, State};
use axum::Json;
use serde_json::Value;
use tracing::info;

use crisislens_core::analysis::{self, validate};
use crisislens_core::LensError;

use crate::error::ApiError;
use crate::state::{AppState, VisionCapability};

/// POST /analyze - Analyze an uploaded image plus text context.
///
/// The capability check runs first: with no model configured the request
/// is answered 503 before any field is validated or any external call is
/// attempted.
pub async fn analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Value>, ApiError> {
    let client = match &state.vision {
        VisionCapability::Ready(client) => client.clone(),
        VisionCapability::Missing(reason) => {
            return Err(LensError::unavailable(reason.clone()).into());
        }
    };

    let mut image: Option<(String, Vec<u8>)> = None;
    let mut text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Malformed multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "image" => {
                let media_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read image field: {e}")))?;
                image = Some((media_type, bytes.to_vec()));
            }
            "text" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::bad_request(format!("Failed to read text field: {e}")))?;
                text = Some(value);
            }
            _ => {}
        }
    }

    let (media_type, bytes) =
        image.ok_or_else(|| ApiError::bad_request("Missing required field: image"))?;
    let text = text.ok_or_else(|| ApiError::bad_request("Missing required field: text"))?;

    let upload = validate::validate_upload(&media_type, bytes)?;

    info!(media_type = %upload.media_type, text_len = text.len(), "Analyzing crisis report");
    let result = analysis::analyze_crisis(&client, &upload, &text).await?;

    Ok(Json(result))
}
