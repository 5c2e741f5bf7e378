//! Crisis analysis pipeline.
//!
//! Validates an uploaded image, combines the fixed instruction template
//! with the caller's text, sends both to the vision model, and normalizes
//! the raw reply into JSON.

pub mod model;
pub mod normalize;
pub mod prompt;
pub mod validate;

use serde_json::Value;

use crate::error::LensResult;
use crate::vision::GeminiVisionClient;
use validate::ImageUpload;

/// Run the full analysis pipeline for a validated upload.
///
/// Exactly one model call is made; any failure from it propagates as-is.
pub async fn analyze_crisis(
    client: &GeminiVisionClient,
    image: &ImageUpload,
    text: &str,
) -> LensResult<Value> {
    let prompt = prompt::build_prompt(text);
    let raw = client.generate(&prompt, image).await?;
    normalize::parse_model_json(&raw)
}
