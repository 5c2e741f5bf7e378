//! Gemini vision client.
//!
//! Sends the analysis prompt plus an inline base64 image to the Gemini
//! `generateContent` endpoint and returns the model's raw text reply.

use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::analysis::validate::ImageUpload;
use crate::error::{LensError, LensResult};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model when `GEMINI_MODEL` is not set.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Client for the Gemini multimodal API.
pub struct GeminiVisionClient {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    parts: Vec<Part>,
}

/// Untagged union of text and inline media parts.
///
/// Variant order matters for `#[serde(untagged)]` decoding.
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

/// Base64 inline payload for image parts.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiVisionClient {
    /// Create a new client with the given API key and model.
    pub fn new(api_key: &str, model: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            model: model.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Model identifier this client sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send the prompt and image, returning the model's raw text.
    ///
    /// One request per call; upstream failures surface as typed errors
    /// with the response body attached. No retries.
    pub async fn generate(&self, prompt: &str, image: &ImageUpload) -> LensResult<String> {
        let data = base64::engine::general_purpose::STANDARD.encode(&image.bytes);

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.media_type.clone(),
                            data,
                        },
                    },
                ],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            GEMINI_API_URL, self.model, self.api_key
        );

        debug!(model = %self.model, image_bytes = image.bytes.len(), "Calling Gemini generateContent");
        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LensError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response.json().await?;

        let text = body
            .candidates
            .first()
            .and_then(|candidate| {
                candidate.content.parts.iter().find_map(|part| match part {
                    Part::Text { text } => Some(text.as_str()),
                    _ => None,
                })
            })
            .ok_or(LensError::NoContent)?;

        Ok(text.to_string())
    }
}
