//! Application state.

use std::sync::Arc;

use crisislens_core::vision::GeminiVisionClient;

/// Vision capability, computed once at startup.
///
/// When the Gemini client cannot be constructed (missing API key), the
/// remediation text is kept here so handlers surface it instead of
/// probing the environment per request.
#[derive(Clone)]
pub enum VisionCapability {
    Ready(Arc<GeminiVisionClient>),
    Missing(String),
}

impl VisionCapability {
    /// Build the capability from an optional API key and a model id.
    pub fn from_config(api_key: Option<&str>, model: &str) -> Self {
        match api_key {
            Some(key) if !key.is_empty() => {
                Self::Ready(Arc::new(GeminiVisionClient::new(key, model)))
            }
            _ => Self::Missing(
                "GEMINI_API_KEY is not set. Add it to your environment.".to_string(),
            ),
        }
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub vision: VisionCapability,
}

impl AppState {
    pub fn new(vision: VisionCapability) -> Self {
        Self { vision }
    }
}
