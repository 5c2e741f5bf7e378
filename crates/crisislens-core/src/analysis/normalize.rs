//! Recovery of structured JSON from raw model output.

use serde_json::Value;

use crate::error::{LensError, LensResult};

/// Parse the model's raw text reply into a JSON value.
///
/// Tries a direct parse first, then the substring between the first `{`
/// and the last `}`, since models sometimes wrap the object in prose or
/// markdown fences. The brace slice is a heuristic, not a JSON-aware
/// scanner: stray braces in string values outside the real object can
/// still defeat it.
///
/// The parsed value is returned as-is; no schema is enforced on it.
pub fn parse_model_json(text: &str) -> LensResult<Value> {
    if let Ok(value) = serde_json::from_str(text) {
        return Ok(value);
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if end > start {
            if let Ok(value) = serde_json::from_str(&text[start..=end]) {
                return Ok(value);
            }
        }
    }

    Err(LensError::InvalidModelOutput)
}
