//! Typed view of the crisis assessment payload.

use serde::{Deserialize, Serialize};

/// Crisis assessment as described by the instruction prompt.
///
/// Every field is optional or defaulted: the wire contract is permissive
/// and the server returns whatever object the model produced. This type
/// exists for display code that wants named fields, not for validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrisisAssessment {
    #[serde(default)]
    pub crisis_type: Option<String>,
    #[serde(default)]
    pub severity_level: Option<String>,
    #[serde(default)]
    pub key_observations: Vec<String>,
    #[serde(default)]
    pub identified_risks: Vec<String>,
    #[serde(default)]
    pub recommended_actions: Vec<String>,
}
