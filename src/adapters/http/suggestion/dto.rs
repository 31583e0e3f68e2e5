//! HTTP DTOs for suggestion endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::suggestion::SuggestionSet;

/// What the user has entered so far; the decision need not exist yet.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestRequest {
    #[serde(default)]
    pub decision_title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SuggestResponse {
    pub success: bool,
    pub generated: SuggestionSet,
}
