//! Errors returned by suggestion generation.

use thiserror::Error;

use crate::domain::suggestion::ExtractionError;
use crate::ports::AIError;

#[derive(Debug, Error)]
pub enum SuggestionError {
    /// Missing title or options.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("AI provider not configured")]
    ProviderNotConfigured,

    #[error("AI provider error: {0}")]
    Provider(#[from] AIError),

    /// The provider answered, but not with usable JSON.
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}
