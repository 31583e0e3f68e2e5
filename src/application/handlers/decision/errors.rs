//! Errors returned by the decision handlers.

use thiserror::Error;

use crate::domain::analysis::AnalysisError;
use crate::domain::foundation::{DomainError, ErrorCode, ValidationError};

/// Decision handler errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecisionError {
    /// Missing, or owned by someone else.
    #[error("Decision not found")]
    NotFound,

    #[error("{message}")]
    Validation { field: String, message: String },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    /// Option or criterion does not belong to the decision.
    #[error("Invalid option or criteria")]
    InvalidReference,

    #[error("Storage failure: {0}")]
    Infrastructure(String),
}

impl DecisionError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        DecisionError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DecisionError::NotFound => ErrorCode::DecisionNotFound,
            DecisionError::Validation { .. } | DecisionError::Analysis(_) => {
                ErrorCode::ValidationFailed
            }
            DecisionError::InvalidReference => ErrorCode::InvalidReference,
            DecisionError::Infrastructure(_) => ErrorCode::StorageError,
        }
    }
}

impl From<ValidationError> for DecisionError {
    fn from(err: ValidationError) -> Self {
        DecisionError::Validation {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for DecisionError {
    fn from(err: DomainError) -> Self {
        match err.code {
            ErrorCode::DecisionNotFound => DecisionError::NotFound,
            ErrorCode::OptionNotFound
            | ErrorCode::CriterionNotFound
            | ErrorCode::InvalidReference => DecisionError::InvalidReference,
            ErrorCode::ValidationFailed => DecisionError::Validation {
                field: err.details.get("field").cloned().unwrap_or_default(),
                message: err.message,
            },
            ErrorCode::StorageError | ErrorCode::InternalError => {
                DecisionError::Infrastructure(err.message)
            }
        }
    }
}
