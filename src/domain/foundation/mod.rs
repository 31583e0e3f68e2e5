//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the Clarify domain.

mod errors;
mod ids;
mod score;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CriterionId, DecisionId, EvaluationId, OptionId, UserId};
pub use score::{ImpactScore, Weight, SCORE_MAX, SCORE_MIN};
pub use timestamp::Timestamp;
