//! Suggestion module.
//!
//! Generated criteria and pros/cons arrive as untrusted text, keyed by
//! name. `SuggestionExtractor` turns that text into a validated
//! `SuggestionSet`; `MergePlan` maps names onto the decision's records
//! so the set can be upserted.

mod candidates;
mod extractor;
mod merge;

pub use candidates::{CriterionCandidate, EvaluationCandidate, SuggestionSet};
pub use extractor::{ExtractionError, ExtractionFailure, SuggestionExtractor, MAX_RESPONSE_LENGTH};
pub use merge::{plan_criterion, CriterionAction, MergePlan, MergeStats};
