//! AI suggestion handlers.

mod errors;
mod suggest_decision_data;

pub use errors::SuggestionError;
pub use suggest_decision_data::{
    build_prompt, SuggestDecisionDataHandler, SuggestDecisionDataQuery,
};
