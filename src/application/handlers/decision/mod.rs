//! Decision command and query handlers.

mod add_criterion;
mod add_option;
mod analyze_decision;
mod apply_suggestion;
mod create_decision;
mod delete_decision;
mod errors;
mod get_decision;
mod list_decisions;
mod save_evaluation;
mod update_decision;

#[cfg(test)]
mod test_support;

pub use add_criterion::{AddCriterionCommand, AddCriterionHandler};
pub use add_option::{AddOptionCommand, AddOptionHandler};
pub use analyze_decision::{AnalyzeDecisionHandler, AnalyzeDecisionQuery, DecisionAnalysis};
pub use apply_suggestion::{ApplySuggestionCommand, ApplySuggestionHandler};
pub use create_decision::{CreateDecisionCommand, CreateDecisionHandler};
pub use delete_decision::{DeleteDecisionCommand, DeleteDecisionHandler};
pub use errors::DecisionError;
pub use get_decision::{DecisionDetail, GetDecisionHandler, GetDecisionQuery};
pub use list_decisions::{ListDecisionsHandler, ListDecisionsQuery};
pub use save_evaluation::{SaveEvaluationCommand, SaveEvaluationHandler};
pub use update_decision::{UpdateDecisionCommand, UpdateDecisionHandler};
