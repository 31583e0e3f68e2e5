//! HTTP adapter for decision endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    AddCriterionRequest, AddOptionRequest, AnalysisResponse, ApplySuggestionResponse,
    CreateDecisionRequest, CriterionView, DecisionDetailResponse, DecisionListResponse,
    DecisionView, EvaluationView, OptionView, SaveEvaluationRequest, UpdateDecisionRequest,
};
pub use handlers::DecisionHandlers;
pub use routes::decision_routes;
