//! HTTP routes for decision endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{
    add_criterion, add_option, analyze_decision, apply_suggestion, create_decision,
    delete_decision, get_decision, list_decisions, save_evaluation, update_decision,
    DecisionHandlers,
};

/// Creates the decision router, mounted under `/api/decisions`.
pub fn decision_routes(handlers: DecisionHandlers) -> Router {
    Router::new()
        .route("/", post(create_decision).get(list_decisions))
        .route(
            "/:id",
            get(get_decision).put(update_decision).delete(delete_decision),
        )
        .route("/:id/options", post(add_option))
        .route("/:id/criteria", post(add_criterion))
        .route("/:id/evaluations", post(save_evaluation))
        .route("/:id/analyze", post(analyze_decision))
        .route("/:id/apply-ai", post(apply_suggestion))
        .with_state(handlers)
}
