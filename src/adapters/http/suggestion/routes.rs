//! HTTP routes for suggestion endpoints.

use axum::{routing::post, Router};

use super::handlers::{suggest, SuggestionHandlers};

/// Creates the suggestion router, mounted under `/api/ai`.
pub fn suggestion_routes(handlers: SuggestionHandlers) -> Router {
    Router::new()
        .route("/suggest", post(suggest))
        .with_state(handlers)
}
