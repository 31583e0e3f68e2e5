//! HTTP handlers for suggestion endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::middleware::RequireUser;
use crate::adapters::http::{ErrorResponse, JsonBody};
use crate::application::handlers::suggestion::{
    SuggestDecisionDataHandler, SuggestDecisionDataQuery, SuggestionError,
};
use crate::ports::AIError;

use super::dto::{SuggestRequest, SuggestResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct SuggestionHandlers {
    suggest_handler: Arc<SuggestDecisionDataHandler>,
}

impl SuggestionHandlers {
    pub fn new(suggest_handler: Arc<SuggestDecisionDataHandler>) -> Self {
        Self { suggest_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/ai/suggest - Generate criteria and pros/cons for a decision
pub async fn suggest(
    State(handlers): State<SuggestionHandlers>,
    RequireUser(user_id): RequireUser,
    JsonBody(req): JsonBody<SuggestRequest>,
) -> Response {
    let query = SuggestDecisionDataQuery {
        user_id,
        decision_title: req.decision_title,
        description: req.description,
        options: req.options,
    };

    match handlers.suggest_handler.handle(query).await {
        Ok(generated) => {
            let response = SuggestResponse {
                success: true,
                generated,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_suggestion_error(e),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_suggestion_error(error: SuggestionError) -> Response {
    match error {
        SuggestionError::InvalidRequest(msg) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request(msg)),
        )
            .into_response(),
        SuggestionError::ProviderNotConfigured => {
            error!("Suggestion requested but no AI provider is configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("AI provider not configured")),
            )
                .into_response()
        }
        SuggestionError::Provider(AIError::RateLimited { retry_after_secs }) => {
            let mut response = (
                StatusCode::TOO_MANY_REQUESTS,
                Json(ErrorResponse::new(
                    "AI_RATE_LIMITED",
                    "AI provider is busy, try again later",
                )),
            )
                .into_response();
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, HeaderValue::from(retry_after_secs));
            response
        }
        SuggestionError::Provider(err) => {
            error!(error = %err, "AI provider request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse::new("AI_PROVIDER_ERROR", "Failed to generate AI suggestion")),
            )
                .into_response()
        }
        SuggestionError::Extraction(err) => (
            StatusCode::BAD_GATEWAY,
            Json(
                ErrorResponse::new("AI_RESPONSE_INVALID", err.to_string()).with_details(
                    serde_json::json!({ "raw": err.raw, "extracted": err.extracted }),
                ),
            ),
        )
            .into_response(),
    }
}
