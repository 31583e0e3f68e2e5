//! HTTP handlers for decision endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::adapters::http::middleware::RequireUser;
use crate::adapters::http::{ErrorResponse, JsonBody};
use crate::application::handlers::decision::{
    AddCriterionCommand, AddCriterionHandler, AddOptionCommand, AddOptionHandler,
    AnalyzeDecisionHandler, AnalyzeDecisionQuery, ApplySuggestionCommand, ApplySuggestionHandler,
    CreateDecisionCommand, CreateDecisionHandler, DecisionError, DeleteDecisionCommand,
    DeleteDecisionHandler, GetDecisionHandler, GetDecisionQuery, ListDecisionsHandler,
    ListDecisionsQuery, SaveEvaluationCommand, SaveEvaluationHandler, UpdateDecisionCommand,
    UpdateDecisionHandler,
};
use crate::domain::foundation::{CriterionId, DecisionId, OptionId};
use crate::domain::suggestion::SuggestionSet;
use crate::ports::DecisionStore;

use super::dto::{
    AddCriterionRequest, AddOptionRequest, AnalysisResponse, ApplySuggestionResponse,
    CreateDecisionRequest, CriterionCreatedResponse, DecisionCommandResponse,
    DecisionDetailResponse, DecisionListResponse, EvaluationSavedResponse, MessageResponse,
    OptionCreatedResponse, SaveEvaluationRequest, UpdateDecisionRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DecisionHandlers {
    create_handler: Arc<CreateDecisionHandler>,
    list_handler: Arc<ListDecisionsHandler>,
    get_handler: Arc<GetDecisionHandler>,
    update_handler: Arc<UpdateDecisionHandler>,
    delete_handler: Arc<DeleteDecisionHandler>,
    add_option_handler: Arc<AddOptionHandler>,
    add_criterion_handler: Arc<AddCriterionHandler>,
    save_evaluation_handler: Arc<SaveEvaluationHandler>,
    analyze_handler: Arc<AnalyzeDecisionHandler>,
    apply_suggestion_handler: Arc<ApplySuggestionHandler>,
}

impl DecisionHandlers {
    /// Wires every decision handler to the same store.
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateDecisionHandler::new(store.clone())),
            list_handler: Arc::new(ListDecisionsHandler::new(store.clone())),
            get_handler: Arc::new(GetDecisionHandler::new(store.clone())),
            update_handler: Arc::new(UpdateDecisionHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteDecisionHandler::new(store.clone())),
            add_option_handler: Arc::new(AddOptionHandler::new(store.clone())),
            add_criterion_handler: Arc::new(AddCriterionHandler::new(store.clone())),
            save_evaluation_handler: Arc::new(SaveEvaluationHandler::new(store.clone())),
            analyze_handler: Arc::new(AnalyzeDecisionHandler::new(store.clone())),
            apply_suggestion_handler: Arc::new(ApplySuggestionHandler::new(store)),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/decisions - Create a decision
pub async fn create_decision(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    JsonBody(req): JsonBody<CreateDecisionRequest>,
) -> Response {
    let cmd = CreateDecisionCommand {
        user_id,
        title: req.title,
        description: req.description,
        tags: req.tags,
    };

    match handlers.create_handler.handle(cmd).await {
        Ok(decision) => {
            let response = DecisionCommandResponse::new("Decision created", &decision);
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// GET /api/decisions - List the caller's decisions, newest first
pub async fn list_decisions(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
) -> Response {
    match handlers.list_handler.handle(ListDecisionsQuery { user_id }).await {
        Ok(decisions) => {
            let response: DecisionListResponse = decisions.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// GET /api/decisions/:id - Decision with options, criteria and evaluations
pub async fn get_decision(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = GetDecisionQuery {
        user_id,
        decision_id,
    };

    match handlers.get_handler.handle(query).await {
        Ok(detail) => {
            let response: DecisionDetailResponse = detail.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// PUT /api/decisions/:id - Update title, description or tags
pub async fn update_decision(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
    JsonBody(req): JsonBody<UpdateDecisionRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = UpdateDecisionCommand {
        user_id,
        decision_id,
        title: req.title,
        description: req.description,
        tags: req.tags,
    };

    match handlers.update_handler.handle(cmd).await {
        Ok(decision) => {
            let response = DecisionCommandResponse::new("Decision updated", &decision);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// DELETE /api/decisions/:id - Delete a decision and everything under it
pub async fn delete_decision(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = DeleteDecisionCommand {
        user_id,
        decision_id,
    };

    match handlers.delete_handler.handle(cmd).await {
        Ok(()) => (StatusCode::OK, Json(MessageResponse::new("Decision deleted"))).into_response(),
        Err(e) => handle_decision_error(e),
    }
}

/// POST /api/decisions/:id/options - Add an option
pub async fn add_option(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
    JsonBody(req): JsonBody<AddOptionRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddOptionCommand {
        user_id,
        decision_id,
        name: req.name,
        summary: req.summary,
    };

    match handlers.add_option_handler.handle(cmd).await {
        Ok(option) => {
            let response = OptionCreatedResponse {
                message: "Option added".to_string(),
                option: (&option).into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// POST /api/decisions/:id/criteria - Add a weighted criterion
pub async fn add_criterion(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
    JsonBody(req): JsonBody<AddCriterionRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = AddCriterionCommand {
        user_id,
        decision_id,
        name: req.name,
        weight: req.weight,
    };

    match handlers.add_criterion_handler.handle(cmd).await {
        Ok(criterion) => {
            let response = CriterionCreatedResponse {
                message: "Criteria added".to_string(),
                criteria: (&criterion).into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// POST /api/decisions/:id/evaluations - Save pros and cons for a pair
pub async fn save_evaluation(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
    JsonBody(req): JsonBody<SaveEvaluationRequest>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let (option_id, criterion_id) = match (
        req.option_id.parse::<OptionId>(),
        req.criteria_id.parse::<CriterionId>(),
    ) {
        (Ok(option_id), Ok(criterion_id)) => (option_id, criterion_id),
        _ => return handle_decision_error(DecisionError::InvalidReference),
    };

    let cmd = SaveEvaluationCommand {
        user_id,
        decision_id,
        option_id,
        criterion_id,
        pros: req.pros,
        cons: req.cons,
    };

    match handlers.save_evaluation_handler.handle(cmd).await {
        Ok(evaluation) => {
            let response = EvaluationSavedResponse {
                message: "Evaluation saved".to_string(),
                evaluation: (&evaluation).into(),
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// POST /api/decisions/:id/analyze - Score every option
pub async fn analyze_decision(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let query = AnalyzeDecisionQuery {
        user_id,
        decision_id,
    };

    match handlers.analyze_handler.handle(query).await {
        Ok(analysis) => {
            let response: AnalysisResponse = analysis.into();
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

/// POST /api/decisions/:id/apply-ai - Merge a generated suggestion
pub async fn apply_suggestion(
    State(handlers): State<DecisionHandlers>,
    RequireUser(user_id): RequireUser,
    Path(decision_id): Path<String>,
    JsonBody(suggestion): JsonBody<SuggestionSet>,
) -> Response {
    let decision_id = match parse_decision_id(&decision_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let cmd = ApplySuggestionCommand {
        user_id,
        decision_id,
        suggestion,
    };

    match handlers.apply_suggestion_handler.handle(cmd).await {
        Ok(stats) => {
            let response = ApplySuggestionResponse {
                message: "AI suggestion applied successfully".to_string(),
                stats,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => handle_decision_error(e),
    }
}

fn parse_decision_id(raw: &str) -> Result<DecisionId, Response> {
    raw.parse::<DecisionId>().map_err(|_| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Invalid decision ID")),
        )
            .into_response()
    })
}

// ════════════════════════════════════════════════════════════════════════════
// Error handling
// ════════════════════════════════════════════════════════════════════════════

fn handle_decision_error(error: DecisionError) -> Response {
    let code = error.code().to_string();
    match error {
        DecisionError::NotFound => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(code, "Decision not found")),
        )
            .into_response(),
        DecisionError::Validation { field, message } => (
            StatusCode::BAD_REQUEST,
            Json(
                ErrorResponse::new(code, message)
                    .with_details(serde_json::json!({ "field": field })),
            ),
        )
            .into_response(),
        DecisionError::Analysis(_) => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                code,
                "Need at least one option and one criteria to analyze",
            )),
        )
            .into_response(),
        DecisionError::InvalidReference => (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(code, "Invalid option or criteria")),
        )
            .into_response(),
        DecisionError::Infrastructure(msg) => {
            error!(error = %msg, "Decision request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::internal("Server error")),
            )
                .into_response()
        }
    }
}
