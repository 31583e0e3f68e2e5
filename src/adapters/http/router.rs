//! Top-level router: health check, API modules and the middleware stack.

use axum::{
    http::{header, HeaderName, HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::warn;

use super::middleware::{rate_limit_middleware, RateLimiterState, USER_ID_HEADER};
use super::{decision_routes, suggestion_routes, DecisionHandlers, ErrorResponse, SuggestionHandlers};
use crate::config::ServerConfig;

pub const HEALTH_MESSAGE: &str = "Clarify API is running";

/// Builds the complete application.
///
/// Layers run outermost first: tracing, CORS, timeout, then rate limiting,
/// so rejected and timed-out requests still show up in the trace log.
pub fn app_router(
    decisions: DecisionHandlers,
    suggestions: SuggestionHandlers,
    rate_limiter: RateLimiterState,
    server: &ServerConfig,
) -> Router {
    Router::new()
        .route("/", get(health))
        .nest("/api/decisions", decision_routes(decisions))
        .nest("/api/ai", suggestion_routes(suggestions))
        .fallback(not_found)
        .layer(from_fn_with_state(rate_limiter, rate_limit_middleware))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(&server.cors_origins_list()))
        .layer(TraceLayer::new_for_http())
}

async fn health() -> &'static str {
    HEALTH_MESSAGE
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Route not found")),
    )
        .into_response()
}

/// Credentialed CORS for the configured origins.
///
/// Origins that are not valid header values are skipped with a warning.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::adapters::memory::InMemoryDecisionStore;
    use crate::adapters::rate_limiter::InMemoryRateLimiter;
    use crate::application::handlers::suggestion::SuggestDecisionDataHandler;
    use crate::ports::AIProvider;
    use axum::body::{to_bytes, Body};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let store = Arc::new(InMemoryDecisionStore::new());
        let provider: Arc<dyn AIProvider> = Arc::new(MockAIProvider::new());
        app_router(
            DecisionHandlers::new(store),
            SuggestionHandlers::new(Arc::new(SuggestDecisionDataHandler::new(
                Some(provider),
                0.6,
            ))),
            Arc::new(InMemoryRateLimiter::new(100, 900)),
            &ServerConfig::default(),
        )
    }

    fn get_request(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn health_check_returns_banner() {
        let response = app().oneshot(get_request("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], HEALTH_MESSAGE.as_bytes());
    }

    #[tokio::test]
    async fn unknown_route_returns_json_404() {
        let response = app().oneshot(get_request("/api/nothing")).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let request = axum::http::Request::builder()
            .uri("/")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:5173"
        );
    }

    #[tokio::test]
    async fn responses_carry_rate_limit_headers() {
        let response = app().oneshot(get_request("/")).await.unwrap();
        assert_eq!(response.headers()["x-ratelimit-limit"], "100");
    }
}
