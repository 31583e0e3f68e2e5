//! Rate limiting middleware for axum.
//!
//! Every request consumes one unit from its client's bucket. The client is
//! identified by the first `X-Forwarded-For` entry, then `X-Real-IP`, then
//! the socket address; requests with none of these share the global bucket.
//!
//! Rate limit status is returned in standard HTTP headers:
//! - `X-RateLimit-Limit`: Maximum requests allowed in the window
//! - `X-RateLimit-Remaining`: Requests remaining in the current window
//! - `X-RateLimit-Reset`: Unix timestamp when the window resets
//! - `Retry-After`: Seconds to wait (only on 429 response)
//!
//! ```ignore
//! let limiter: Arc<dyn RateLimiter> = Arc::new(InMemoryRateLimiter::new(100, 900));
//!
//! let app = Router::new()
//!     .route("/api/resource", get(handler))
//!     .layer(middleware::from_fn_with_state(limiter, rate_limit_middleware));
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{header, HeaderMap, HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::adapters::http::ErrorResponse;
use crate::ports::{RateLimitDenied, RateLimitKey, RateLimitResult, RateLimiter};

/// Rate limiter middleware state.
pub type RateLimiterState = Arc<dyn RateLimiter>;

/// Standard rate limit header names.
pub mod headers {
    use super::HeaderName;

    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    pub static X_RATELIMIT_REMAINING: HeaderName =
        HeaderName::from_static("x-ratelimit-remaining");
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

/// Checks the caller's quota before running the handler.
///
/// Fails open: if the limiter itself errors, the request proceeds
/// without rate limit headers.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let key = match extract_client_ip(request.headers(), connect_info.as_ref()) {
        Some(ip) => RateLimitKey::ip(&ip),
        None => RateLimitKey::global(),
    };

    match limiter.check(key.clone()).await {
        Ok(RateLimitResult::Denied(denied)) => {
            warn!(
                scope = %denied.scope,
                client = %key.identifier,
                retry_after_secs = denied.retry_after_secs,
                "Rate limit exceeded"
            );
            rate_limit_response(denied)
        }
        Ok(RateLimitResult::Allowed(status)) => {
            let mut response = next.run(request).await;
            add_rate_limit_headers(
                response.headers_mut(),
                status.limit,
                status.remaining,
                status.reset_at.as_unix_secs(),
            );
            response
        }
        Err(e) => {
            warn!("Rate limiter unavailable: {}", e);
            next.run(request).await
        }
    }
}

/// Extract client IP, checking forwarded headers first.
fn extract_client_ip(
    headers: &HeaderMap,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    let forwarded = headers
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
        .and_then(|list| list.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    let real_ip = || {
        headers
            .get("x-real-ip")
            .and_then(|h| h.to_str().ok())
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
    };

    forwarded
        .or_else(real_ip)
        .map(str::to_string)
        .or_else(|| connect_info.map(|ci| ci.0.ip().to_string()))
}

/// Create a 429 Too Many Requests response.
fn rate_limit_response(denied: RateLimitDenied) -> Response {
    let body = ErrorResponse::new("RATE_LIMITED", denied.message).with_details(
        serde_json::json!({ "retryAfterSecs": denied.retry_after_secs }),
    );
    let mut response = (StatusCode::TOO_MANY_REQUESTS, Json(body)).into_response();

    let headers = response.headers_mut();
    add_rate_limit_headers(headers, denied.limit, 0, denied.reset_at.as_unix_secs());
    headers.insert(
        header::RETRY_AFTER,
        HeaderValue::from(denied.retry_after_secs),
    );

    response
}

fn add_rate_limit_headers(headers: &mut HeaderMap, limit: u32, remaining: u32, reset_at: u64) {
    headers.insert(headers::X_RATELIMIT_LIMIT.clone(), HeaderValue::from(limit));
    headers.insert(
        headers::X_RATELIMIT_REMAINING.clone(),
        HeaderValue::from(remaining),
    );
    headers.insert(headers::X_RATELIMIT_RESET.clone(), HeaderValue::from(reset_at));
}
