//! Caller identity extractor.
//!
//! Authentication happens upstream; the gateway forwards the verified user
//! id in the `x-user-id` header. Handlers that need a caller take
//! `RequireUser` as an argument.
//!
//! ```ignore
//! async fn my_handler(RequireUser(user_id): RequireUser) -> impl IntoResponse {
//!     format!("Hello, {}!", user_id)
//! }
//! ```

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::ErrorResponse;
use crate::domain::foundation::UserId;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires a caller identity.
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = IdentityRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| UserId::new(value).ok())
            .map(RequireUser)
            .ok_or(IdentityRejection::Missing)
    }
}

/// Rejection when no usable identity was forwarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRejection {
    Missing,
}

impl IntoResponse for IdentityRejection {
    fn into_response(self) -> Response {
        match self {
            IdentityRejection::Missing => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized("Authentication required")),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(request: Request<()>) -> Result<RequireUser, IdentityRejection> {
        let (mut parts, _body) = request.into_parts();
        RequireUser::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn extracts_trimmed_user_id() {
        let request = Request::builder()
            .uri("/test")
            .header(USER_ID_HEADER, " user-123 ")
            .body(())
            .unwrap();

        let RequireUser(user_id) = extract(request).await.unwrap();
        assert_eq!(user_id.as_str(), "user-123");
    }

    #[tokio::test]
    async fn rejects_missing_header() {
        let request = Request::builder().uri("/test").body(()).unwrap();
        assert_eq!(extract(request).await.unwrap_err(), IdentityRejection::Missing);
    }

    #[tokio::test]
    async fn rejects_blank_header() {
        let request = Request::builder()
            .uri("/test")
            .header(USER_ID_HEADER, "   ")
            .body(())
            .unwrap();
        assert_eq!(extract(request).await.unwrap_err(), IdentityRejection::Missing);
    }

    #[test]
    fn rejection_is_401() {
        let response = IdentityRejection::Missing.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
