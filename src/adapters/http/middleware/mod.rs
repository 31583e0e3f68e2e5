//! HTTP middleware for axum.
//!
//! - `identity` - Caller identity extractor
//! - `rate_limit` - Per-client fixed-window limits

pub mod identity;
pub mod rate_limit;

pub use identity::{IdentityRejection, RequireUser, USER_ID_HEADER};
pub use rate_limit::{rate_limit_middleware, RateLimiterState};
