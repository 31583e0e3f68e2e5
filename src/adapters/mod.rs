//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `ai` - OpenAI-compatible chat completions client and a scripted mock
//! - `http` - axum routes, DTOs and middleware
//! - `memory` - In-memory decision store
//! - `rate_limiter` - Fixed-window request quotas

pub mod ai;
pub mod http;
pub mod memory;
pub mod rate_limiter;
