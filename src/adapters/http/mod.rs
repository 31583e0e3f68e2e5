//! HTTP adapters - REST API implementations.
//!
//! Each application module has its own HTTP adapter for endpoint exposure;
//! `router` assembles them behind the shared middleware stack.

pub mod decision;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod router;
pub mod suggestion;

// Re-export key types for convenience
pub use decision::{decision_routes, DecisionHandlers};
pub use error::ErrorResponse;
pub use extract::JsonBody;
pub use router::{app_router, HEALTH_MESSAGE};
pub use suggestion::{suggestion_routes, SuggestionHandlers};
