//! HTTP adapter for AI suggestion endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{SuggestRequest, SuggestResponse};
pub use handlers::SuggestionHandlers;
pub use routes::suggestion_routes;
