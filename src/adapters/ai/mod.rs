//! AI Provider Adapters.
//!
//! - `OpenAIProvider` - Any OpenAI-compatible chat completions API (Groq by default)
//! - `MockAIProvider` - Scripted responses for tests

mod mock_provider;
mod openai_provider;

pub use mock_provider::{MockAIProvider, MockError, MockResponse};
pub use openai_provider::{OpenAIConfig, OpenAIProvider};
