//! Rate limiting configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Fixed-window limit applied per client IP
#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Requests allowed per window
    #[serde(default = "default_requests")]
    pub requests_per_window: u32,

    /// Window length in seconds
    #[serde(default = "default_window")]
    pub window_secs: u32,
}

impl RateLimitConfig {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.requests_per_window == 0 || self.window_secs == 0 {
            return Err(ValidationError::InvalidRateLimit);
        }
        Ok(())
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: default_requests(),
            window_secs: default_window(),
        }
    }
}

fn default_requests() -> u32 {
    100
}

fn default_window() -> u32 {
    15 * 60
}
