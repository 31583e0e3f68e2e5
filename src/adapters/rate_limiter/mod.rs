//! Rate limiter adapters.
//!
//! - `InMemoryRateLimiter` - Fixed-window counters for a single process
//!
//! ```ignore
//! use clarify::adapters::rate_limiter::InMemoryRateLimiter;
//!
//! let limiter = InMemoryRateLimiter::from_config(&config.rate_limit);
//! ```

mod in_memory;

pub use in_memory::InMemoryRateLimiter;
