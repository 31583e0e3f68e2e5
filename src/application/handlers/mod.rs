//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod decision;
pub mod suggestion;

pub use decision::*;
pub use suggestion::*;
