//! In-memory persistence adapters.
//!
//! State lives for the lifetime of the process.

mod decision_store;

pub use decision_store::InMemoryDecisionStore;
