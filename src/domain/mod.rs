//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `decision` - Decisions, options, criteria and evaluations
//! - `analysis` - Weighted pros/cons scoring engine
//! - `suggestion` - Extraction and merge of generated suggestions

pub mod analysis;
pub mod decision;
pub mod foundation;
pub mod suggestion;
