//! Decision module.
//!
//! The user-entered records the analysis runs on: a decision, its
//! options and weighted criteria, and the pros/cons evaluations that
//! link one option to one criterion.

mod aggregate;
mod criterion;
mod evaluation;
mod option;

pub use aggregate::Decision;
pub use criterion::Criterion;
pub use evaluation::{total_impact, Evaluation, ProCon};
pub use option::DecisionOption;
