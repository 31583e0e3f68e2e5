//! Clarify - Weighted pros/cons decision analysis
//!
//! Users record a decision, its options and weighted criteria, then argue
//! each option with scored pros and cons. The analysis engine ranks the
//! options; an AI provider can propose criteria and arguments to start from.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
