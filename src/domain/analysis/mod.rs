//! Analysis Module - Pure scoring of a decision's options.
//!
//! `DecisionAnalyzer` takes a snapshot of options, criteria and
//! evaluations and returns a ranked `AnalysisReport`. No ports or
//! adapters are involved; callers fetch the snapshot first.

mod engine;

pub use engine::{
    normalize_impact, AnalysisError, AnalysisReport, CriterionDetail, DecisionAnalyzer,
    OptionResult, RiskLevel, IMPACT_SPAN, LOW_RISK_RATIO, MEDIUM_RISK_RATIO,
};
