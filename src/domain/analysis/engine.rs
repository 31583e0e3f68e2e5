//! Decision Analyzer - Weighted pros/cons scoring, risk and confidence per option.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;
use tracing::debug;

use crate::domain::decision::{total_impact, Criterion, DecisionOption, Evaluation};
use crate::domain::foundation::{CriterionId, OptionId, Weight};

/// Net impact mapped onto the ends of the 0-1 scale.
///
/// Sums beyond ±`IMPACT_SPAN` saturate at 0 or 1.
pub const IMPACT_SPAN: f64 = 10.0;

/// Cons ratio below which an option is `Low` risk.
pub const LOW_RISK_RATIO: f64 = 0.25;

/// Cons ratio below which an option is `Medium` risk.
pub const MEDIUM_RISK_RATIO: f64 = 0.5;

/// Inputs the analyzer cannot work with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("Need at least one option to analyze")]
    NoOptions,

    #[error("Need at least one criterion to analyze")]
    NoCriteria,
}

/// How much of an option's recorded impact comes from cons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// No pros or cons recorded at all.
    Unknown,
}

impl RiskLevel {
    /// Classifies total pros/cons impact for one option.
    ///
    /// Ratios exactly on a threshold fall into the higher bucket.
    pub fn from_impacts(pros_impact: u64, cons_impact: u64) -> Self {
        let total = pros_impact + cons_impact;
        if total == 0 {
            return RiskLevel::Unknown;
        }

        let ratio = cons_impact as f64 / total as f64;
        if ratio < LOW_RISK_RATIO {
            RiskLevel::Low
        } else if ratio < MEDIUM_RISK_RATIO {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Contribution of one evaluation to an option's score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDetail {
    pub criteria_id: CriterionId,
    pub criteria_name: String,
    pub weight: Weight,
    pub weight_norm: f64,
    pub net_impact: i64,
    pub norm_impact: f64,
    pub score: f64,
}

/// Scored outcome for a single option.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionResult {
    pub option_id: OptionId,
    pub name: String,
    pub score: i64,
    pub risk: RiskLevel,
    pub confidence: u8,
    pub details: Vec<CriterionDetail>,
}

/// Full analysis: every option in input order plus the winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub results: Vec<OptionResult>,
    pub recommended: Option<OptionResult>,
}

/// Maps a net impact onto [0, 1], clamping outside ±`IMPACT_SPAN`.
pub fn normalize_impact(net_impact: i64) -> f64 {
    ((net_impact as f64 + IMPACT_SPAN) / (2.0 * IMPACT_SPAN)).clamp(0.0, 1.0)
}

/// Running totals for one option while criteria are walked.
struct OptionTally<'a> {
    option: &'a DecisionOption,
    total_score: f64,
    pros_impact: u64,
    cons_impact: u64,
    filled: HashSet<CriterionId>,
    details: Vec<CriterionDetail>,
}

impl<'a> OptionTally<'a> {
    fn new(option: &'a DecisionOption) -> Self {
        Self {
            option,
            total_score: 0.0,
            pros_impact: 0,
            cons_impact: 0,
            filled: HashSet::new(),
            details: Vec::new(),
        }
    }

    fn finish(self, total_criteria: usize) -> OptionResult {
        let confidence = if total_criteria == 0 {
            0
        } else {
            let pct = (self.filled.len() as f64 / total_criteria as f64 * 100.0).round();
            pct.min(100.0) as u8
        };

        OptionResult {
            option_id: *self.option.id(),
            name: self.option.name().to_string(),
            score: self.total_score.round() as i64,
            risk: RiskLevel::from_impacts(self.pros_impact, self.cons_impact),
            confidence,
            details: self.details,
        }
    }
}

/// Weighted pros/cons analysis.
pub struct DecisionAnalyzer;

impl DecisionAnalyzer {
    /// Scores every option against every criterion.
    ///
    /// # Algorithm
    /// Per criterion `c` and each evaluation `e` of it:
    /// `score = (c.weight / 5) * clamp((Σpros - Σcons + 10) / 20, 0, 1) * 100`,
    /// summed per option and rounded.
    ///
    /// # Edge Cases
    /// - Empty options or criteria: error, no partial result
    /// - Evaluation for an unknown option or criterion: skipped
    /// - Empty pros and cons: zero impact, `Unknown` risk
    /// - Duplicate evaluations for one pair: both add score, the
    ///   criterion counts once toward confidence
    /// - Equal scores: the option listed first is recommended
    pub fn analyze(
        options: &[DecisionOption],
        criteria: &[Criterion],
        evaluations: &[Evaluation],
    ) -> Result<AnalysisReport, AnalysisError> {
        if options.is_empty() {
            return Err(AnalysisError::NoOptions);
        }
        if criteria.is_empty() {
            return Err(AnalysisError::NoCriteria);
        }

        let mut tallies: Vec<OptionTally> = options.iter().map(OptionTally::new).collect();
        let slots: HashMap<OptionId, usize> = options
            .iter()
            .enumerate()
            .map(|(i, o)| (*o.id(), i))
            .collect();

        for criterion in criteria {
            let weight_norm = criterion.weight().normalized();

            for evaluation in evaluations
                .iter()
                .filter(|e| e.criterion_id() == criterion.id())
            {
                let Some(&slot) = slots.get(evaluation.option_id()) else {
                    debug!(
                        evaluation_id = %evaluation.id(),
                        option_id = %evaluation.option_id(),
                        "Skipping evaluation for unknown option"
                    );
                    continue;
                };

                let pros_impact = total_impact(evaluation.pros());
                let cons_impact = total_impact(evaluation.cons());
                let net_impact = i64::from(pros_impact) - i64::from(cons_impact);
                let norm_impact = normalize_impact(net_impact);
                let score = weight_norm * norm_impact * 100.0;

                let tally = &mut tallies[slot];
                tally.total_score += score;
                tally.pros_impact += u64::from(pros_impact);
                tally.cons_impact += u64::from(cons_impact);
                tally.filled.insert(*criterion.id());
                tally.details.push(CriterionDetail {
                    criteria_id: *criterion.id(),
                    criteria_name: criterion.name().to_string(),
                    weight: criterion.weight(),
                    weight_norm,
                    net_impact,
                    norm_impact,
                    score,
                });
            }
        }

        let known: HashSet<&CriterionId> = criteria.iter().map(|c| c.id()).collect();
        let orphaned = evaluations
            .iter()
            .filter(|e| !known.contains(e.criterion_id()))
            .count();
        if orphaned > 0 {
            debug!(orphaned, "Skipping evaluations for unknown criteria");
        }

        let results: Vec<OptionResult> = tallies
            .into_iter()
            .map(|t| t.finish(criteria.len()))
            .collect();
        let recommended = Self::pick_recommended(&results).cloned();

        debug!(
            options = results.len(),
            criteria = criteria.len(),
            recommended = recommended.as_ref().map(|r| r.name.as_str()),
            "Decision analyzed"
        );

        Ok(AnalysisReport {
            results,
            recommended,
        })
    }

    /// First result holding the strictly greatest score.
    fn pick_recommended(results: &[OptionResult]) -> Option<&OptionResult> {
        let mut best: Option<&OptionResult> = None;
        for result in results {
            if best.map_or(true, |b| result.score > b.score) {
                best = Some(result);
            }
        }
        best
    }
}
