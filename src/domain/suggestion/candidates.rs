//! Suggested criteria and evaluations, keyed by name rather than id.

use serde::{Deserialize, Serialize};

use crate::domain::decision::ProCon;
use crate::domain::foundation::{ValidationError, Weight};

/// A criterion proposed by a suggestion source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionCandidate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weight: Option<Weight>,
}

/// Pros and cons proposed for an option/criterion pair, both named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationCandidate {
    #[serde(default)]
    pub option_name: String,
    #[serde(default)]
    pub criteria_name: String,
    #[serde(default)]
    pub pros: Vec<ProCon>,
    #[serde(default)]
    pub cons: Vec<ProCon>,
}

/// Everything a suggestion proposes for one decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    #[serde(default)]
    pub criteria: Vec<CriterionCandidate>,
    #[serde(default)]
    pub evaluations: Vec<EvaluationCandidate>,
}

impl SuggestionSet {
    /// True when either list is empty; such a set cannot be merged.
    pub fn is_incomplete(&self) -> bool {
        self.criteria.is_empty() || self.evaluations.is_empty()
    }

    /// Strict check for generated content: at least one criterion and
    /// no blank names anywhere.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.criteria.is_empty() {
            return Err(ValidationError::empty_field("criteria"));
        }
        if self.criteria.iter().any(|c| c.name.trim().is_empty()) {
            return Err(ValidationError::empty_field("criteria.name"));
        }
        for evaluation in &self.evaluations {
            if evaluation.option_name.trim().is_empty() {
                return Err(ValidationError::empty_field("evaluations.optionName"));
            }
            if evaluation.criteria_name.trim().is_empty() {
                return Err(ValidationError::empty_field("evaluations.criteriaName"));
            }
        }
        Ok(())
    }
}
