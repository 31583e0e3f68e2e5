//! Name-keyed merge of a suggestion into a decision's records.
//!
//! A `MergePlan` lives for one merge call. It resolves option names
//! against a snapshot of the decision's options and remembers each
//! criterion as it is upserted, so evaluation candidates can be matched
//! by `(optionName, criteriaName)`.

use serde::Serialize;
use std::collections::HashMap;

use super::{CriterionCandidate, EvaluationCandidate};
use crate::domain::decision::{Criterion, DecisionOption};
use crate::domain::foundation::{CriterionId, OptionId, Weight};

/// What to do with one criterion candidate given the current record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CriterionAction {
    /// No criterion with this name yet.
    Create { name: String, weight: Weight },
    /// Existing criterion, new weight supplied.
    Reweight { id: CriterionId, weight: Weight },
    /// Existing criterion, no weight supplied.
    Keep { id: CriterionId },
}

/// Counts reported after a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeStats {
    /// Distinct criterion names merged.
    pub criteria_count: usize,
    /// Evaluation candidates applied, duplicates included.
    pub evaluation_count: usize,
}

/// Decides how a candidate maps onto the existing criterion of that name.
///
/// Returns `None` for candidates with a blank name.
pub fn plan_criterion(
    candidate: &CriterionCandidate,
    existing: Option<&Criterion>,
) -> Option<CriterionAction> {
    let name = candidate.name.trim();
    if name.is_empty() {
        return None;
    }

    Some(match (existing, candidate.weight) {
        (None, weight) => CriterionAction::Create {
            name: name.to_string(),
            weight: weight.unwrap_or_default(),
        },
        (Some(c), Some(weight)) => CriterionAction::Reweight { id: *c.id(), weight },
        (Some(c), None) => CriterionAction::Keep { id: *c.id() },
    })
}

/// Name lookups for a single merge.
#[derive(Debug)]
pub struct MergePlan<'a> {
    options: HashMap<&'a str, &'a DecisionOption>,
    criteria: HashMap<String, CriterionId>,
    evaluation_count: usize,
}

impl<'a> MergePlan<'a> {
    /// Indexes options by name; a later option shadows an earlier one
    /// with the same name.
    pub fn new(options: &'a [DecisionOption]) -> Self {
        Self {
            options: options.iter().map(|o| (o.name(), o)).collect(),
            criteria: HashMap::new(),
            evaluation_count: 0,
        }
    }

    /// Remembers a criterion after it has been created or updated.
    pub fn record_criterion(&mut self, criterion: &Criterion) {
        self.criteria
            .insert(criterion.name().to_string(), *criterion.id());
    }

    /// Resolves both names of an evaluation candidate, case-sensitively.
    ///
    /// `None` when either name is unknown; such candidates are skipped.
    pub fn resolve(&self, candidate: &EvaluationCandidate) -> Option<(OptionId, CriterionId)> {
        let option = self.options.get(candidate.option_name.trim())?;
        let criterion = self.criteria.get(candidate.criteria_name.trim())?;
        Some((*option.id(), *criterion))
    }

    /// Counts one applied evaluation.
    pub fn record_evaluation(&mut self) {
        self.evaluation_count += 1;
    }

    pub fn stats(&self) -> MergeStats {
        MergeStats {
            criteria_count: self.criteria.len(),
            evaluation_count: self.evaluation_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::DecisionId;

    fn candidate(name: &str, weight: Option<i64>) -> CriterionCandidate {
        CriterionCandidate {
            name: name.to_string(),
            weight: weight.map(|w| Weight::try_new(w).unwrap()),
        }
    }

    fn eval_candidate(option: &str, criterion: &str) -> EvaluationCandidate {
        EvaluationCandidate {
            option_name: option.to_string(),
            criteria_name: criterion.to_string(),
            pros: vec![],
            cons: vec![],
        }
    }

    fn existing(name: &str) -> Criterion {
        Criterion::new(CriterionId::new(), DecisionId::new(), name, Weight::DEFAULT).unwrap()
    }

    #[test]
    fn new_criterion_without_weight_defaults_to_three() {
        let action = plan_criterion(&candidate("Cost", None), None).unwrap();
        assert_eq!(
            action,
            CriterionAction::Create {
                name: "Cost".to_string(),
                weight: Weight::try_new(3).unwrap()
            }
        );
    }

    #[test]
    fn existing_criterion_is_reweighted_only_when_weight_given() {
        let c = existing("Cost");

        assert_eq!(
            plan_criterion(&candidate("Cost", Some(5)), Some(&c)),
            Some(CriterionAction::Reweight {
                id: *c.id(),
                weight: Weight::try_new(5).unwrap()
            })
        );
        assert_eq!(
            plan_criterion(&candidate("Cost", None), Some(&c)),
            Some(CriterionAction::Keep { id: *c.id() })
        );
    }

    #[test]
    fn blank_candidate_is_skipped() {
        assert_eq!(plan_criterion(&candidate("  ", Some(2)), None), None);
    }

    #[test]
    fn resolve_matches_names_case_sensitively() {
        let d = DecisionId::new();
        let options = vec![DecisionOption::new(OptionId::new(), d, "Rust", None).unwrap()];
        let cost = existing("Cost");

        let mut plan = MergePlan::new(&options);
        plan.record_criterion(&cost);

        assert_eq!(
            plan.resolve(&eval_candidate("Rust", "Cost")),
            Some((*options[0].id(), *cost.id()))
        );
        assert_eq!(plan.resolve(&eval_candidate("rust", "Cost")), None);
        assert_eq!(plan.resolve(&eval_candidate("Rust", "cost")), None);
    }

    #[test]
    fn later_option_with_same_name_wins() {
        let d = DecisionId::new();
        let options = vec![
            DecisionOption::new(OptionId::new(), d, "Same", None).unwrap(),
            DecisionOption::new(OptionId::new(), d, "Same", None).unwrap(),
        ];
        let cost = existing("Cost");
        let mut plan = MergePlan::new(&options);
        plan.record_criterion(&cost);

        let (option_id, _) = plan.resolve(&eval_candidate("Same", "Cost")).unwrap();
        assert_eq!(option_id, *options[1].id());
    }

    #[test]
    fn stats_count_distinct_criteria() {
        let options: Vec<DecisionOption> = vec![];
        let cost = existing("Cost");
        let mut plan = MergePlan::new(&options);
        plan.record_criterion(&cost);
        plan.record_criterion(&cost);
        plan.record_evaluation();
        plan.record_evaluation();

        assert_eq!(
            plan.stats(),
            MergeStats {
                criteria_count: 1,
                evaluation_count: 2
            }
        );
    }
}
