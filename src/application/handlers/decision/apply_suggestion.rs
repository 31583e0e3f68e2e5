//! ApplySuggestionHandler - Merges suggested criteria and evaluations.
//!
//! Suggestions reference options and criteria by name. Criteria are
//! upserted by name first, then each evaluation is resolved against the
//! decision's options and the merged criteria; unresolvable ones are
//! skipped. Re-applying the same suggestion changes nothing.

use std::sync::Arc;
use tracing::{debug, info};

use super::DecisionError;
use crate::domain::decision::{Criterion, Evaluation};
use crate::domain::foundation::{CriterionId, DecisionId, EvaluationId, UserId};
use crate::domain::suggestion::{
    plan_criterion, CriterionAction, CriterionCandidate, MergePlan, MergeStats, SuggestionSet,
};
use crate::ports::DecisionStore;

#[derive(Debug, Clone)]
pub struct ApplySuggestionCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
    pub suggestion: SuggestionSet,
}

pub struct ApplySuggestionHandler {
    store: Arc<dyn DecisionStore>,
}

impl ApplySuggestionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ApplySuggestionCommand) -> Result<MergeStats, DecisionError> {
        if cmd.suggestion.is_incomplete() {
            return Err(DecisionError::validation(
                "suggestion",
                "criteria and evaluations array are required",
            ));
        }

        let decision = self
            .store
            .find_decision(&cmd.decision_id, &cmd.user_id)
            .await?
            .ok_or(DecisionError::NotFound)?;
        let decision_id = *decision.id();

        let options = self.store.list_options(&decision_id).await?;
        let mut plan = MergePlan::new(&options);

        for candidate in &cmd.suggestion.criteria {
            if let Some(criterion) = self.merge_criterion(&decision_id, candidate).await? {
                plan.record_criterion(&criterion);
            }
        }

        for candidate in &cmd.suggestion.evaluations {
            let Some((option_id, criterion_id)) = plan.resolve(candidate) else {
                debug!(
                    option = %candidate.option_name,
                    criterion = %candidate.criteria_name,
                    "Skipping suggested evaluation with unknown names"
                );
                continue;
            };

            self.store
                .upsert_evaluation(Evaluation::new(
                    EvaluationId::new(),
                    decision_id,
                    option_id,
                    criterion_id,
                    candidate.pros.clone(),
                    candidate.cons.clone(),
                ))
                .await?;
            plan.record_evaluation();
        }

        let stats = plan.stats();
        info!(
            decision_id = %decision_id,
            criteria = stats.criteria_count,
            evaluations = stats.evaluation_count,
            "Suggestion applied"
        );
        Ok(stats)
    }

    /// Creates, reweights or keeps the criterion named by `candidate`.
    ///
    /// Returns `None` for blank names.
    async fn merge_criterion(
        &self,
        decision_id: &DecisionId,
        candidate: &CriterionCandidate,
    ) -> Result<Option<Criterion>, DecisionError> {
        let existing = self
            .store
            .find_criterion_by_name(decision_id, candidate.name.trim())
            .await?;

        let Some(action) = plan_criterion(candidate, existing.as_ref()) else {
            return Ok(None);
        };

        let criterion = match (action, existing) {
            (CriterionAction::Create { name, weight }, _) => {
                let created = Criterion::new(CriterionId::new(), *decision_id, &name, weight)?;
                self.store.save_criterion(&created).await?;
                created
            }
            (CriterionAction::Reweight { weight, .. }, Some(mut current)) => {
                current.reweight(weight);
                self.store.save_criterion(&current).await?;
                current
            }
            (CriterionAction::Keep { .. }, Some(current)) => current,
            // Reweight and Keep are only planned for an existing criterion.
            (_, None) => return Ok(None),
        };

        Ok(Some(criterion))
    }
}
