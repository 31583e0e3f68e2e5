//! SaveEvaluationHandler - Command handler recording pros and cons.

use std::sync::Arc;

use super::DecisionError;
use crate::domain::decision::{Evaluation, ProCon};
use crate::domain::foundation::{CriterionId, DecisionId, EvaluationId, OptionId, UserId};
use crate::ports::DecisionStore;

/// Command to record pros and cons for one option/criterion pair.
///
/// Saving the same pair again replaces the earlier arguments.
#[derive(Debug, Clone)]
pub struct SaveEvaluationCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
    pub option_id: OptionId,
    pub criterion_id: CriterionId,
    pub pros: Vec<ProCon>,
    pub cons: Vec<ProCon>,
}

pub struct SaveEvaluationHandler {
    store: Arc<dyn DecisionStore>,
}

impl SaveEvaluationHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SaveEvaluationCommand) -> Result<Evaluation, DecisionError> {
        let decision = self
            .store
            .find_decision(&cmd.decision_id, &cmd.user_id)
            .await?
            .ok_or(DecisionError::NotFound)?;

        let (option, criterion) = futures::try_join!(
            self.store.find_option(decision.id(), &cmd.option_id),
            self.store.find_criterion(decision.id(), &cmd.criterion_id),
        )?;
        if option.is_none() || criterion.is_none() {
            return Err(DecisionError::InvalidReference);
        }

        let evaluation = Evaluation::new(
            EvaluationId::new(),
            *decision.id(),
            cmd.option_id,
            cmd.criterion_id,
            cmd.pros,
            cmd.cons,
        );

        Ok(self.store.upsert_evaluation(evaluation).await?)
    }
}
