//! AddCriterionHandler - Command handler for adding a weighted criterion.

use std::sync::Arc;

use super::DecisionError;
use crate::domain::decision::Criterion;
use crate::domain::foundation::{CriterionId, DecisionId, UserId, Weight};
use crate::ports::DecisionStore;

#[derive(Debug, Clone)]
pub struct AddCriterionCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
    pub name: String,
    /// Raw weight; checked against the 1-5 range.
    pub weight: Option<i64>,
}

pub struct AddCriterionHandler {
    store: Arc<dyn DecisionStore>,
}

impl AddCriterionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddCriterionCommand) -> Result<Criterion, DecisionError> {
        let decision = self
            .store
            .find_decision(&cmd.decision_id, &cmd.user_id)
            .await?
            .ok_or(DecisionError::NotFound)?;

        let weight = match cmd.weight {
            Some(raw) if !cmd.name.trim().is_empty() => Weight::try_new(raw)?,
            _ => {
                return Err(DecisionError::validation(
                    "criteria",
                    "Criteria name and weight are required",
                ))
            }
        };

        let criterion = Criterion::new(CriterionId::new(), *decision.id(), &cmd.name, weight)?;
        self.store.save_criterion(&criterion).await?;

        Ok(criterion)
    }
}
