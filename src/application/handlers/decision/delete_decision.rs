//! DeleteDecisionHandler - Command handler for removing a decision.

use std::sync::Arc;
use tracing::info;

use super::DecisionError;
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionStore;

/// Command to delete a decision with everything attached to it.
#[derive(Debug, Clone)]
pub struct DeleteDecisionCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
}

pub struct DeleteDecisionHandler {
    store: Arc<dyn DecisionStore>,
}

impl DeleteDecisionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: DeleteDecisionCommand) -> Result<(), DecisionError> {
        if !self
            .store
            .delete_decision(&cmd.decision_id, &cmd.user_id)
            .await?
        {
            return Err(DecisionError::NotFound);
        }

        info!(decision_id = %cmd.decision_id, "Decision deleted");
        Ok(())
    }
}
