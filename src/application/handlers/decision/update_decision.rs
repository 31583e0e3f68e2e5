//! UpdateDecisionHandler - Command handler for editing a decision header.

use std::sync::Arc;

use super::DecisionError;
use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionStore;

/// Partial update; `None` leaves a field untouched.
#[derive(Debug, Clone)]
pub struct UpdateDecisionCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
    /// Ignored when blank.
    pub title: Option<String>,
    /// `Some("")` clears the description.
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Handler for updating decisions.
pub struct UpdateDecisionHandler {
    store: Arc<dyn DecisionStore>,
}

impl UpdateDecisionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: UpdateDecisionCommand) -> Result<Decision, DecisionError> {
        let mut decision = self
            .store
            .find_decision(&cmd.decision_id, &cmd.user_id)
            .await?
            .ok_or(DecisionError::NotFound)?;

        if let Some(title) = cmd.title.as_deref().filter(|t| !t.trim().is_empty()) {
            decision.rename(title)?;
        }
        if let Some(description) = cmd.description.as_deref() {
            decision.set_description(description);
        }
        if let Some(tags) = cmd.tags {
            decision.set_tags(tags);
        }

        self.store.save_decision(&decision).await?;
        Ok(decision)
    }
}
