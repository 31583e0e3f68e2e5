//! AddOptionHandler - Command handler for adding a candidate option.

use std::sync::Arc;

use super::DecisionError;
use crate::domain::decision::DecisionOption;
use crate::domain::foundation::{DecisionId, OptionId, UserId};
use crate::ports::DecisionStore;

#[derive(Debug, Clone)]
pub struct AddOptionCommand {
    pub user_id: UserId,
    pub decision_id: DecisionId,
    pub name: String,
    pub summary: Option<String>,
}

pub struct AddOptionHandler {
    store: Arc<dyn DecisionStore>,
}

impl AddOptionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddOptionCommand) -> Result<DecisionOption, DecisionError> {
        let decision = self
            .store
            .find_decision(&cmd.decision_id, &cmd.user_id)
            .await?
            .ok_or(DecisionError::NotFound)?;

        if cmd.name.trim().is_empty() {
            return Err(DecisionError::validation("name", "Option name is required"));
        }

        let option = DecisionOption::new(
            OptionId::new(),
            *decision.id(),
            &cmd.name,
            cmd.summary.as_deref(),
        )?;
        self.store.save_option(&option).await?;

        Ok(option)
    }
}
