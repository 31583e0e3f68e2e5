//! ListDecisionsHandler - Query handler for a user's decisions.

use std::sync::Arc;

use super::DecisionError;
use crate::domain::decision::Decision;
use crate::domain::foundation::UserId;
use crate::ports::DecisionStore;

/// Query for every decision owned by a user.
#[derive(Debug, Clone)]
pub struct ListDecisionsQuery {
    pub user_id: UserId,
}

/// Handler returning decisions newest first.
pub struct ListDecisionsHandler {
    store: Arc<dyn DecisionStore>,
}

impl ListDecisionsHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: ListDecisionsQuery) -> Result<Vec<Decision>, DecisionError> {
        Ok(self.store.list_decisions(&query.user_id).await?)
    }
}
