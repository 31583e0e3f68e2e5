//! GetDecisionHandler - Query handler for a decision and its records.

use std::sync::Arc;

use super::DecisionError;
use crate::domain::decision::{Criterion, Decision, DecisionOption, Evaluation};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionStore;

/// Query for a single decision.
#[derive(Debug, Clone)]
pub struct GetDecisionQuery {
    pub user_id: UserId,
    pub decision_id: DecisionId,
}

/// A decision with everything recorded against it.
#[derive(Debug, Clone)]
pub struct DecisionDetail {
    pub decision: Decision,
    pub options: Vec<DecisionOption>,
    pub criteria: Vec<Criterion>,
    pub evaluations: Vec<Evaluation>,
}

/// Handler for fetching a decision with its children.
pub struct GetDecisionHandler {
    store: Arc<dyn DecisionStore>,
}

impl GetDecisionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, query: GetDecisionQuery) -> Result<DecisionDetail, DecisionError> {
        let decision = self
            .store
            .find_decision(&query.decision_id, &query.user_id)
            .await?
            .ok_or(DecisionError::NotFound)?;

        let (options, criteria, evaluations) = futures::try_join!(
            self.store.list_options(decision.id()),
            self.store.list_criteria(decision.id()),
            self.store.list_evaluations(decision.id()),
        )?;

        Ok(DecisionDetail {
            decision,
            options,
            criteria,
            evaluations,
        })
    }
}
