//! AnalyzeDecisionHandler - Query handler running the weighted analysis.

use std::sync::Arc;
use tracing::debug;

use super::DecisionError;
use crate::domain::analysis::{AnalysisReport, DecisionAnalyzer};
use crate::domain::decision::{Criterion, Decision};
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionStore;

#[derive(Debug, Clone)]
pub struct AnalyzeDecisionQuery {
    pub user_id: UserId,
    pub decision_id: DecisionId,
}

/// Analysis output along with the inputs a client needs to render it.
///
/// Computed on demand; never stored.
#[derive(Debug, Clone)]
pub struct DecisionAnalysis {
    pub decision: Decision,
    pub criteria: Vec<Criterion>,
    pub report: AnalysisReport,
}

pub struct AnalyzeDecisionHandler {
    store: Arc<dyn DecisionStore>,
}

impl AnalyzeDecisionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: AnalyzeDecisionQuery,
    ) -> Result<DecisionAnalysis, DecisionError> {
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

        let report = DecisionAnalyzer::analyze(&options, &criteria, &evaluations)?;

        debug!(
            decision_id = %decision.id(),
            options = options.len(),
            criteria = criteria.len(),
            evaluations = evaluations.len(),
            recommended = report.recommended.as_ref().map(|r| r.name.as_str()),
            "Decision analyzed"
        );

        Ok(DecisionAnalysis {
            decision,
            criteria,
            report,
        })
    }
}
