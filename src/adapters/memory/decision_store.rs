//! In-Memory Decision Store
//!
//! Keeps every decision together with its options, criteria and
//! evaluations in a single map entry, so cascade delete is one removal.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::decision::{Criterion, Decision, DecisionOption, Evaluation};
use crate::domain::foundation::{
    CriterionId, DecisionId, DomainError, ErrorCode, OptionId, UserId,
};
use crate::ports::DecisionStore;

/// A decision and the records attached to it.
#[derive(Debug, Clone)]
struct DecisionRecord {
    decision: Decision,
    /// Insertion sequence; breaks `created_at` ties when listing.
    seq: u64,
    options: Vec<DecisionOption>,
    criteria: Vec<Criterion>,
    evaluations: Vec<Evaluation>,
}

#[derive(Debug, Default)]
struct StoreState {
    records: HashMap<DecisionId, DecisionRecord>,
    next_seq: u64,
}

/// In-memory implementation of `DecisionStore`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDecisionStore {
    state: Arc<RwLock<StoreState>>,
}

fn decision_not_found(id: &DecisionId) -> DomainError {
    DomainError::new(ErrorCode::DecisionNotFound, "Decision not found")
        .with_detail("decision_id", id.to_string())
}

impl InMemoryDecisionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored decisions across all owners.
    pub async fn decision_count(&self) -> usize {
        self.state.read().await.records.len()
    }
}

#[async_trait]
impl DecisionStore for InMemoryDecisionStore {
    async fn save_decision(&self, decision: &Decision) -> Result<(), DomainError> {
        let mut state = self.state.write().await;

        if let Some(record) = state.records.get_mut(decision.id()) {
            record.decision = decision.clone();
            return Ok(());
        }

        let seq = state.next_seq;
        state.next_seq += 1;
        state.records.insert(
            *decision.id(),
            DecisionRecord {
                decision: decision.clone(),
                seq,
                options: Vec::new(),
                criteria: Vec::new(),
                evaluations: Vec::new(),
            },
        );
        Ok(())
    }

    async fn find_decision(
        &self,
        id: &DecisionId,
        owner: &UserId,
    ) -> Result<Option<Decision>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .get(id)
            .filter(|record| record.decision.is_owned_by(owner))
            .map(|record| record.decision.clone()))
    }

    async fn list_decisions(&self, owner: &UserId) -> Result<Vec<Decision>, DomainError> {
        let state = self.state.read().await;

        let mut owned: Vec<&DecisionRecord> = state
            .records
            .values()
            .filter(|record| record.decision.is_owned_by(owner))
            .collect();
        owned.sort_by(|a, b| {
            b.decision
                .created_at()
                .cmp(a.decision.created_at())
                .then(b.seq.cmp(&a.seq))
        });

        Ok(owned.into_iter().map(|r| r.decision.clone()).collect())
    }

    async fn delete_decision(&self, id: &DecisionId, owner: &UserId) -> Result<bool, DomainError> {
        let mut state = self.state.write().await;

        let owned = state
            .records
            .get(id)
            .is_some_and(|record| record.decision.is_owned_by(owner));
        if owned {
            state.records.remove(id);
        }
        Ok(owned)
    }

    async fn save_option(&self, option: &DecisionOption) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let record = state
            .records
            .get_mut(option.decision_id())
            .ok_or_else(|| decision_not_found(option.decision_id()))?;

        match record.options.iter_mut().find(|o| o.id() == option.id()) {
            Some(existing) => *existing = option.clone(),
            None => record.options.push(option.clone()),
        }
        Ok(())
    }

    async fn find_option(
        &self,
        decision_id: &DecisionId,
        id: &OptionId,
    ) -> Result<Option<DecisionOption>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .get(decision_id)
            .and_then(|record| record.options.iter().find(|o| o.id() == id))
            .cloned())
    }

    async fn list_options(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<DecisionOption>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .get(decision_id)
            .map(|record| record.options.clone())
            .unwrap_or_default())
    }

    async fn save_criterion(&self, criterion: &Criterion) -> Result<(), DomainError> {
        let mut state = self.state.write().await;
        let record = state
            .records
            .get_mut(criterion.decision_id())
            .ok_or_else(|| decision_not_found(criterion.decision_id()))?;

        match record.criteria.iter_mut().find(|c| c.id() == criterion.id()) {
            Some(existing) => *existing = criterion.clone(),
            None => record.criteria.push(criterion.clone()),
        }
        Ok(())
    }

    async fn find_criterion(
        &self,
        decision_id: &DecisionId,
        id: &CriterionId,
    ) -> Result<Option<Criterion>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .get(decision_id)
            .and_then(|record| record.criteria.iter().find(|c| c.id() == id))
            .cloned())
    }

    async fn find_criterion_by_name(
        &self,
        decision_id: &DecisionId,
        name: &str,
    ) -> Result<Option<Criterion>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .get(decision_id)
            .and_then(|record| record.criteria.iter().find(|c| c.name() == name))
            .cloned())
    }

    async fn list_criteria(&self, decision_id: &DecisionId) -> Result<Vec<Criterion>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .get(decision_id)
            .map(|record| record.criteria.clone())
            .unwrap_or_default())
    }

    async fn upsert_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, DomainError> {
        let mut state = self.state.write().await;
        let record = state
            .records
            .get_mut(evaluation.decision_id())
            .ok_or_else(|| decision_not_found(evaluation.decision_id()))?;

        if let Some(existing) = record
            .evaluations
            .iter_mut()
            .find(|e| e.same_pair(&evaluation))
        {
            existing.replace_arguments(evaluation.pros().to_vec(), evaluation.cons().to_vec());
            return Ok(existing.clone());
        }

        record.evaluations.push(evaluation.clone());
        Ok(evaluation)
    }

    async fn list_evaluations(
        &self,
        decision_id: &DecisionId,
    ) -> Result<Vec<Evaluation>, DomainError> {
        let state = self.state.read().await;
        Ok(state
            .records
            .get(decision_id)
            .map(|record| record.evaluations.clone())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::ProCon;
    use crate::domain::foundation::{EvaluationId, ImpactScore, Weight};

    fn alice() -> UserId {
        UserId::new("alice").unwrap()
    }

    fn bob() -> UserId {
        UserId::new("bob").unwrap()
    }

    fn decision(owner: UserId, title: &str) -> Decision {
        Decision::new(DecisionId::new(), owner, title, None, vec![]).unwrap()
    }

    fn option(decision_id: DecisionId, name: &str) -> DecisionOption {
        DecisionOption::new(OptionId::new(), decision_id, name, None).unwrap()
    }

    fn criterion(decision_id: DecisionId, name: &str, weight: i64) -> Criterion {
        Criterion::new(
            CriterionId::new(),
            decision_id,
            name,
            Weight::try_new(weight).unwrap(),
        )
        .unwrap()
    }

    fn evaluation(o: &DecisionOption, c: &Criterion, pro: &str) -> Evaluation {
        Evaluation::new(
            EvaluationId::new(),
            *o.decision_id(),
            *o.id(),
            *c.id(),
            vec![ProCon::new(pro, ImpactScore::try_new(3).unwrap()).unwrap()],
            vec![],
        )
    }

    // ─── Decisions ───────────────────────────────────────────────────

    #[tokio::test]
    async fn find_decision_is_scoped_to_owner() {
        let store = InMemoryDecisionStore::new();
        let d = decision(alice(), "Which laptop?");
        store.save_decision(&d).await.unwrap();

        assert!(store.find_decision(d.id(), &alice()).await.unwrap().is_some());
        assert!(store.find_decision(d.id(), &bob()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_decisions_returns_newest_first() {
        let store = InMemoryDecisionStore::new();
        let first = decision(alice(), "First");
        let second = decision(alice(), "Second");
        let other = decision(bob(), "Not mine");
        store.save_decision(&first).await.unwrap();
        store.save_decision(&second).await.unwrap();
        store.save_decision(&other).await.unwrap();

        let listed = store.list_decisions(&alice()).await.unwrap();
        let titles: Vec<&str> = listed.iter().map(|d| d.title()).collect();
        assert_eq!(titles, vec!["Second", "First"]);
    }

    #[tokio::test]
    async fn saving_existing_decision_replaces_it_in_place() {
        let store = InMemoryDecisionStore::new();
        let mut d = decision(alice(), "Draft");
        store.save_decision(&d).await.unwrap();
        store.save_option(&option(*d.id(), "A")).await.unwrap();

        d.rename("Final").unwrap();
        store.save_decision(&d).await.unwrap();

        let found = store.find_decision(d.id(), &alice()).await.unwrap().unwrap();
        assert_eq!(found.title(), "Final");
        assert_eq!(store.list_options(d.id()).await.unwrap().len(), 1);
        assert_eq!(store.decision_count().await, 1);
    }

    #[tokio::test]
    async fn delete_cascades_to_children() {
        let store = InMemoryDecisionStore::new();
        let d = decision(alice(), "Move?");
        store.save_decision(&d).await.unwrap();
        let o = option(*d.id(), "Stay");
        let c = criterion(*d.id(), "Cost", 4);
        store.save_option(&o).await.unwrap();
        store.save_criterion(&c).await.unwrap();
        store.upsert_evaluation(evaluation(&o, &c, "cheap")).await.unwrap();

        assert!(store.delete_decision(d.id(), &alice()).await.unwrap());

        assert!(store.list_options(d.id()).await.unwrap().is_empty());
        assert!(store.list_criteria(d.id()).await.unwrap().is_empty());
        assert!(store.list_evaluations(d.id()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_by_non_owner_is_a_no_op() {
        let store = InMemoryDecisionStore::new();
        let d = decision(alice(), "Mine");
        store.save_decision(&d).await.unwrap();

        assert!(!store.delete_decision(d.id(), &bob()).await.unwrap());
        assert!(store.find_decision(d.id(), &alice()).await.unwrap().is_some());
    }

    // ─── Children ────────────────────────────────────────────────────

    #[tokio::test]
    async fn children_require_an_existing_decision() {
        let store = InMemoryDecisionStore::new();
        let missing = DecisionId::new();

        let err = store.save_option(&option(missing, "A")).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DecisionNotFound);

        let err = store
            .save_criterion(&criterion(missing, "Cost", 3))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn options_keep_insertion_order() {
        let store = InMemoryDecisionStore::new();
        let d = decision(alice(), "Pick");
        store.save_decision(&d).await.unwrap();
        for name in ["A", "B", "C"] {
            store.save_option(&option(*d.id(), name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list_options(d.id())
            .await
            .unwrap()
            .iter()
            .map(|o| o.name().to_string())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn criterion_lookup_by_name_is_case_sensitive() {
        let store = InMemoryDecisionStore::new();
        let d = decision(alice(), "Pick");
        store.save_decision(&d).await.unwrap();
        let mut c = criterion(*d.id(), "Cost", 2);
        store.save_criterion(&c).await.unwrap();

        assert!(store
            .find_criterion_by_name(d.id(), "cost")
            .await
            .unwrap()
            .is_none());

        c.reweight(Weight::try_new(5).unwrap());
        store.save_criterion(&c).await.unwrap();

        let found = store
            .find_criterion_by_name(d.id(), "Cost")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.weight().value(), 5);
        assert_eq!(store.list_criteria(d.id()).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn upsert_evaluation_replaces_same_pair() {
        let store = InMemoryDecisionStore::new();
        let d = decision(alice(), "Pick");
        store.save_decision(&d).await.unwrap();
        let o = option(*d.id(), "A");
        let c = criterion(*d.id(), "Cost", 3);
        store.save_option(&o).await.unwrap();
        store.save_criterion(&c).await.unwrap();

        let first = store.upsert_evaluation(evaluation(&o, &c, "old")).await.unwrap();
        let second = store.upsert_evaluation(evaluation(&o, &c, "new")).await.unwrap();

        assert_eq!(first.id(), second.id());
        assert_eq!(first.created_at(), second.created_at());
        assert_eq!(second.pros()[0].text(), "new");

        let stored = store.list_evaluations(d.id()).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].pros()[0].text(), "new");
    }
}
