//! Fixtures shared by the decision handler tests.

use async_trait::async_trait;

use crate::adapters::memory::InMemoryDecisionStore;
use crate::domain::decision::{Criterion, Decision, DecisionOption, Evaluation};
use crate::domain::foundation::{
    CriterionId, DecisionId, DomainError, OptionId, UserId, Weight,
};
use crate::ports::DecisionStore;

pub fn alice() -> UserId {
    UserId::new("alice").unwrap()
}

pub fn bob() -> UserId {
    UserId::new("bob").unwrap()
}

pub async fn seed_decision(store: &InMemoryDecisionStore, owner: UserId, title: &str) -> Decision {
    let decision = Decision::new(DecisionId::new(), owner, title, None, vec![]).unwrap();
    store.save_decision(&decision).await.unwrap();
    decision
}

pub async fn seed_option(
    store: &InMemoryDecisionStore,
    decision: &Decision,
    name: &str,
) -> DecisionOption {
    let option = DecisionOption::new(OptionId::new(), *decision.id(), name, None).unwrap();
    store.save_option(&option).await.unwrap();
    option
}

pub async fn seed_criterion(
    store: &InMemoryDecisionStore,
    decision: &Decision,
    name: &str,
    weight: i64,
) -> Criterion {
    let criterion = Criterion::new(
        CriterionId::new(),
        *decision.id(),
        name,
        Weight::try_new(weight).unwrap(),
    )
    .unwrap();
    store.save_criterion(&criterion).await.unwrap();
    criterion
}

/// Store whose every call fails.
pub struct FailingStore;

fn failure() -> DomainError {
    DomainError::storage("Simulated storage failure")
}

#[async_trait]
impl DecisionStore for FailingStore {
    async fn save_decision(&self, _decision: &Decision) -> Result<(), DomainError> {
        Err(failure())
    }

    async fn find_decision(
        &self,
        _id: &DecisionId,
        _owner: &UserId,
    ) -> Result<Option<Decision>, DomainError> {
        Err(failure())
    }

    async fn list_decisions(&self, _owner: &UserId) -> Result<Vec<Decision>, DomainError> {
        Err(failure())
    }

    async fn delete_decision(&self, _id: &DecisionId, _owner: &UserId) -> Result<bool, DomainError> {
        Err(failure())
    }

    async fn save_option(&self, _option: &DecisionOption) -> Result<(), DomainError> {
        Err(failure())
    }

    async fn find_option(
        &self,
        _decision_id: &DecisionId,
        _id: &OptionId,
    ) -> Result<Option<DecisionOption>, DomainError> {
        Err(failure())
    }

    async fn list_options(
        &self,
        _decision_id: &DecisionId,
    ) -> Result<Vec<DecisionOption>, DomainError> {
        Err(failure())
    }

    async fn save_criterion(&self, _criterion: &Criterion) -> Result<(), DomainError> {
        Err(failure())
    }

    async fn find_criterion(
        &self,
        _decision_id: &DecisionId,
        _id: &CriterionId,
    ) -> Result<Option<Criterion>, DomainError> {
        Err(failure())
    }

    async fn find_criterion_by_name(
        &self,
        _decision_id: &DecisionId,
        _name: &str,
    ) -> Result<Option<Criterion>, DomainError> {
        Err(failure())
    }

    async fn list_criteria(&self, _decision_id: &DecisionId) -> Result<Vec<Criterion>, DomainError> {
        Err(failure())
    }

    async fn upsert_evaluation(&self, _evaluation: Evaluation) -> Result<Evaluation, DomainError> {
        Err(failure())
    }

    async fn list_evaluations(
        &self,
        _decision_id: &DecisionId,
    ) -> Result<Vec<Evaluation>, DomainError> {
        Err(failure())
    }
}
