//! Decision store port.
//!
//! Owner-scoped persistence for decisions and the records hanging off
//! them. Child collections are returned in insertion order, which is the
//! order the analyzer ranks ties by.

use async_trait::async_trait;

use crate::domain::decision::{Criterion, Decision, DecisionOption, Evaluation};
use crate::domain::foundation::{CriterionId, DecisionId, DomainError, OptionId, UserId};

/// Persistence port for decisions, options, criteria and evaluations.
///
/// Implementations must ensure:
/// - A decision is only visible to its owner
/// - Deleting a decision removes its options, criteria and evaluations
/// - At most one evaluation exists per `(decision, option, criterion)`
#[async_trait]
pub trait DecisionStore: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Decisions
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a decision, or replace it if the id already exists.
    async fn save_decision(&self, decision: &Decision) -> Result<(), DomainError>;

    /// Find a decision owned by `owner`.
    ///
    /// Returns `None` if missing or owned by someone else.
    async fn find_decision(
        &self,
        id: &DecisionId,
        owner: &UserId,
    ) -> Result<Option<Decision>, DomainError>;

    /// All decisions owned by `owner`, newest first.
    async fn list_decisions(&self, owner: &UserId) -> Result<Vec<Decision>, DomainError>;

    /// Delete a decision and everything attached to it.
    ///
    /// Returns `false` if there was nothing owned by `owner` to delete.
    async fn delete_decision(&self, id: &DecisionId, owner: &UserId) -> Result<bool, DomainError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Options
    // ─────────────────────────────────────────────────────────────────────────

    /// Append an option to its decision.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if the decision does not exist
    async fn save_option(&self, option: &DecisionOption) -> Result<(), DomainError>;

    async fn find_option(
        &self,
        decision_id: &DecisionId,
        id: &OptionId,
    ) -> Result<Option<DecisionOption>, DomainError>;

    async fn list_options(&self, decision_id: &DecisionId)
        -> Result<Vec<DecisionOption>, DomainError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Criteria
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert a criterion, or replace the one with the same id.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if the decision does not exist
    async fn save_criterion(&self, criterion: &Criterion) -> Result<(), DomainError>;

    async fn find_criterion(
        &self,
        decision_id: &DecisionId,
        id: &CriterionId,
    ) -> Result<Option<Criterion>, DomainError>;

    /// Find the first criterion with exactly this name.
    async fn find_criterion_by_name(
        &self,
        decision_id: &DecisionId,
        name: &str,
    ) -> Result<Option<Criterion>, DomainError>;

    async fn list_criteria(&self, decision_id: &DecisionId) -> Result<Vec<Criterion>, DomainError>;

    // ─────────────────────────────────────────────────────────────────────────
    // Evaluations
    // ─────────────────────────────────────────────────────────────────────────

    /// Insert an evaluation, or replace the pros/cons of the existing one
    /// for the same option/criterion pair.
    ///
    /// Returns the stored evaluation; on replace it keeps the original id
    /// and `created_at`.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if the decision does not exist
    async fn upsert_evaluation(&self, evaluation: Evaluation) -> Result<Evaluation, DomainError>;

    async fn list_evaluations(&self, decision_id: &DecisionId)
        -> Result<Vec<Evaluation>, DomainError>;
}
