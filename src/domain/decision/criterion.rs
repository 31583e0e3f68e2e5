//! Weighted evaluation criteria.

use crate::domain::foundation::{CriterionId, DecisionId, Timestamp, ValidationError, Weight};

/// A dimension the options are judged on, with its relative importance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Criterion {
    id: CriterionId,
    decision_id: DecisionId,
    name: String,
    weight: Weight,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Criterion {
    /// Create a new criterion.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    pub fn new(
        id: CriterionId,
        decision_id: DecisionId,
        name: &str,
        weight: Weight,
    ) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        let now = Timestamp::now();
        Ok(Self {
            id,
            decision_id,
            name: name.to_string(),
            weight,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &CriterionId {
        &self.id
    }

    pub fn decision_id(&self) -> &DecisionId {
        &self.decision_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Change the criterion's weight.
    pub fn reweight(&mut self, weight: Weight) {
        self.weight = weight;
        self.updated_at = Timestamp::now();
    }
}
