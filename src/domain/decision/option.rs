//! Candidate options for a decision.

use crate::domain::foundation::{DecisionId, OptionId, Timestamp, ValidationError};

/// One of the alternatives being compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionOption {
    id: OptionId,
    decision_id: DecisionId,
    name: String,
    summary: String,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl DecisionOption {
    /// Create a new option.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is blank
    pub fn new(
        id: OptionId,
        decision_id: DecisionId,
        name: &str,
        summary: Option<&str>,
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
            summary: summary.map(str::trim).unwrap_or_default().to_string(),
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    pub fn decision_id(&self) -> &DecisionId {
        &self.decision_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_trims_name_and_summary() {
        let o = DecisionOption::new(OptionId::new(), DecisionId::new(), " Rust ", Some(" fast "))
            .unwrap();
        assert_eq!(o.name(), "Rust");
        assert_eq!(o.summary(), "fast");
    }

    #[test]
    fn option_requires_name() {
        let err = DecisionOption::new(OptionId::new(), DecisionId::new(), "", None).unwrap_err();
        assert_eq!(err.field(), "name");
    }
}
