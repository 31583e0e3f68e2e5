//! Pros and cons recorded for one option against one criterion.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{
    CriterionId, DecisionId, EvaluationId, ImpactScore, OptionId, Timestamp, ValidationError,
};

/// A single argument for or against an option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ProConRecord")]
pub struct ProCon {
    text: String,
    impact_score: ImpactScore,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProConRecord {
    text: String,
    impact_score: ImpactScore,
}

impl TryFrom<ProConRecord> for ProCon {
    type Error = ValidationError;

    fn try_from(record: ProConRecord) -> Result<Self, Self::Error> {
        ProCon::new(&record.text, record.impact_score)
    }
}

impl ProCon {
    /// # Errors
    ///
    /// - `EmptyField` if text is blank
    pub fn new(text: &str, impact_score: ImpactScore) -> Result<Self, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::empty_field("text"));
        }
        Ok(Self {
            text: text.to_string(),
            impact_score,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn impact_score(&self) -> ImpactScore {
        self.impact_score
    }
}

/// Sum of impact scores; zero for an empty list.
pub fn total_impact(items: &[ProCon]) -> u32 {
    items
        .iter()
        .map(|item| u32::from(item.impact_score.value()))
        .sum()
}

/// Assessment of one option against one criterion.
///
/// `(option_id, criterion_id)` is the natural key within a decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    id: EvaluationId,
    decision_id: DecisionId,
    option_id: OptionId,
    criterion_id: CriterionId,
    pros: Vec<ProCon>,
    cons: Vec<ProCon>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Evaluation {
    pub fn new(
        id: EvaluationId,
        decision_id: DecisionId,
        option_id: OptionId,
        criterion_id: CriterionId,
        pros: Vec<ProCon>,
        cons: Vec<ProCon>,
    ) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            decision_id,
            option_id,
            criterion_id,
            pros,
            cons,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &EvaluationId {
        &self.id
    }

    pub fn decision_id(&self) -> &DecisionId {
        &self.decision_id
    }

    pub fn option_id(&self) -> &OptionId {
        &self.option_id
    }

    pub fn criterion_id(&self) -> &CriterionId {
        &self.criterion_id
    }

    pub fn pros(&self) -> &[ProCon] {
        &self.pros
    }

    pub fn cons(&self) -> &[ProCon] {
        &self.cons
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// True when both evaluations describe the same option/criterion pair.
    pub fn same_pair(&self, other: &Evaluation) -> bool {
        self.option_id == other.option_id && self.criterion_id == other.criterion_id
    }

    /// Replace pros and cons, keeping identity and creation time.
    pub fn replace_arguments(&mut self, pros: Vec<ProCon>, cons: Vec<ProCon>) {
        self.pros = pros;
        self.cons = cons;
        self.updated_at = Timestamp::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impact(v: i64) -> ImpactScore {
        ImpactScore::try_new(v).unwrap()
    }

    #[test]
    fn pro_con_rejects_blank_text() {
        assert!(ProCon::new("  ", impact(2)).is_err());
    }

    #[test]
    fn pro_con_deserializes_camel_case() {
        let p: ProCon = serde_json::from_str(r#"{"text":"cheap","impactScore":4}"#).unwrap();
        assert_eq!(p.text(), "cheap");
        assert_eq!(p.impact_score().value(), 4);
    }

    #[test]
    fn pro_con_deserialization_validates() {
        assert!(serde_json::from_str::<ProCon>(r#"{"text":"","impactScore":4}"#).is_err());
        assert!(serde_json::from_str::<ProCon>(r#"{"text":"ok","impactScore":7}"#).is_err());
    }

    #[test]
    fn pro_con_serializes_camel_case() {
        let json = serde_json::to_value(ProCon::new("fast", impact(3)).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!({"text": "fast", "impactScore": 3}));
    }

    #[test]
    fn total_impact_of_empty_list_is_zero() {
        assert_eq!(total_impact(&[]), 0);
    }

    #[test]
    fn total_impact_sums_scores() {
        let items = vec![
            ProCon::new("a", impact(2)).unwrap(),
            ProCon::new("b", impact(5)).unwrap(),
        ];
        assert_eq!(total_impact(&items), 7);
    }

    #[test]
    fn replace_arguments_keeps_identity() {
        let mut e = Evaluation::new(
            EvaluationId::new(),
            DecisionId::new(),
            OptionId::new(),
            CriterionId::new(),
            vec![],
            vec![],
        );
        let id = *e.id();
        let created = *e.created_at();

        e.replace_arguments(vec![ProCon::new("x", impact(1)).unwrap()], vec![]);

        assert_eq!(e.id(), &id);
        assert_eq!(e.created_at(), &created);
        assert_eq!(e.pros().len(), 1);
    }
}
