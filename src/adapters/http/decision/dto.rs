//! HTTP DTOs for decision endpoints.
//!
//! Records are rendered with a Mongo-style `_id` and camelCase fields,
//! the shape existing clients already read.

use serde::{Deserialize, Serialize};

use crate::application::handlers::decision::{DecisionAnalysis, DecisionDetail};
use crate::domain::analysis::OptionResult;
use crate::domain::decision::{Criterion, Decision, DecisionOption, Evaluation, ProCon};
use crate::domain::foundation::{
    CriterionId, DecisionId, EvaluationId, OptionId, Timestamp, UserId, Weight,
};
use crate::domain::suggestion::MergeStats;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to create a decision.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDecisionRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update; absent fields are left alone.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateDecisionRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddOptionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddCriterionRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub weight: Option<i64>,
}

/// Pros and cons for one option/criterion pair.
///
/// Ids arrive as strings so a malformed id can be reported the same way
/// as an id from another decision.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveEvaluationRequest {
    #[serde(default)]
    pub option_id: String,
    #[serde(default)]
    pub criteria_id: String,
    #[serde(default)]
    pub pros: Vec<ProCon>,
    #[serde(default)]
    pub cons: Vec<ProCon>,
}

// ════════════════════════════════════════════════════════════════════════════
// Record views
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionView {
    #[serde(rename = "_id")]
    pub id: DecisionId,
    pub user: UserId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Decision> for DecisionView {
    fn from(decision: &Decision) -> Self {
        Self {
            id: *decision.id(),
            user: decision.owner().clone(),
            title: decision.title().to_string(),
            description: decision.description().to_string(),
            tags: decision.tags().to_vec(),
            created_at: *decision.created_at(),
            updated_at: *decision.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionView {
    #[serde(rename = "_id")]
    pub id: OptionId,
    pub decision: DecisionId,
    pub name: String,
    pub summary: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&DecisionOption> for OptionView {
    fn from(option: &DecisionOption) -> Self {
        Self {
            id: *option.id(),
            decision: *option.decision_id(),
            name: option.name().to_string(),
            summary: option.summary().to_string(),
            created_at: *option.created_at(),
            updated_at: *option.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionView {
    #[serde(rename = "_id")]
    pub id: CriterionId,
    pub decision: DecisionId,
    pub name: String,
    pub weight: Weight,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Criterion> for CriterionView {
    fn from(criterion: &Criterion) -> Self {
        Self {
            id: *criterion.id(),
            decision: *criterion.decision_id(),
            name: criterion.name().to_string(),
            weight: criterion.weight(),
            created_at: *criterion.created_at(),
            updated_at: *criterion.updated_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationView {
    #[serde(rename = "_id")]
    pub id: EvaluationId,
    pub decision: DecisionId,
    pub option: OptionId,
    pub criteria: CriterionId,
    pub pros: Vec<ProCon>,
    pub cons: Vec<ProCon>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Evaluation> for EvaluationView {
    fn from(evaluation: &Evaluation) -> Self {
        Self {
            id: *evaluation.id(),
            decision: *evaluation.decision_id(),
            option: *evaluation.option_id(),
            criteria: *evaluation.criterion_id(),
            pros: evaluation.pros().to_vec(),
            cons: evaluation.cons().to_vec(),
            created_at: *evaluation.created_at(),
            updated_at: *evaluation.updated_at(),
        }
    }
}

fn views<'a, T: 'a, V: From<&'a T>>(items: &'a [T]) -> Vec<V> {
    items.iter().map(V::from).collect()
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create and update responses.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionCommandResponse {
    pub message: String,
    pub decision: DecisionView,
}

impl DecisionCommandResponse {
    pub fn new(message: impl Into<String>, decision: &Decision) -> Self {
        Self {
            message: message.into(),
            decision: decision.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecisionListResponse {
    pub decisions: Vec<DecisionView>,
}

impl From<Vec<Decision>> for DecisionListResponse {
    fn from(decisions: Vec<Decision>) -> Self {
        Self {
            decisions: views(&decisions),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DecisionDetailResponse {
    pub decision: DecisionView,
    pub options: Vec<OptionView>,
    pub criteria: Vec<CriterionView>,
    pub evaluations: Vec<EvaluationView>,
}

impl From<DecisionDetail> for DecisionDetailResponse {
    fn from(detail: DecisionDetail) -> Self {
        Self {
            decision: (&detail.decision).into(),
            options: views(&detail.options),
            criteria: views(&detail.criteria),
            evaluations: views(&detail.evaluations),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OptionCreatedResponse {
    pub message: String,
    pub option: OptionView,
}

#[derive(Debug, Clone, Serialize)]
pub struct CriterionCreatedResponse {
    pub message: String,
    pub criteria: CriterionView,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationSavedResponse {
    pub message: String,
    pub evaluation: EvaluationView,
}

/// Just enough of the decision to title an analysis.
#[derive(Debug, Clone, Serialize)]
pub struct DecisionHeader {
    #[serde(rename = "_id")]
    pub id: DecisionId,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub decision: DecisionHeader,
    pub criteria: Vec<CriterionView>,
    pub results: Vec<OptionResult>,
    pub recommended: Option<OptionResult>,
}

impl From<DecisionAnalysis> for AnalysisResponse {
    fn from(analysis: DecisionAnalysis) -> Self {
        Self {
            decision: DecisionHeader {
                id: *analysis.decision.id(),
                title: analysis.decision.title().to_string(),
                description: analysis.decision.description().to_string(),
            },
            criteria: views(&analysis.criteria),
            results: analysis.report.results,
            recommended: analysis.report.recommended,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ApplySuggestionResponse {
    pub message: String,
    pub stats: MergeStats,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decision() -> Decision {
        Decision::new(
            DecisionId::new(),
            UserId::new("alice").unwrap(),
            "Pick a laptop",
            Some("work machine"),
            vec!["tech".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn decision_view_uses_underscore_id_and_camel_case() {
        let decision = decision();
        let json = serde_json::to_value(DecisionView::from(&decision)).unwrap();

        assert_eq!(json["_id"], json!(decision.id().to_string()));
        assert_eq!(json["user"], "alice");
        assert_eq!(json["tags"], json!(["tech"]));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("id").is_none());
    }

    #[test]
    fn evaluation_request_reads_camel_case_ids() {
        let req: SaveEvaluationRequest = serde_json::from_value(json!({
            "optionId": "abc",
            "criteriaId": "def",
            "pros": [{"text": "light", "impactScore": 4}]
        }))
        .unwrap();

        assert_eq!(req.option_id, "abc");
        assert_eq!(req.criteria_id, "def");
        assert_eq!(req.pros.len(), 1);
        assert!(req.cons.is_empty());
    }

    #[test]
    fn evaluation_request_rejects_out_of_range_impact() {
        let result = serde_json::from_value::<SaveEvaluationRequest>(json!({
            "optionId": "a",
            "criteriaId": "b",
            "cons": [{"text": "heavy", "impactScore": 6}]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn message_response_serializes_message_only() {
        let json = serde_json::to_value(MessageResponse::new("Decision deleted")).unwrap();
        assert_eq!(json, json!({"message": "Decision deleted"}));
    }
}
