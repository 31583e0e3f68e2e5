//! SuggestDecisionDataHandler - Asks the AI provider for criteria and
//! pros/cons for a decision that may not be stored yet.
//!
//! The result is only a proposal; nothing is persisted until the client
//! applies it to a decision.

use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

use super::SuggestionError;
use crate::domain::foundation::UserId;
use crate::domain::suggestion::{SuggestionExtractor, SuggestionSet};
use crate::ports::{AIProvider, CompletionRequest, MessageRole, RequestMetadata};

/// What the user has typed so far.
#[derive(Debug, Clone)]
pub struct SuggestDecisionDataQuery {
    pub user_id: UserId,
    pub decision_title: String,
    pub description: Option<String>,
    pub options: Vec<String>,
}

/// Handler for generating suggestions.
pub struct SuggestDecisionDataHandler {
    provider: Option<Arc<dyn AIProvider>>,
    extractor: SuggestionExtractor,
    temperature: f32,
}

impl SuggestDecisionDataHandler {
    /// `provider` is `None` when no API key is configured; every request
    /// then fails with `ProviderNotConfigured`.
    pub fn new(provider: Option<Arc<dyn AIProvider>>, temperature: f32) -> Self {
        Self {
            provider,
            extractor: SuggestionExtractor::new(),
            temperature,
        }
    }

    pub async fn handle(
        &self,
        query: SuggestDecisionDataQuery,
    ) -> Result<SuggestionSet, SuggestionError> {
        let options: Vec<&str> = query
            .options
            .iter()
            .map(|o| o.trim())
            .filter(|o| !o.is_empty())
            .collect();

        if query.decision_title.trim().is_empty() || options.is_empty() {
            return Err(SuggestionError::InvalidRequest(
                "decisionTitle and at least one option are required".to_string(),
            ));
        }

        let provider = self
            .provider
            .as_ref()
            .ok_or(SuggestionError::ProviderNotConfigured)?;

        let prompt = build_prompt(
            query.decision_title.trim(),
            query.description.as_deref(),
            &options,
        );
        let trace_id = Uuid::new_v4().to_string();
        let request = CompletionRequest::new(RequestMetadata::new(query.user_id, &trace_id))
            .with_message(MessageRole::User, prompt)
            .with_temperature(self.temperature);

        let response = provider.complete(request).await?;
        debug!(
            trace_id = %trace_id,
            model = %response.model,
            chars = response.content.len(),
            "Suggestion generated"
        );

        self.extractor.extract(&response.content).map_err(|err| {
            warn!(trace_id = %trace_id, error = %err, "Unusable suggestion response");
            SuggestionError::Extraction(err)
        })
    }
}

/// Builds the instruction sent to the model.
pub fn build_prompt(title: &str, description: Option<&str>, options: &[&str]) -> String {
    let description = description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or("none");

    format!(
        r#"User wants help making a decision:
Decision Name: "{title}"
Description: "{description}"
Options: {options}

Generate:
1. 4-6 meaningful evaluation criteria with weight (1-5).
2. Pros & Cons with impact score (1-5) for each option per criteria.

Return STRICTLY in this JSON format (no explanation, no markdown):

{{
  "criteria": [
    {{ "name": "string", "weight": number }}
  ],
  "evaluations": [
    {{
      "optionName": "string",
      "criteriaName": "string",
      "pros": [{{ "text": "string", "impactScore": number }}],
      "cons": [{{ "text": "string", "impactScore": number }}]
    }}
  ]
}}
"#,
        options = options.join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::suggestion::ExtractionFailure;
    use crate::ports::AIError;

    const SUGGESTION: &str = r#"Here you go:
```json
{
  "criteria": [{"name": "Cost", "weight": 4}],
  "evaluations": [
    {"optionName": "Rent", "criteriaName": "Cost",
     "pros": [{"text": "no deposit", "impactScore": 3}], "cons": []}
  ]
}
```"#;

    fn query(title: &str, options: &[&str]) -> SuggestDecisionDataQuery {
        SuggestDecisionDataQuery {
            user_id: UserId::new("alice").unwrap(),
            decision_title: title.to_string(),
            description: None,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }

    fn handler(provider: &MockAIProvider) -> SuggestDecisionDataHandler {
        SuggestDecisionDataHandler::new(Some(Arc::new(provider.clone())), 0.6)
    }

    #[tokio::test]
    async fn extracts_suggestion_from_response() {
        let provider = MockAIProvider::new().with_response(SUGGESTION);

        let set = handler(&provider)
            .handle(query("Rent or buy?", &["Rent", "Buy"]))
            .await
            .unwrap();

        assert_eq!(set.criteria[0].name, "Cost");
        assert_eq!(set.evaluations[0].option_name, "Rent");
    }

    #[tokio::test]
    async fn sends_prompt_with_configured_temperature() {
        let provider = MockAIProvider::new().with_response(SUGGESTION);

        handler(&provider)
            .handle(query("Rent or buy?", &["Rent", " ", "Buy"]))
            .await
            .unwrap();

        let calls = provider.get_calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].temperature, Some(0.6));
        let prompt = &calls[0].messages[0].content;
        assert!(prompt.contains(r#"Decision Name: "Rent or buy?""#));
        assert!(prompt.contains(r#"Description: "none""#));
        assert!(prompt.contains("Options: Rent, Buy\n"));
    }

    #[tokio::test]
    async fn rejects_missing_title_or_options_without_calling_provider() {
        let provider = MockAIProvider::new();

        for q in [query(" ", &["A"]), query("Title", &[]), query("Title", &[""])] {
            let err = handler(&provider).handle(q).await.unwrap_err();
            assert_eq!(
                err.to_string(),
                "decisionTitle and at least one option are required"
            );
        }
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn fails_without_provider() {
        let handler = SuggestDecisionDataHandler::new(None, 0.6);

        let err = handler.handle(query("Title", &["A"])).await.unwrap_err();

        assert!(matches!(err, SuggestionError::ProviderNotConfigured));
    }

    #[tokio::test]
    async fn unparseable_response_carries_raw_text() {
        let provider = MockAIProvider::new().with_response("Sorry, I can't help with that.");

        let err = handler(&provider)
            .handle(query("Title", &["A"]))
            .await
            .unwrap_err();

        match err {
            SuggestionError::Extraction(extraction) => {
                assert!(matches!(extraction.failure, ExtractionFailure::Parse(_)));
                assert_eq!(extraction.raw, "Sorry, I can't help with that.");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn provider_failure_is_reported() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);

        let err = handler(&provider)
            .handle(query("Title", &["A"]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SuggestionError::Provider(AIError::AuthenticationFailed)
        ));
    }

    #[test]
    fn prompt_uses_description_when_present() {
        let prompt = build_prompt("Move?", Some(" for work "), &["Stay", "Go"]);
        assert!(prompt.contains(r#"Description: "for work""#));
        assert!(prompt.contains(r#""impactScore": number"#));
    }
}
