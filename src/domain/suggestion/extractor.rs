//! Pulls a `SuggestionSet` out of free-form generated text.
//!
//! Generated text is untrusted: it may wrap the JSON in markdown fences,
//! surround it with prose, or not contain valid JSON at all.

use thiserror::Error;

use super::SuggestionSet;
use crate::domain::foundation::ValidationError;

/// Maximum accepted response length (100KB).
pub const MAX_RESPONSE_LENGTH: usize = 100_000;

const FENCE: &str = "```";

/// Why extraction failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionFailure {
    #[error("response too long: {actual} bytes exceeds maximum of {max} bytes")]
    TooLong { max: usize, actual: usize },

    #[error("JSON parse error: {0}")]
    Parse(String),

    #[error("invalid content: {0}")]
    Invalid(#[from] ValidationError),
}

/// Extraction failure along with what was received and what was parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("AI response format invalid ({failure})")]
pub struct ExtractionError {
    pub failure: ExtractionFailure,
    /// Sanitized response text.
    pub raw: String,
    /// The substring handed to the JSON parser.
    pub extracted: String,
}

/// Extracts and validates suggestion JSON from generated text.
#[derive(Debug, Clone, Default)]
pub struct SuggestionExtractor;

impl SuggestionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extracts a suggestion from a generated response.
    ///
    /// # Steps
    /// 1. Reject oversized input, drop control characters
    /// 2. Prefer a ```json fence, then any fence, then the outermost braces
    /// 3. Parse into typed candidates (ranges checked on the way in)
    /// 4. Reject blank names
    pub fn extract(&self, response: &str) -> Result<SuggestionSet, ExtractionError> {
        if response.len() > MAX_RESPONSE_LENGTH {
            return Err(ExtractionError {
                failure: ExtractionFailure::TooLong {
                    max: MAX_RESPONSE_LENGTH,
                    actual: response.len(),
                },
                raw: String::new(),
                extracted: String::new(),
            });
        }

        let raw = sanitize(response);
        let extracted = locate_json(&raw).to_string();

        let fail = |failure: ExtractionFailure| ExtractionError {
            failure,
            raw: raw.clone(),
            extracted: extracted.clone(),
        };

        let set: SuggestionSet = serde_json::from_str(&extracted)
            .map_err(|e| fail(ExtractionFailure::Parse(e.to_string())))?;
        set.validate().map_err(|e| fail(e.into()))?;

        Ok(set)
    }
}

fn sanitize(response: &str) -> String {
    response
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t' | '\r'))
        .collect::<String>()
        .trim()
        .to_string()
}

fn locate_json(content: &str) -> &str {
    if let Some(block) = json_fence(content).or_else(|| any_fence(content)) {
        return block.trim();
    }

    match (content.find('{'), content.rfind('}')) {
        (Some(first), Some(last)) if last > first => content[first..=last].trim(),
        _ => content,
    }
}

/// Body of the first fence tagged `json` (case-insensitive).
fn json_fence(content: &str) -> Option<&str> {
    content.match_indices(FENCE).find_map(|(open, _)| {
        let tag_start = open + FENCE.len();
        let tag = content.get(tag_start..tag_start + 4)?;
        if !tag.eq_ignore_ascii_case("json") {
            return None;
        }
        let body_start = tag_start + 4;
        let len = content[body_start..].find(FENCE)?;
        Some(&content[body_start..body_start + len])
    })
}

/// Body of the first fence, minus any language tag line.
fn any_fence(content: &str) -> Option<&str> {
    let body_start = content.find(FENCE)? + FENCE.len();
    let len = content[body_start..].find(FENCE)?;
    let body = content[body_start..body_start + len].trim_start();

    if body.starts_with('{') || body.starts_with('[') {
        return Some(body);
    }
    match body.split_once('\n') {
        Some((tag, rest)) if tag.trim().chars().all(|c| c.is_ascii_alphanumeric()) => Some(rest),
        _ => Some(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{"criteria":[{"name":"Cost","weight":4}],"evaluations":[{"optionName":"A","criteriaName":"Cost","pros":[{"text":"cheap","impactScore":3}],"cons":[]}]}"#;

    fn extract(text: &str) -> Result<SuggestionSet, ExtractionError> {
        SuggestionExtractor::new().extract(text)
    }

    #[test]
    fn extracts_bare_json() {
        let set = extract(PAYLOAD).unwrap();
        assert_eq!(set.criteria[0].name, "Cost");
    }

    #[test]
    fn prefers_json_fence() {
        let text = format!(
            "Here you go:\n```text\nnot this\n```\n```JSON\n{}\n```\nThanks",
            PAYLOAD
        );
        let set = extract(&text).unwrap();
        assert_eq!(set.evaluations.len(), 1);
    }

    #[test]
    fn falls_back_to_untagged_fence() {
        let text = format!("```\n{}\n```", PAYLOAD);
        assert!(extract(&text).is_ok());
    }

    #[test]
    fn untagged_fence_with_other_language_tag_is_stripped() {
        let text = format!("```javascript\n{}\n```", PAYLOAD);
        assert!(extract(&text).is_ok());
    }

    #[test]
    fn falls_back_to_outer_braces_around_prose() {
        let text = format!("Sure! {} Hope that helps.", PAYLOAD);
        assert!(extract(&text).is_ok());
    }

    #[test]
    fn handles_multibyte_prose() {
        let text = format!("Voilà, résumé: {} ✓", PAYLOAD);
        assert!(extract(&text).is_ok());
    }

    #[test]
    fn strips_control_characters() {
        let text = format!("\u{0007}{}\u{0000}", PAYLOAD);
        assert!(extract(&text).is_ok());
    }

    #[test]
    fn parse_failure_carries_raw_and_extracted() {
        let err = extract("  I think {option A, clearly} wins  ").unwrap_err();

        assert!(matches!(err.failure, ExtractionFailure::Parse(_)));
        assert_eq!(err.raw, "I think {option A, clearly} wins");
        assert_eq!(err.extracted, "{option A, clearly}");
    }

    #[test]
    fn text_without_braces_is_passed_whole() {
        let err = extract("no json here").unwrap_err();
        assert_eq!(err.extracted, "no json here");
    }

    #[test]
    fn out_of_range_impact_is_a_parse_failure() {
        let text = r#"{"criteria":[{"name":"Cost"}],"evaluations":[{"optionName":"A","criteriaName":"Cost","pros":[{"text":"x","impactScore":9}]}]}"#;
        let err = extract(text).unwrap_err();
        assert!(matches!(err.failure, ExtractionFailure::Parse(_)));
    }

    #[test]
    fn blank_names_fail_validation() {
        let text = r#"{"criteria":[{"name":""}],"evaluations":[]}"#;
        let err = extract(text).unwrap_err();
        assert!(matches!(err.failure, ExtractionFailure::Invalid(_)));
    }

    #[test]
    fn oversized_response_is_rejected() {
        let text = "x".repeat(MAX_RESPONSE_LENGTH + 1);
        let err = extract(&text).unwrap_err();
        assert!(matches!(err.failure, ExtractionFailure::TooLong { .. }));
    }
}
