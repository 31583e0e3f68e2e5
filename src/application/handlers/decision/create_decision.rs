//! CreateDecisionHandler - Command handler for starting a new decision.

use std::sync::Arc;
use tracing::info;

use super::DecisionError;
use crate::domain::decision::Decision;
use crate::domain::foundation::{DecisionId, UserId};
use crate::ports::DecisionStore;

/// Command to create a decision.
#[derive(Debug, Clone)]
pub struct CreateDecisionCommand {
    pub user_id: UserId,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

/// Handler for creating decisions.
pub struct CreateDecisionHandler {
    store: Arc<dyn DecisionStore>,
}

impl CreateDecisionHandler {
    pub fn new(store: Arc<dyn DecisionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CreateDecisionCommand) -> Result<Decision, DecisionError> {
        if cmd.title.trim().is_empty() {
            return Err(DecisionError::validation("title", "Title is required"));
        }

        let decision = Decision::new(
            DecisionId::new(),
            cmd.user_id,
            &cmd.title,
            cmd.description.as_deref(),
            cmd.tags,
        )?;

        self.store.save_decision(&decision).await?;

        info!(decision_id = %decision.id(), "Decision created");
        Ok(decision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::decision::test_support::{alice, FailingStore};
    use crate::adapters::memory::InMemoryDecisionStore;

    fn command(title: &str) -> CreateDecisionCommand {
        CreateDecisionCommand {
            user_id: alice(),
            title: title.to_string(),
            description: Some("  Two offers on the table ".to_string()),
            tags: vec!["career".to_string(), " ".to_string()],
        }
    }

    #[tokio::test]
    async fn creates_and_stores_decision() {
        let store = Arc::new(InMemoryDecisionStore::new());
        let handler = CreateDecisionHandler::new(store.clone());

        let decision = handler.handle(command(" Which job? ")).await.unwrap();

        assert_eq!(decision.title(), "Which job?");
        assert_eq!(decision.description(), "Two offers on the table");
        assert_eq!(decision.tags(), ["career".to_string()]);
        assert!(store
            .find_decision(decision.id(), &alice())
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn rejects_blank_title() {
        let store = Arc::new(InMemoryDecisionStore::new());
        let handler = CreateDecisionHandler::new(store.clone());

        let err = handler.handle(command("   ")).await.unwrap_err();

        assert_eq!(
            err,
            DecisionError::validation("title", "Title is required")
        );
        assert_eq!(store.decision_count().await, 0);
    }

    #[tokio::test]
    async fn surfaces_storage_failures() {
        let handler = CreateDecisionHandler::new(Arc::new(FailingStore));

        let err = handler.handle(command("Which job?")).await.unwrap_err();

        assert!(matches!(err, DecisionError::Infrastructure(_)));
    }
}
