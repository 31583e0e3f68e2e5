//! Decision aggregate root.
//!
//! A decision belongs to exactly one user. Options, criteria and
//! evaluations reference it by `DecisionId` and are deleted with it.

use crate::domain::foundation::{DecisionId, Timestamp, UserId, ValidationError};

/// The question being decided, owned by a single user.
///
/// # Invariants
///
/// - `title` is trimmed and non-empty
/// - `description` and every tag are trimmed; blank tags are dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    id: DecisionId,
    owner: UserId,
    title: String,
    description: String,
    tags: Vec<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Decision {
    /// Create a new decision.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if title is blank
    pub fn new(
        id: DecisionId,
        owner: UserId,
        title: &str,
        description: Option<&str>,
        tags: Vec<String>,
    ) -> Result<Self, ValidationError> {
        let title = Self::validate_title(title)?;
        let now = Timestamp::now();
        Ok(Self {
            id,
            owner,
            title,
            description: description.map(str::trim).unwrap_or_default().to_string(),
            tags: normalize_tags(tags),
            created_at: now,
            updated_at: now,
        })
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    /// Checks if the given user owns this decision.
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.owner == user_id
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Rename the decision.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the new title is blank
    pub fn rename(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = Self::validate_title(title)?;
        self.touch();
        Ok(())
    }

    /// Replace the description. An empty string clears it.
    pub fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_string();
        self.touch();
    }

    /// Replace the tag list.
    pub fn set_tags(&mut self, tags: Vec<String>) {
        self.tags = normalize_tags(tags);
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    fn validate_title(title: &str) -> Result<String, ValidationError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("title"));
        }
        Ok(trimmed.to_string())
    }
}

fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}
