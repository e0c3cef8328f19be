use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::DomainError;

pub(crate) const REQUIRED_FIELDS_MESSAGE: &str = "Title and content are required";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Post {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
}

/// Input of the create operation. Fields stay optional until [`CreatePostRequest::validate`]
/// proves both are present and non-empty; accepted text is kept exactly as sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct CreatePostRequest {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ValidPost {
    pub(crate) title: String,
    pub(crate) content: String,
}

impl CreatePostRequest {
    pub(crate) fn validate(self) -> Result<ValidPost, DomainError> {
        Ok(ValidPost {
            title: require_text("title", self.title)?,
            content: require_text("content", self.content)?,
        })
    }
}

fn require_text(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
    match value {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(DomainError::Validation {
            field,
            message: REQUIRED_FIELDS_MESSAGE,
        }),
    }
}
