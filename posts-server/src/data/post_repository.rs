use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct NewPost {
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
}

/// Storage for posts. Every method maps to exactly one statement.
#[async_trait]
pub(crate) trait PostRepository: Send + Sync {
    /// All posts, newest id first.
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError>;
    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError>;
    /// Returns `false` when no row matched `id`.
    async fn delete_post(&self, id: i64) -> Result<bool, DomainError>;
}
