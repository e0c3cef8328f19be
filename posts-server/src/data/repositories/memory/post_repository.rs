use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Default)]
struct State {
    last_id: i64,
    posts: Vec<Post>,
    fail_with: Option<String>,
    statements: usize,
}

/// In-process stand-in for the Postgres repository. Ids are issued like a sequence:
/// strictly increasing and never reused.
#[derive(Clone, Default)]
pub(crate) struct InMemoryPostRepository {
    state: Arc<Mutex<State>>,
}

impl InMemoryPostRepository {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Makes every following call fail as a database error would.
    pub(crate) fn fail_with(&self, message: &str) {
        self.lock().fail_with = Some(message.to_string());
    }

    /// Number of statements issued so far, failed ones included.
    pub(crate) fn statements(&self) -> usize {
        self.lock().statements
    }

    pub(crate) fn stored(&self) -> Vec<Post> {
        self.lock().posts.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("memory repo mutex poisoned")
    }

    fn begin(&self) -> Result<std::sync::MutexGuard<'_, State>, DomainError> {
        let mut state = self.lock();
        state.statements += 1;
        if let Some(message) = state.fail_with.clone() {
            return Err(DomainError::Unexpected(message));
        }
        Ok(state)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        let state = self.begin()?;
        let mut posts = state.posts.clone();
        posts.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(posts)
    }

    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let mut state = self.begin()?;
        state.last_id += 1;
        let post = Post {
            id: state.last_id,
            title: input.title,
            content: input.content,
            created_at: input.created_at,
        };
        state.posts.push(post.clone());
        Ok(post)
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let mut state = self.begin()?;
        let before = state.posts.len();
        state.posts.retain(|post| post.id != id);
        Ok(state.posts.len() < before)
    }
}
