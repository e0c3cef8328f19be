use std::sync::Arc;

use chrono::Utc;

use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post};

pub(crate) struct PostService {
    repo: Arc<dyn PostRepository>,
}

impl PostService {
    pub(crate) fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    pub(crate) async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        self.repo.list_posts().await
    }

    /// Validation runs before the repository is touched; the creation time is taken here,
    /// not by the database.
    pub(crate) async fn create_post(&self, req: CreatePostRequest) -> Result<Post, DomainError> {
        let valid = req.validate()?;

        let new_post = NewPost {
            title: valid.title,
            content: valid.content,
            created_at: Utc::now(),
        };
        self.repo.create_post(new_post).await
    }

    pub(crate) async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self.repo.delete_post(id).await?;
        if !deleted {
            return Err(DomainError::NotFound("Post"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::Utc;

    use super::PostService;
    use crate::data::repositories::memory::post_repository::InMemoryPostRepository;
    use crate::domain::error::DomainError;
    use crate::domain::post::CreatePostRequest;

    fn service() -> (PostService, InMemoryPostRepository) {
        let repo = InMemoryPostRepository::new();
        (PostService::new(Arc::new(repo.clone())), repo)
    }

    fn request(title: &str, content: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: Some(title.to_string()),
            content: Some(content.to_string()),
        }
    }

    #[tokio::test]
    async fn create_post_stamps_time_and_stores_text_as_sent() {
        let (service, repo) = service();
        let started = Utc::now();

        let created = service
            .create_post(request("  Hello ", " World\n"))
            .await
            .expect("create_post must succeed");

        assert_eq!(created.id, 1);
        assert_eq!(created.title, "  Hello ");
        assert_eq!(created.content, " World\n");
        assert!(created.created_at >= started);
        assert_eq!(repo.stored(), vec![created]);
    }

    #[tokio::test]
    async fn create_post_issues_increasing_ids() {
        let (service, _repo) = service();

        let first = service.create_post(request("a", "b")).await.expect("create");
        let second = service.create_post(request("c", "d")).await.expect("create");

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_repository() {
        let (service, repo) = service();

        let err = service
            .create_post(CreatePostRequest {
                title: Some("title".to_string()),
                content: None,
            })
            .await
            .expect_err("missing content must fail");

        assert!(matches!(err, DomainError::Validation { field: "content", .. }));
        assert_eq!(repo.statements(), 0);
    }

    #[tokio::test]
    async fn list_posts_returns_newest_first() {
        let (service, _repo) = service();
        let a = service.create_post(request("A", "a")).await.expect("create");
        let b = service.create_post(request("B", "b")).await.expect("create");

        let listed = service.list_posts().await.expect("list");

        assert_eq!(listed, vec![b, a]);
    }

    #[tokio::test]
    async fn delete_post_twice_reports_not_found() {
        let (service, _repo) = service();
        let post = service.create_post(request("A", "a")).await.expect("create");

        service.delete_post(post.id).await.expect("first delete");
        let err = service
            .delete_post(post.id)
            .await
            .expect_err("second delete must fail");

        assert!(matches!(err, DomainError::NotFound("Post")));
        assert!(service.list_posts().await.expect("list").is_empty());
    }

    #[tokio::test]
    async fn repository_errors_propagate() {
        let (service, repo) = service();
        repo.fail_with("connection refused");

        let err = service.list_posts().await.expect_err("must fail");
        assert!(matches!(err, DomainError::Unexpected(_)));
    }
}
