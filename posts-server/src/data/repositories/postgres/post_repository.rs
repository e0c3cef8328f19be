use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::data::post_repository::{NewPost, PostRepository};
use crate::domain::error::DomainError;
use crate::domain::post::Post;

#[derive(Debug, Clone)]
pub(crate) struct PostgresPostRepository {
    pool: PgPool,
}

impl PostgresPostRepository {
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn list_posts(&self) -> Result<Vec<Post>, DomainError> {
        // Casts keep decoding stable for tables created with SERIAL / TIMESTAMP columns.
        let rows = sqlx::query_as::<_, PostRow>(
            r#"
            SELECT
                id::BIGINT AS id,
                title,
                content,
                created_at::TIMESTAMPTZ AS created_at
            FROM posts
            ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| map_post_db_error("list posts", err))?;

        Ok(rows.into_iter().map(Post::from).collect())
    }

    async fn create_post(&self, input: NewPost) -> Result<Post, DomainError> {
        let row = sqlx::query_as::<_, PostRow>(
            r#"
            INSERT INTO posts (title, content, created_at)
            VALUES ($1, $2, $3)
            RETURNING id::BIGINT AS id, title, content, created_at::TIMESTAMPTZ AS created_at
            "#,
        )
        .bind(input.title)
        .bind(input.content)
        .bind(input.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| map_post_db_error("insert post", err))?;

        Ok(Post::from(row))
    }

    async fn delete_post(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            DELETE FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|err| map_post_db_error("delete post", err))?;

        Ok(result.rows_affected() > 0)
    }
}

impl From<PostRow> for Post {
    fn from(row: PostRow) -> Self {
        Post {
            id: row.id,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
        }
    }
}

fn map_post_db_error(operation: &str, err: sqlx::Error) -> DomainError {
    DomainError::Unexpected(format!("failed to {operation}: {err}"))
}
