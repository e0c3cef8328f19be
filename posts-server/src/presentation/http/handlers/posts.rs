use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use utoipa::ToSchema;

use crate::domain::error::DomainError;
use crate::domain::post::{CreatePostRequest, Post};
use crate::presentation::AppState;
use crate::presentation::http::app_error::{AppResult, ErrorBody};

pub(crate) const DELETED_MESSAGE: &str = "Post deleted successfully";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreatePostDto {
    pub(crate) title: Option<String>,
    pub(crate) content: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct PostDto {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) content: String,
    pub(crate) created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct MessageDto {
    pub(crate) message: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
        }
    }
}

impl From<CreatePostDto> for CreatePostRequest {
    fn from(dto: CreatePostDto) -> Self {
        Self {
            title: dto.title,
            content: dto.content,
        }
    }
}

#[utoipa::path(
    get,
    path = "/posts",
    tag = "posts",
    responses(
        (status = 200, description = "All posts, newest first", body = [PostDto]),
        (status = 500, description = "Database error", body = ErrorBody)
    )
)]
pub(crate) async fn list_posts(State(state): State<AppState>) -> AppResult<Json<Vec<PostDto>>> {
    let posts = state.post_service.list_posts().await?;
    debug!(count = posts.len(), "listed posts");

    Ok(Json(posts.into_iter().map(PostDto::from).collect()))
}

#[utoipa::path(
    post,
    path = "/posts",
    tag = "posts",
    request_body = CreatePostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Title or content missing", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody)
    )
)]
pub(crate) async fn create_post(
    State(state): State<AppState>,
    payload: Result<Json<CreatePostDto>, JsonRejection>,
) -> AppResult<(StatusCode, Json<PostDto>)> {
    let Json(dto) = payload?;

    let post = state.post_service.create_post(dto.into()).await?;
    info!(post_id = post.id, "post created");

    Ok((StatusCode::CREATED, Json(PostDto::from(post))))
}

#[utoipa::path(
    delete,
    path = "/posts/{id}",
    tag = "posts",
    params(
        ("id" = i64, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Post deleted", body = MessageDto),
        (status = 404, description = "Post not found", body = ErrorBody),
        (status = 500, description = "Database error", body = ErrorBody)
    )
)]
pub(crate) async fn delete_post(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<MessageDto>> {
    // A non-numeric id cannot name any row.
    let Ok(Path(id)) = id else {
        return Err(DomainError::NotFound("Post").into());
    };

    state.post_service.delete_post(id).await?;
    info!(post_id = id, "post deleted");

    Ok(Json(MessageDto {
        message: DELETED_MESSAGE.to_string(),
    }))
}
