use utoipa::OpenApi;

use crate::presentation::http::app_error::ErrorBody;
use crate::presentation::http::handlers::health::HealthzResponse;
use crate::presentation::http::handlers::posts::{CreatePostDto, MessageDto, PostDto};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::handlers::health::health_handler,
        crate::presentation::http::handlers::posts::list_posts,
        crate::presentation::http::handlers::posts::create_post,
        crate::presentation::http::handlers::posts::delete_post
    ),
    components(
        schemas(
            CreatePostDto,
            PostDto,
            MessageDto,
            ErrorBody,
            HealthzResponse
        )
    ),
    tags(
        (name = "posts", description = "Post endpoints"),
        (name = "health", description = "Liveness probe")
    )
)]
pub(crate) struct ApiDoc;

#[cfg(test)]
mod tests {
    use utoipa::OpenApi;

    use super::ApiDoc;

    #[test]
    fn document_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        assert!(paths.contains_key("/posts"));
        assert!(paths.contains_key("/posts/{id}"));
        assert!(paths.contains_key("/healthz"));
    }
}
