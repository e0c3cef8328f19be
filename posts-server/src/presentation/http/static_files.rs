use std::path::Path;

use axum::Router;
use tower_http::services::ServeDir;
use tracing::{info, warn};

/// Serves the client bundle for every path no API route claims.
pub(crate) fn with_static_assets(router: Router, dir: &Path) -> Router {
    if !dir.is_dir() {
        warn!(path = %dir.display(), "static asset directory not found, serving API only");
        return router;
    }

    info!(path = %dir.display(), "serving static assets");
    router.fallback_service(ServeDir::new(dir))
}
