use std::sync::Arc;

use anyhow::{Context, Result};

mod application;
mod data;
mod domain;
mod infrastructure;
mod presentation;
mod server;

use application::post_service::PostService;
use data::repositories::postgres::post_repository::PostgresPostRepository;
use infrastructure::database::create_pool;
use infrastructure::logging::init_logging;
use infrastructure::settings::Settings;
use presentation::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let settings = Settings::from_env().context("invalid configuration")?;

    init_logging(&settings.log_level)?;

    let pool = create_pool(&settings.database);
    let repo = Arc::new(PostgresPostRepository::new(pool));
    let state = AppState::new(Arc::new(PostService::new(repo)));

    server::run_http(&settings, state).await
}
