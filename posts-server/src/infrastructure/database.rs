use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use tracing::info;

use super::settings::{DatabaseSettings, DbTlsMode};

/// Builds the shared pool. Connections are opened on first use, so an unreachable
/// database does not prevent startup.
pub(crate) fn create_pool(settings: &DatabaseSettings) -> PgPool {
    info!(
        host = %settings.host,
        port = settings.port,
        database = %settings.database,
        tls = ?settings.tls,
        max_connections = settings.max_connections,
        "configuring database pool"
    );

    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect_lazy_with(connect_options(settings))
}

pub(crate) fn connect_options(settings: &DatabaseSettings) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .database(&settings.database)
        .username(&settings.user)
        .password(&settings.password)
        .ssl_mode(ssl_mode(settings.tls))
}

fn ssl_mode(tls: DbTlsMode) -> PgSslMode {
    match tls {
        DbTlsMode::Disable => PgSslMode::Disable,
        // `Require` encrypts without validating the certificate chain.
        DbTlsMode::RequireUnverified => PgSslMode::Require,
        DbTlsMode::VerifyFull => PgSslMode::VerifyFull,
    }
}
