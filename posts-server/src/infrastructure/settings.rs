use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

const REQUIRED_DB_VARS: [&str; 5] = ["DB_USER", "DB_HOST", "DB_DATABASE", "DB_PASSWORD", "DB_PORT"];

#[derive(Debug, Clone)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub http_addr: String,
    pub static_dir: PathBuf,
    pub cors_origins: Vec<String>,
    pub log_level: String,
    pub http_request_body_limit_bytes: usize,
}

/// Transport security for the database connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbTlsMode {
    Disable,
    /// Encrypted, but any server certificate is accepted (self-signed included).
    RequireUnverified,
    VerifyFull,
}

impl DbTlsMode {
    fn from_flags(encrypt: bool, verify: bool) -> Self {
        match (encrypt, verify) {
            (false, _) => DbTlsMode::Disable,
            (true, false) => DbTlsMode::RequireUnverified,
            (true, true) => DbTlsMode::VerifyFull,
        }
    }
}

#[derive(Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
    pub tls: DbTlsMode,
    pub max_connections: u32,
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("tls", &self.tls)
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let missing: Vec<&str> = REQUIRED_DB_VARS
            .iter()
            .copied()
            .filter(|key| get(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(anyhow!(
                "missing required database environment variables: {}",
                missing.join(", ")
            ));
        }

        let port = parse_required(&get, "DB_PORT")?
            .parse::<u16>()
            .context("Failed to parse DB_PORT, expecting port number")?;

        // Passwords are taken verbatim; only the blank check above trims.
        let password = lookup("DB_PASSWORD").unwrap_or_default();

        let production = get("NODE_ENV").is_some_and(|env| env == "production");
        let encrypt = parse_bool_env(&get, "DB_SSL")?.unwrap_or(production);
        let verify = parse_bool_env(&get, "DB_SSL_VERIFY")?.unwrap_or(false);

        let database = DatabaseSettings {
            host: parse_required(&get, "DB_HOST")?,
            port,
            database: parse_required(&get, "DB_DATABASE")?,
            user: parse_required(&get, "DB_USER")?,
            password,
            tls: DbTlsMode::from_flags(encrypt, verify),
            max_connections: parse_positive(&get, "DB_MAX_CONNECTIONS", 10u32)?,
        };

        let http_host = get("HTTP_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let http_port: u16 = get("PORT")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .context("Failed to parse PORT, expecting port number")?;

        let static_dir = PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| "build".to_string()));
        let cors_origins = parse_cors_origins(&get("CORS_ORIGINS").unwrap_or_else(|| "*".to_string()));
        let log_level = get("LOG_LEVEL")
            .or_else(|| get("RUST_LOG"))
            .unwrap_or_else(|| "info".to_string());
        let http_request_body_limit_bytes =
            parse_positive(&get, "HTTP_REQUEST_BODY_LIMIT_BYTES", 1024 * 1024usize)?;

        Ok(Self {
            database,
            http_addr: format!("{http_host}:{http_port}"),
            static_dir,
            cors_origins,
            log_level,
            http_request_body_limit_bytes,
        })
    }
}

fn parse_required<G>(get: &G, key: &str) -> Result<String>
where
    G: Fn(&str) -> Option<String>,
{
    get(key).ok_or_else(|| anyhow!("{key} is required"))
}

fn parse_bool_env<G>(get: &G, key: &str) -> Result<Option<bool>>
where
    G: Fn(&str) -> Option<String>,
{
    let Some(raw) = get(key) else {
        return Ok(None);
    };

    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(Some(true)),
        "false" | "0" | "no" | "off" => Ok(Some(false)),
        _ => Err(anyhow!("Failed to parse {key}, expecting boolean, got '{raw}'")),
    }
}

fn parse_positive<G, T>(get: &G, key: &str, default: T) -> Result<T>
where
    G: Fn(&str) -> Option<String>,
    T: std::str::FromStr + Default + PartialEq + ToString,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = get(key)
        .unwrap_or_else(|| default.to_string())
        .parse::<T>()
        .with_context(|| format!("Failed to parse {key}, expecting positive integer"))?;

    if value == T::default() {
        return Err(anyhow!("{key} must be > 0"));
    }
    Ok(value)
}

fn parse_cors_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}
