use anyhow::{Context, Result};
use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::infrastructure::settings::Settings;

/// `*` anywhere in the configured list opens the API to every origin.
pub(crate) fn build_cors_layer(settings: &Settings) -> Result<CorsLayer> {
    Ok(CorsLayer::new()
        .allow_origin(allowed_origins(&settings.cors_origins)?)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]))
}

fn allowed_origins(origins: &[String]) -> Result<AllowOrigin> {
    if origins.iter().any(|origin| origin == "*") {
        return Ok(AllowOrigin::any());
    }

    let mut values = Vec::with_capacity(origins.len());
    for origin in origins {
        let value = HeaderValue::from_str(origin)
            .with_context(|| format!("invalid CORS origin '{}'", origin.escape_debug()))?;
        values.push(value);
    }
    Ok(AllowOrigin::list(values))
}

#[cfg(test)]
mod tests {
    use super::build_cors_layer;
    use crate::infrastructure::settings::Settings;

    fn settings_with_origins(origins: &str) -> Settings {
        let origins = origins.to_string();
        Settings::from_lookup(|key| match key {
            "DB_USER" | "DB_HOST" | "DB_DATABASE" | "DB_PASSWORD" => Some("x".to_string()),
            "DB_PORT" => Some("5432".to_string()),
            "CORS_ORIGINS" => Some(origins.clone()),
            _ => None,
        })
        .expect("settings must load")
    }

    #[test]
    fn wildcard_and_explicit_origins_build() {
        assert!(build_cors_layer(&settings_with_origins("*")).is_ok());
        assert!(build_cors_layer(&settings_with_origins("http://localhost:3000")).is_ok());
    }

    #[test]
    fn malformed_origin_is_rejected_with_its_name() {
        let err = build_cors_layer(&settings_with_origins("http://ok.test,http://bad\norigin"))
            .expect_err("control characters are not valid in an origin");
        assert!(err.to_string().contains("http://bad\\norigin"), "{err}");
    }
}
