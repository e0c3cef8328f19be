use anyhow::{Context, Result, anyhow};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

/// Installs the global `fmt` subscriber. `RUST_LOG` wins over `level` when it parses;
/// an unparsable `level` is a configuration error.
pub fn init_logging(level: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter '{level}'"))?,
    };
    let directives = filter.to_string();

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to init logging: {e}"))?;

    debug!(filter = %directives, "logging initialised");
    Ok(())
}
