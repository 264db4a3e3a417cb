use anyhow::{Context, Result};
use gemini_relay::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

/// Filter from `RUST_LOG` when set, otherwise from the configured level.
fn log_filter(rust_log: Option<String>, configured_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        return EnvFilter::try_new(&directives)
            .with_context(|| format!("Invalid RUST_LOG directives: '{}'", directives));
    }

    configured_level.parse::<LevelFilter>().map_err(|_| {
        anyhow::anyhow!(
            "Invalid server.logs.level '{}'. Expected one of: error, warn, info, debug, trace",
            configured_level
        )
    })?;

    Ok(EnvFilter::new(configured_level))
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (before logging setup)
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let filter = match log_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &config.server.logs.level,
    ) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting gemini-relay (configured log level: {})",
        config.server.logs.level
    );
    info!("Configuration loaded: {:?}", config.upstream);

    server::run(config).await?;

    Ok(())
}
