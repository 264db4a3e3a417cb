mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, io::ErrorKind, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    let explicit = env::var("CONFIG_PATH").ok();
    let config_path = explicit.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    debug!("Loading configuration from: {}", config_path);

    let config = match load_from(config_path).await {
        Ok(config) => config,
        // Running without a config file is fine unless one was asked for
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound && explicit.is_none() => {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_PATH);
            Config::default()
        }
        Err(Error::Io(e)) if e.kind() == ErrorKind::NotFound => {
            return Err(Error::config(format!(
                "config file not found: {}",
                config_path
            )));
        }
        Err(e) => return Err(e),
    };

    Ok(config.with_api_key(env::var("GEMINI_API_KEY").ok()))
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}
