use crate::types::RelayError;
use anyhow::Result;
use config::{Config, Environment, File};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Default upstream URL the sender calls; `listener-service` is the name
/// the listener container is reachable under in the compose network.
pub const DEFAULT_LISTENER_URL: &str = "http://listener-service:4000/receive";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub sender: SenderConfig,
    pub listener: ServiceConfig,
    pub app: ServiceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SenderConfig {
    pub host: String,
    pub port: u16,
    pub listener_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

pub fn load_config() -> Result<AppConfig> {
    // Load .env file first so it can supply ENV and APP_* overrides
    dotenv().ok();

    let settings = Config::builder()
        // Baked-in defaults so every source may be absent
        .set_default("sender.host", "0.0.0.0")?
        .set_default("sender.port", 3000_i64)?
        .set_default("sender.listener_url", DEFAULT_LISTENER_URL)?
        .set_default("listener.host", "0.0.0.0")?
        .set_default("listener.port", 4000_i64)?
        .set_default("app.host", "0.0.0.0")?
        .set_default("app.port", 3000_i64)?
        // Default config file
        .add_source(File::with_name("config/default").required(false))
        // Environment specific config file
        .add_source(
            File::with_name(&format!(
                "config/{}",
                env::var("ENV").unwrap_or_else(|_| "development".to_string())
            ))
            .required(false),
        )
        // Environment variables with the APP prefix, e.g. APP_SENDER__LISTENER_URL
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &AppConfig) -> Result<(), RelayError> {
    if config.sender.listener_url.is_empty() {
        return Err(RelayError::Config(
            "listener URL cannot be empty".to_string(),
        ));
    }

    if !config.sender.listener_url.starts_with("http://")
        && !config.sender.listener_url.starts_with("https://")
    {
        return Err(RelayError::InvalidListenerUrl(
            config.sender.listener_url.clone(),
        ));
    }

    if config.sender.port == 0 || config.listener.port == 0 || config.app.port == 0 {
        return Err(RelayError::Config("ports must be non-zero".to_string()));
    }

    Ok(())
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            sender: SenderConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                listener_url: DEFAULT_LISTENER_URL.to_string(),
            },
            listener: ServiceConfig {
                host: "0.0.0.0".to_string(),
                port: 4000,
            },
            app: ServiceConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
        }
    }
}
