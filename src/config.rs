use std::env;
use std::path::PathBuf;
use anyhow::{bail, Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub games_dir: PathBuf,
    pub service_port: u16,
    pub service_host: String,
    pub cors_allowed_origins: Vec<String>,
    pub persist_title_changes: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let games_dir: PathBuf = lookup("GAMES_DIR")
            .unwrap_or_else(|| "./games".to_string())
            .into();

        let service_port = lookup("SERVICE_PORT")
            .unwrap_or_else(|| "8000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = lookup("SERVICE_HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let persist_title_changes = match lookup("PERSIST_TITLE_CHANGES") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("PERSIST_TITLE_CHANGES must be a boolean, got '{}'", raw))?,
            None => false,
        };

        Ok(Config {
            games_dir,
            service_port,
            service_host,
            cors_allowed_origins,
            persist_title_changes,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Games directory: {}", self.games_dir.display());
        tracing::info!("  CORS allowed origins: {}", self.cors_allowed_origins.join(", "));
        tracing::info!("  Persist simple title changes: {}", self.persist_title_changes);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised boolean '{}'", other),
    }
}
