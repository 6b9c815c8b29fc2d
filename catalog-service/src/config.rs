use crate::utils::source::DEFAULT_DATA_PATH;
use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_path: PathBuf,
    pub api_key: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from the environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("API_KEY").context("API_KEY must be set")?;
        if api_key.trim().is_empty() {
            bail!("API_KEY must not be empty");
        }

        Ok(Self {
            data_path: env::var("DATA_PATH")
                .unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string())
                .into(),
            api_key,
            port: env::var("PORT")
                .unwrap_or_else(|_| "7003".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a whole number of seconds")?,
            ),
        })
    }
}
