use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub seed_data_path: Option<PathBuf>,
    pub cors_allowed_origin: Option<String>,
    pub default_trend_period: String,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let log_format = match get_env_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            "pretty" | "text" => LogFormat::Pretty,
            other => {
                return Err(Error::Config(format!(
                    "Invalid value for LOG_FORMAT: {} (expected 'json' or 'pretty')",
                    other
                )))
            }
        };

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            seed_data_path: get_env_opt("SEED_DATA_PATH").map(PathBuf::from),
            cors_allowed_origin: get_env_opt("CORS_ALLOWED_ORIGIN"),
            default_trend_period: get_env_or("DEFAULT_TREND_PERIOD", "6months"),
            log_level: get_env_or("LOG_LEVEL", "info"),
            log_format,
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_opt(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn get_env_or(name: &str, default: &str) -> String {
    get_env_opt(name).unwrap_or_else(|| default.to_string())
}
