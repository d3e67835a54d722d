use anyhow::{Context, Result};

const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application configuration loaded from environment variables.
/// Every setting has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on a resume JSON request body.
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_body_bytes: match std::env::var("MAX_BODY_BYTES") {
                Ok(v) => parse_body_limit(&v)?,
                Err(_) => DEFAULT_MAX_BODY_BYTES,
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

fn parse_body_limit(value: &str) -> Result<usize> {
    let limit = value
        .trim()
        .parse::<usize>()
        .with_context(|| format!("MAX_BODY_BYTES must be a positive integer, got '{value}'"))?;
    anyhow::ensure!(limit > 0, "MAX_BODY_BYTES must be greater than zero");
    Ok(limit)
}
