//! Application configuration loaded from environment variables.

use std::env;
use std::num::ParseIntError;

use crate::error::AppError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_MAX_JSON_PAYLOAD_SIZE: usize = 64 * 1024;

const FALLBACK_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub cors_allowed_origins: Vec<String>,
    pub max_json_payload_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            cors_allowed_origins: FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect(),
            max_json_payload_size: DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        }
    }
}

impl Config {
    /// Load and validate all configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("BACKEND_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = match env::var("BACKEND_PORT") {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::config(
                    format!("BACKEND_PORT must be a valid port number, got '{raw}'"),
                    e,
                )
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let cors_allowed_origins =
            parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());

        let max_json_payload_size = match env::var("MAX_JSON_PAYLOAD_SIZE") {
            Ok(raw) => parse_payload_size(&raw).map_err(|e| {
                AppError::config(
                    format!("MAX_JSON_PAYLOAD_SIZE must be a positive byte count, got '{raw}'"),
                    e,
                )
            })?,
            Err(_) => DEFAULT_MAX_JSON_PAYLOAD_SIZE,
        };

        Ok(Config {
            host,
            port,
            cors_allowed_origins,
            max_json_payload_size,
        })
    }
}

/// Comma-separated origins, e.g. `http://localhost:3000,https://bowling.example`.
///
/// Empty, `null`, and non-http(s) entries are dropped; an empty result falls
/// back to localhost.
fn parse_origins(raw: &str) -> Vec<String> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(str::to_string)
        .collect();

    if origins.is_empty() {
        FALLBACK_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        origins
    }
}

fn parse_payload_size(raw: &str) -> Result<usize, std::io::Error> {
    let size = raw
        .trim()
        .parse::<usize>()
        .map_err(|e: ParseIntError| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    if size == 0 {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "payload size must be greater than zero",
        ));
    }
    Ok(size)
}
