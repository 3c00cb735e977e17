//! Configuration module for the leaderboard backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::errors::AppError;

/// Roster endpoint used when `LEADERBOARD_UPSTREAM_URL` is unset.
pub const DEFAULT_UPSTREAM_URL: &str = "https://adventure-time.hackclub.dev/api/getNeighborsSecurely";

/// Output format for the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the roster provider the relay forwards to
    pub upstream_url: String,
    /// Timeout applied to each upstream request
    pub upstream_timeout: Duration,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Human-readable or JSON log lines
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let upstream_url = env::var("LEADERBOARD_UPSTREAM_URL")
            .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.to_string());

        let timeout_secs = env::var("LEADERBOARD_UPSTREAM_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".to_string());
        let timeout_secs: u64 = timeout_secs.parse().map_err(|_| {
            AppError::Config(format!(
                "Invalid LEADERBOARD_UPSTREAM_TIMEOUT_SECS: {}",
                timeout_secs
            ))
        })?;

        let bind_addr =
            env::var("LEADERBOARD_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr.parse().map_err(|_| {
            AppError::Config(format!("Invalid LEADERBOARD_BIND_ADDR format: {}", bind_addr))
        })?;

        let log_level = env::var("LEADERBOARD_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("LEADERBOARD_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("text") | Err(_) => LogFormat::Text,
            Ok(other) => {
                return Err(AppError::Config(format!(
                    "Invalid LEADERBOARD_LOG_FORMAT: {}",
                    other
                )))
            }
        };

        Ok(Self {
            upstream_url,
            upstream_timeout: Duration::from_secs(timeout_secs),
            bind_addr,
            log_level,
            log_format,
        })
    }
}
