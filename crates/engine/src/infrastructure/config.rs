//! Application configuration

use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind address
    pub server_host: String,
    /// HTTP listening port
    pub server_port: u16,
    /// CORS allowed origins ("*" for any); empty disables CORS
    pub cors_allowed_origins: Vec<String>,
    /// Seed the registry with the example roster at startup
    pub seed_example_staff: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_HOST.to_string(),
            server_port: DEFAULT_PORT,
            cors_allowed_origins: Vec::new(),
            seed_example_staff: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let server_port = match read("PORT").or_else(|| read("SERVER_PORT")) {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {raw:?}"))?,
            None => DEFAULT_PORT,
        };

        let seed_example_staff = match read("SEED_EXAMPLE_STAFF") {
            Some(raw) => parse_flag(&raw).with_context(|| {
                format!("SEED_EXAMPLE_STAFF must be true or false, got {raw:?}")
            })?,
            None => true,
        };

        Ok(Self {
            server_host: read("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            server_port,
            cors_allowed_origins: read("CORS_ALLOWED_ORIGINS")
                .map(|raw| {
                    raw.split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
            seed_example_staff,
        })
    }

    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.server_host, self.server_port)
            .parse()
            .with_context(|| {
                format!(
                    "SERVER_HOST must be an IP address, got {:?}",
                    self.server_host
                )
            })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load `.env.local` then `.env` from the working directory, if present.
///
/// Variables already set in the process environment win over both files.
/// Runs before logging is initialized, so a malformed file is skipped silently.
pub fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
