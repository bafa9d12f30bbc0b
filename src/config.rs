//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! - `CUSTOMER_API_HOST` - Bind address (default: 0.0.0.0)
//! - `CUSTOMER_API_PORT` - Listen port (default: 8080)
//! - `CUSTOMER_STORE` - `scylla` or `memory` (default: scylla)
//! - `SCYLLA_NODES` - Comma-separated contact points (default: 127.0.0.1:9042)
//! - `SCYLLA_KEYSPACE` - Keyspace name (default: customers_ks)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Scylla,
    Memory,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub store: StoreBackend,
    pub scylla_nodes: Vec<String>,
    pub scylla_keyspace: String,
}

impl AppConfig {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = get("CUSTOMER_API_HOST", "0.0.0.0")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CUSTOMER_API_HOST".to_string(), e.to_string()))?;
        let port = get("CUSTOMER_API_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CUSTOMER_API_PORT".to_string(), e.to_string()))?;
        let store = parse_store_backend(&get("CUSTOMER_STORE", "scylla"))?;

        let scylla_nodes: Vec<String> = get("SCYLLA_NODES", "127.0.0.1:9042")
            .split(',')
            .map(str::trim)
            .filter(|node| !node.is_empty())
            .map(String::from)
            .collect();
        if store == StoreBackend::Scylla && scylla_nodes.is_empty() {
            return Err(ConfigError::MissingEnvVar("SCYLLA_NODES".to_string()));
        }

        let scylla_keyspace = get("SCYLLA_KEYSPACE", "customers_ks");
        validate_identifier(&scylla_keyspace, "SCYLLA_KEYSPACE")?;

        Ok(Self {
            host,
            port,
            store,
            scylla_nodes,
            scylla_keyspace,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_store_backend(value: &str) -> Result<StoreBackend, ConfigError> {
    match value.to_ascii_lowercase().as_str() {
        "scylla" => Ok(StoreBackend::Scylla),
        "memory" => Ok(StoreBackend::Memory),
        other => Err(ConfigError::InvalidEnvVar(
            "CUSTOMER_STORE".to_string(),
            format!("expected 'scylla' or 'memory', got '{}'", other),
        )),
    }
}

/// Keyspace names are interpolated into CQL, so only plain identifiers pass.
fn validate_identifier(value: &str, var_name: &str) -> Result<(), ConfigError> {
    let mut chars = value.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        && value.len() <= 48;

    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidEnvVar(
            var_name.to_string(),
            format!("'{}' is not a valid CQL identifier", value),
        ))
    }
}
