// src/config/env.rs
// DOCUMENTATION: Environment variable management
// PURPOSE: Load and validate configuration from .env files

use dotenv::dotenv;
use std::env;

/// Application configuration loaded from environment variables
/// DOCUMENTATION: Centralizes all configuration in one struct
/// Load with Config::from_env() at application startup
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    /// Either DATABASE_URL or assembled from the POSTGRES_* variables
    pub database_url: String,

    /// Server bind address (default "0.0.0.0")
    pub server_address: String,

    /// Server listen port (default 8000)
    pub server_port: u16,

    /// Environment: development, staging, production
    pub environment: String,

    /// Log level: debug, info, warn, error
    pub log_level: String,

    /// Maximum connections in database pool
    pub db_max_connections: u32,

    /// Connection timeout in seconds
    pub db_connection_timeout: u64,
}

/// Individual Postgres connection settings
/// DOCUMENTATION: Used when DATABASE_URL is not provided
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostgresSettings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database: String,
}

impl PostgresSettings {
    fn from_env() -> Self {
        PostgresSettings {
            user: env::var("POSTGRES_USER").unwrap_or_else(|_| "postgres".to_string()),
            password: env::var("POSTGRES_PASSWORD").unwrap_or_else(|_| "postgres".to_string()),
            host: env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string()),
            port: parse_or("POSTGRES_PORT", 5432),
            database: env::var("POSTGRES_DB").unwrap_or_else(|_| "advertisements".to_string()),
        }
    }

    /// Build a postgres:// DSN from the individual settings
    pub fn dsn(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}",
            self.user, self.password, self.host, self.port, self.database
        )
    }
}

fn parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load configuration from environment variables
    /// DOCUMENTATION: Reads from .env or process environment
    /// Called once at application startup
    pub fn from_env() -> Self {
        // Load .env file if it exists
        dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| PostgresSettings::from_env().dsn());

        Config {
            database_url,
            server_address: env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: parse_or("SERVER_PORT", 8000),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 10),
            db_connection_timeout: parse_or("DB_CONNECTION_TIMEOUT", 30),
        }
    }

    /// Validate critical configuration
    /// DOCUMENTATION: Ensures application can start safely
    pub fn validate(&self) -> Result<(), String> {
        if self.database_url.is_empty() {
            return Err("DATABASE_URL is required".to_string());
        }

        if self.server_port == 0 {
            return Err("SERVER_PORT must be a non-zero port".to_string());
        }

        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_address, self.server_port)
    }

    /// Database URL with the password masked, safe for logging
    pub fn redacted_database_url(&self) -> String {
        match (self.database_url.find("://"), self.database_url.rfind('@')) {
            (Some(scheme_end), Some(at)) if at > scheme_end => {
                let credentials = &self.database_url[scheme_end + 3..at];
                match credentials.find(':') {
                    Some(colon) => format!(
                        "{}{}:***{}",
                        &self.database_url[..scheme_end + 3],
                        &credentials[..colon],
                        &self.database_url[at..]
                    ),
                    None => self.database_url.clone(),
                }
            }
            _ => self.database_url.clone(),
        }
    }
}
