// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses ports, database URL, JWT and CORS settings with production validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Environment-based configuration for the scorecard server

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use tracing::{info, warn};

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Live deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback to development
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe database location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// SQLite database file
    SQLite {
        /// File path on disk
        path: PathBuf,
    },
    /// In-memory SQLite (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse a `sqlite:` URL; a bare path is treated as a SQLite file
    #[must_use]
    pub fn parse_url(s: &str) -> Self {
        let path_str = s.strip_prefix("sqlite:").unwrap_or(s);
        let path_str = path_str.strip_prefix("//").unwrap_or(path_str);
        if path_str == ":memory:" {
            Self::Memory
        } else {
            Self::SQLite {
                path: PathBuf::from(path_str),
            }
        }
    }

    /// Convert to a sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::parse_url(defaults::DATABASE_URL)
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Token signing settings
#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 shared secret
    #[serde(skip_serializing)]
    pub jwt_secret: String,
    /// Token lifetime in hours
    pub jwt_expiry_hours: i64,
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expiry_hours", &self.jwt_expiry_hours)
            .finish()
    }
}

impl AuthConfig {
    /// Whether the built-in development secret is in use
    #[must_use]
    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == defaults::DEV_JWT_SECRET
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated origin list, or `*`
    pub allowed_origins: String,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Database location
    pub database_url: DatabaseUrl,
    /// Token settings
    pub auth: AuthConfig,
    /// CORS settings
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            host: defaults::HOST.to_owned(),
            database_url: DatabaseUrl::default(),
            auth: AuthConfig {
                jwt_secret: defaults::DEV_JWT_SECRET.to_owned(),
                jwt_expiry_hours: defaults::JWT_EXPIRY_HOURS,
            },
            cors: CorsConfig {
                allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
            },
            environment: Environment::Development,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable fails to parse or validation fails
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            http_port: env_config::http_port(),
            host: env_var_or("HOST", defaults::HOST),
            database_url: DatabaseUrl::parse_url(&env_config::database_url()),
            auth: AuthConfig {
                jwt_secret: env_var_or("JWT_SECRET", defaults::DEV_JWT_SECRET),
                jwt_expiry_hours: env_var_or(
                    "JWT_EXPIRY_HOURS",
                    &defaults::JWT_EXPIRY_HOURS.to_string(),
                )
                .parse()
                .context("Invalid JWT_EXPIRY_HOURS value")?,
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    "CORS_ALLOWED_ORIGINS",
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration for the selected environment
    ///
    /// # Errors
    ///
    /// Returns an error for a zero port, a non-positive token lifetime, or the
    /// development secret in production
    pub fn validate(&self) -> Result<()> {
        if self.http_port == 0 {
            return Err(anyhow::anyhow!("HTTP_PORT must be greater than zero"));
        }

        if self.auth.jwt_expiry_hours <= 0 {
            return Err(anyhow::anyhow!("JWT_EXPIRY_HOURS must be positive"));
        }

        if self.auth.uses_dev_secret() {
            if self.environment.is_production() {
                return Err(anyhow::anyhow!(
                    "JWT_SECRET must be set in production; the development secret is not allowed"
                ));
            }
            warn!("Using the development JWT secret; set JWT_SECRET before deploying");
        }

        if self.database_url.is_memory() && self.environment.is_production() {
            warn!("In-memory database configured in production; data will not persist");
        }

        Ok(())
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Human-readable configuration summary for startup logs
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Conversation Scorecard Configuration:\n\
             - Environment: {}\n\
             - Bind: {}\n\
             - Database: {}\n\
             - JWT Expiry: {}h\n\
             - JWT Secret: {}\n\
             - CORS Origins: {}",
            self.environment,
            self.bind_address(),
            self.database_url,
            self.auth.jwt_expiry_hours,
            if self.auth.uses_dev_secret() {
                "development default"
            } else {
                "configured"
            },
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
