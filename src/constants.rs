// ABOUTME: Service names, environment defaults, and route paths for the scorecard server
// ABOUTME: Scoring constants live in scorecard-core; this module covers deployment settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Constants Module
//!
//! Deployment defaults and environment lookups. Scoring baselines and
//! lexicons are re-exported from `scorecard_core::constants`.

pub use scorecard_core::constants::*;

/// Service identifiers used in structured logs
pub mod service_names {
    /// HTTP server binary
    pub const SCORECARD_SERVER: &str = "convo-scorecard";
    /// Command-line tool
    pub const SCORECARD_CLI: &str = "scorecard-cli";
}

/// Fallback values when environment variables are unset
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default SQLite database location
    pub const DATABASE_URL: &str = "sqlite:./data/scorecard.db";
    /// Development-only signing secret, rejected in production
    pub const DEV_JWT_SECRET: &str = "scorecard-dev-secret-change-me";
    /// Default token lifetime
    pub const JWT_EXPIRY_HOURS: i64 = 24;
    /// Allow every origin unless configured
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
    /// Maximum accepted request body in bytes
    pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;
}

/// JWT claim values
pub mod jwt {
    /// Audience stamped into and required from every token
    pub const AUDIENCE: &str = "authenticated";
}

/// Public route paths
pub mod paths {
    /// Edge-function style analysis endpoint
    pub const ANALYZE_CONVERSATION: &str = "/functions/v1/analyze-conversation";
    /// Conversation collection
    pub const CONVERSATIONS: &str = "/api/conversations";
}

/// Environment-based configuration
pub mod env_config {
    use super::{defaults, service_names};
    use std::env;

    /// `HTTP` server port from environment or default
    #[must_use]
    pub fn http_port() -> u16 {
        env::var("HTTP_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults::HTTP_PORT)
    }

    /// Database `URL` from environment or default
    #[must_use]
    pub fn database_url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| defaults::DATABASE_URL.into())
    }

    /// Service name for logs
    #[must_use]
    pub fn service_name() -> String {
        env::var("SERVICE_NAME").unwrap_or_else(|_| service_names::SCORECARD_SERVER.into())
    }
}
