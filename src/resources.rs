// ABOUTME: Shared server resources injected into every route group
// ABOUTME: Bundles the database, token manager, and configuration behind Arcs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::auth::AuthManager;
use crate::config::environment::ServerConfig;
use crate::database::Database;
use anyhow::Result;
use std::sync::Arc;

/// Centralized resource container for dependency injection
#[derive(Clone, Debug)]
pub struct ServerResources {
    /// Conversation storage
    pub database: Arc<Database>,
    /// Token issuer and validator
    pub auth_manager: Arc<AuthManager>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Assemble resources from already-built parts
    #[must_use]
    pub fn new(database: Database, auth_manager: AuthManager, config: ServerConfig) -> Self {
        Self {
            database: Arc::new(database),
            auth_manager: Arc::new(auth_manager),
            config: Arc::new(config),
        }
    }

    /// Connect the database and build the token manager from `config`
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or migrated
    pub async fn from_config(config: ServerConfig) -> Result<Self> {
        let database = Database::new(&config.database_url).await?;
        let auth_manager = AuthManager::new(
            config.auth.jwt_secret.as_bytes(),
            config.auth.jwt_expiry_hours,
        );
        Ok(Self::new(database, auth_manager, config))
    }
}
