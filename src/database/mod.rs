// ABOUTME: SQLite connection management and schema migrations for conversation storage
// ABOUTME: Owns the pool and hands out per-table managers for conversations and analyses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Database Management
//!
//! Conversations, their ordered messages, and at most one analysis per
//! conversation are stored in SQLite. The schema is created on startup.

mod analyses;
mod conversations;

pub use analyses::AnalysisManager;
pub use conversations::ConversationManager;

use crate::config::environment::DatabaseUrl;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

/// Database manager for conversation storage
#[derive(Clone, Debug)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Connect, creating the database file if needed, and run migrations
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(url: &DatabaseUrl) -> Result<Self> {
        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let options = SqliteConnectOptions::from_str(&url.to_connection_string())?
            .create_if_missing(true)
            .foreign_keys(true);

        // An in-memory database lives only as long as its single connection
        let pool_options = if url.is_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(5)
        };
        let pool = pool_options
            .connect_with(options)
            .await
            .with_context(|| format!("Failed to connect to {url}"))?;

        let db = Self { pool };
        db.migrate().await?;

        info!("Database ready at {}", url);
        Ok(db)
    }

    /// Get a reference to the database pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Conversation and message operations
    #[must_use]
    pub fn conversations(&self) -> ConversationManager {
        ConversationManager::new(self.pool.clone())
    }

    /// Analysis operations
    #[must_use]
    pub fn analyses(&self) -> AnalysisManager {
        AnalysisManager::new(self.pool.clone())
    }

    /// Run database migrations
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> Result<()> {
        self.migrate_conversations().await?;
        self.migrate_analyses().await?;
        Ok(())
    }

    async fn migrate_conversations(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS conversations (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                title TEXT NOT NULL,
                created_at TEXT NOT NULL,
                analyzed_at TEXT
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE INDEX IF NOT EXISTS idx_conversations_user
            ON conversations(user_id, created_at)
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                conversation_id TEXT NOT NULL REFERENCES conversations(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                sender TEXT NOT NULL CHECK (sender IN ('user', 'ai')),
                content TEXT NOT NULL,
                created_at TEXT NOT NULL,
                UNIQUE (conversation_id, position)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn migrate_analyses(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS conversation_analyses (
                id TEXT PRIMARY KEY,
                conversation_id TEXT NOT NULL UNIQUE REFERENCES conversations(id) ON DELETE CASCADE,
                clarity_score REAL NOT NULL,
                relevance_score REAL NOT NULL,
                accuracy_score REAL NOT NULL,
                completeness_score REAL NOT NULL,
                sentiment TEXT NOT NULL CHECK (sentiment IN ('positive', 'neutral', 'negative')),
                empathy_score REAL NOT NULL,
                response_time_avg REAL NOT NULL,
                resolution_rate INTEGER NOT NULL,
                escalation_needed INTEGER NOT NULL,
                fallback_frequency INTEGER NOT NULL,
                overall_satisfaction_score REAL NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
