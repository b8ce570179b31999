// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory databases, server resources, and signed test tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `convo_scorecard`

use anyhow::Result;
use convo_scorecard::{
    auth::AuthManager,
    config::environment::{DatabaseUrl, Environment, ServerConfig},
    database::Database,
    models::Message,
    resources::ServerResources,
};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Secret used by every test token
pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Server configuration for tests
pub fn test_config() -> ServerConfig {
    let mut config = ServerConfig {
        database_url: DatabaseUrl::Memory,
        environment: Environment::Testing,
        ..ServerConfig::default()
    };
    config.auth.jwt_secret = TEST_JWT_SECRET.to_owned();
    config
}

/// Standard in-memory test database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    Database::new(&DatabaseUrl::Memory).await
}

/// Create test authentication manager
pub fn create_test_auth_manager() -> AuthManager {
    AuthManager::new(TEST_JWT_SECRET.as_bytes(), 24)
}

/// Complete server resources over an in-memory database
pub async fn create_test_server_resources() -> Result<Arc<ServerResources>> {
    let database = create_test_database().await?;
    Ok(Arc::new(ServerResources::new(
        database,
        create_test_auth_manager(),
        test_config(),
    )))
}

/// A fresh user ID with a valid token for it
pub fn create_test_user(resources: &ServerResources) -> (Uuid, String) {
    let user_id = Uuid::new_v4();
    let token = resources
        .auth_manager
        .generate_token(user_id, "tester@example.com")
        .expect("Failed to sign test token");
    (user_id, token)
}

/// Store a conversation directly, bypassing HTTP
pub async fn seed_conversation(
    resources: &ServerResources,
    user_id: Uuid,
    title: &str,
    messages: &[Message],
) -> Result<String> {
    let record = resources
        .database
        .conversations()
        .create_conversation(&user_id.to_string(), title, messages)
        .await?;
    Ok(record.id)
}

/// Transcript from the order-help example
pub fn order_help_transcript() -> Vec<Message> {
    vec![
        Message::user("Hi, I need help with my order."),
        Message::ai("Sure, can you please share your order ID?"),
    ]
}
