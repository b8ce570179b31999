// ABOUTME: Route module organization for the scorecard HTTP endpoints
// ABOUTME: Each domain module owns its paths and thin handlers over the database and scorer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Conversation scoring and report routes
pub mod analysis;
/// Transcript upload and management routes
pub mod conversations;
/// Health check and readiness routes
pub mod health;

pub use analysis::AnalysisRoutes;
pub use conversations::ConversationRoutes;
pub use health::HealthRoutes;

use axum::body::Bytes;
use scorecard_core::errors::{AppError, AppResult};
use serde::de::DeserializeOwned;
use tracing::warn;

/// Parse a JSON request body once the caller has been authenticated
pub(crate) fn parse_json_body<T: DeserializeOwned>(body: &Bytes) -> AppResult<T> {
    serde_json::from_slice::<T>(body).map_err(|e| {
        warn!(error = %e, "Invalid JSON request body");
        AppError::invalid_input(format!("Invalid JSON body: {e}"))
    })
}
