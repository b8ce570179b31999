// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Liveness always answers; readiness also pings the database
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::resources::ServerResources;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/health", get(Self::health))
            .route("/ready", get(Self::ready))
            .with_state(resources)
    }

    async fn health() -> Json<Value> {
        Json(json!({
            "status": "healthy",
            "service": crate::constants::service_names::SCORECARD_SERVER,
            "version": env!("CARGO_PKG_VERSION"),
            "timestamp": chrono::Utc::now().to_rfc3339()
        }))
    }

    async fn ready(State(resources): State<Arc<ServerResources>>) -> (StatusCode, Json<Value>) {
        let database_ok = sqlx::query("SELECT 1")
            .execute(resources.database.pool())
            .await
            .is_ok();

        let status = if database_ok {
            StatusCode::OK
        } else {
            tracing::warn!("Readiness check failed: database unreachable");
            StatusCode::SERVICE_UNAVAILABLE
        };

        (
            status,
            Json(json!({
                "status": if database_ok { "ready" } else { "not_ready" },
                "database": database_ok,
                "timestamp": chrono::Utc::now().to_rfc3339()
            })),
        )
    }
}
