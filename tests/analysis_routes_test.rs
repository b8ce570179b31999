// ABOUTME: Integration tests for conversation analysis endpoints on the full router
// ABOUTME: Covers auth, not-found cases, upsert on re-analysis, reports and CORS preflight
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::http::StatusCode;
use common::{create_test_server_resources, create_test_user, order_help_transcript, seed_conversation};
use convo_scorecard::errors::{ErrorCode, ErrorResponse};
use convo_scorecard::models::{AnalysisRecord, Message, ScoreBand};
use convo_scorecard::resources::ServerResources;
use convo_scorecard::routes::analysis::AnalysisReportResponse;
use convo_scorecard::server::build_router;
use helpers::axum_test::AxumTestRequest;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

const ANALYZE: &str = "/functions/v1/analyze-conversation";

async fn setup() -> (Arc<ServerResources>, axum::Router, Uuid, String) {
    let resources = create_test_server_resources().await.unwrap();
    let (user_id, token) = create_test_user(&resources);
    let router = build_router(Arc::clone(&resources));
    (resources, router, user_id, token)
}

// ============================================================================
// Authentication and validation
// ============================================================================

#[tokio::test]
async fn test_missing_bearer_is_unauthorized() {
    let (_resources, router, _user_id, _token) = setup().await;

    let response = AxumTestRequest::post(ANALYZE)
        .json(&json!({"conversation_id": "anything"}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::AuthRequired);
}

#[tokio::test]
async fn test_bad_token_is_unauthorized() {
    let (_resources, router, _user_id, _token) = setup().await;

    let response = AxumTestRequest::post(ANALYZE)
        .bearer("not.a.token")
        .json(&json!({"conversation_id": "anything"}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::AuthInvalid);
}

#[tokio::test]
async fn test_auth_is_checked_before_the_body() {
    let (_resources, router, _user_id, _token) = setup().await;

    let response = AxumTestRequest::post(ANALYZE).send(router.clone()).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    let response = AxumTestRequest::post(ANALYZE)
        .header("content-type", "text/plain")
        .body("{not json")
        .send(router)
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::AuthRequired);
}

#[tokio::test]
async fn test_malformed_body_is_invalid_input() {
    let (_resources, router, _user_id, token) = setup().await;

    let response = AxumTestRequest::post(ANALYZE)
        .bearer(&token)
        .body("{not json")
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_missing_conversation_id_is_bad_request() {
    let (_resources, router, _user_id, token) = setup().await;

    let response = AxumTestRequest::post(ANALYZE)
        .bearer(&token)
        .json(&json!({}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.code, ErrorCode::MissingRequiredField);
}

#[tokio::test]
async fn test_unknown_conversation_is_not_found() {
    let (_resources, router, _user_id, token) = setup().await;

    let response = AxumTestRequest::post(ANALYZE)
        .bearer(&token)
        .json(&json!({"conversation_id": Uuid::new_v4().to_string()}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_conversation_without_messages_is_not_found() {
    let (resources, router, user_id, token) = setup().await;
    let conversation_id = seed_conversation(&resources, user_id, "Empty", &[])
        .await
        .unwrap();

    let response = AxumTestRequest::post(ANALYZE)
        .bearer(&token)
        .json(&json!({"conversation_id": conversation_id}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert!(body.error.message.contains("No messages found"));

    let stored = resources
        .database
        .analyses()
        .get_analysis(&conversation_id)
        .await
        .unwrap();
    assert!(stored.is_none());
}

// ============================================================================
// Analysis flow
// ============================================================================

#[tokio::test]
async fn test_analyze_stores_result_and_stamps_conversation() {
    let (resources, router, user_id, token) = setup().await;
    let conversation_id = seed_conversation(&resources, user_id, "Order", &order_help_transcript())
        .await
        .unwrap();

    let response = AxumTestRequest::post(ANALYZE)
        .bearer(&token)
        .json(&json!({"conversation_id": conversation_id}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["conversation_id"], conversation_id.as_str());
    assert_eq!(body["relevance_score"], 75.0);
    assert_eq!(body["accuracy_score"], 80.0);
    assert_eq!(body["fallback_frequency"], 0);
    assert_eq!(body["sentiment"], "neutral");

    let conversation = resources
        .database
        .conversations()
        .get_conversation(&conversation_id, &user_id.to_string())
        .await
        .unwrap()
        .unwrap();
    assert!(conversation.analyzed_at.is_some());
}

#[tokio::test]
async fn test_reanalysis_replaces_previous_result() {
    let (resources, router, user_id, token) = setup().await;
    let conversation_id = seed_conversation(
        &resources,
        user_id,
        "Hedging",
        &[Message::ai("I think maybe I'm not sure")],
    )
    .await
    .unwrap();
    let uri = format!("/api/conversations/{conversation_id}/analyze");

    let first: AnalysisRecord = AxumTestRequest::post(&uri)
        .bearer(&token)
        .send(router.clone())
        .await
        .json();
    let second: AnalysisRecord = AxumTestRequest::post(&uri)
        .bearer(&token)
        .send(router)
        .await
        .json();

    assert_eq!(first.id, second.id);
    assert_eq!(first.result, second.result);
    assert!((second.result.accuracy_score - 65.0).abs() < f64::EPSILON);

    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM conversation_analyses WHERE conversation_id = $1",
    )
    .bind(&conversation_id)
    .fetch_one(resources.database.pool())
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_other_users_cannot_analyze() {
    let (resources, router, owner_id, _owner_token) = setup().await;
    let (_other_id, other_token) = create_test_user(&resources);
    let conversation_id = seed_conversation(&resources, owner_id, "Private", &order_help_transcript())
        .await
        .unwrap();

    let response = AxumTestRequest::post(ANALYZE)
        .bearer(&other_token)
        .json(&json!({"conversation_id": conversation_id}))
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Report
// ============================================================================

#[tokio::test]
async fn test_report_before_analysis_is_not_found() {
    let (resources, router, user_id, token) = setup().await;
    let conversation_id = seed_conversation(&resources, user_id, "Fresh", &order_help_transcript())
        .await
        .unwrap();

    let response = AxumTestRequest::get(&format!("/api/conversations/{conversation_id}/analysis"))
        .bearer(&token)
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: ErrorResponse = response.json();
    assert_eq!(body.error.message, "No analysis found");
}

#[tokio::test]
async fn test_report_includes_bands() {
    let (resources, router, user_id, token) = setup().await;
    let conversation_id = seed_conversation(&resources, user_id, "Banded", &order_help_transcript())
        .await
        .unwrap();

    AxumTestRequest::post(&format!("/api/conversations/{conversation_id}/analyze"))
        .bearer(&token)
        .send(router.clone())
        .await;

    let response = AxumTestRequest::get(&format!("/api/conversations/{conversation_id}/analysis"))
        .bearer(&token)
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let report: AnalysisReportResponse = response.json();
    assert_eq!(report.conversation.id, conversation_id);
    assert!(report.conversation.analyzed_at.is_some());
    assert_eq!(report.bands.relevance_score, ScoreBand::Fair);
    assert_eq!(report.bands.clarity_score, ScoreBand::Good);
    assert_eq!(report.bands.completeness_score, ScoreBand::Fair);
    assert_eq!(report.bands.empathy_score, ScoreBand::Poor);
    assert_eq!(report.bands.overall_satisfaction_score, ScoreBand::Fair);
}

// ============================================================================
// Cross-cutting layers
// ============================================================================

#[tokio::test]
async fn test_cors_preflight_succeeds_without_auth() {
    let (_resources, router, _user_id, _token) = setup().await;

    let response = AxumTestRequest::options(ANALYZE)
        .header("origin", "https://dashboard.example.com")
        .header("access-control-request-method", "POST")
        .header("access-control-request-headers", "authorization, content-type")
        .send(router)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.header("access-control-allow-origin").as_deref(),
        Some("*")
    );
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let (_resources, router, _user_id, _token) = setup().await;

    let response = AxumTestRequest::get("/health").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.header("x-request-id").is_some());
}

#[tokio::test]
async fn test_ready_checks_database() {
    let (_resources, router, _user_id, _token) = setup().await;

    let response = AxumTestRequest::get("/ready").send(router).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ready");
    assert_eq!(body["database"], true);
}
