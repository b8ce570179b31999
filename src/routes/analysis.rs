// ABOUTME: Analysis route handlers that score stored conversations and report results
// ABOUTME: Fetches messages, runs the scorer, upserts the result and stamps analyzed_at
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Analysis routes
//!
//! `POST /functions/v1/analyze-conversation` keeps the edge-function
//! contract (conversation ID in the body). The `/api/conversations/:id`
//! variants address the conversation by path. Both run the same flow.

use super::parse_json_body;
use crate::constants::paths;
use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    routing::{get, post},
    Json, Router,
};
use scorecard_core::errors::{AppError, AppResult, ErrorCode};
use scorecard_core::models::{AnalysisRecord, ConversationRecord, Message, ScoreBand};
use scorecard_intelligence::ConversationScorer;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Body of the edge-function style analysis request
#[derive(Debug, Deserialize)]
pub struct AnalyzeConversationRequest {
    /// Conversation to analyze
    #[serde(default)]
    pub conversation_id: Option<String>,
}

/// Band for each reported score
#[derive(Debug, Serialize, Deserialize)]
pub struct ScoreBands {
    /// Clarity band
    pub clarity_score: ScoreBand,
    /// Relevance band
    pub relevance_score: ScoreBand,
    /// Accuracy band
    pub accuracy_score: ScoreBand,
    /// Completeness band
    pub completeness_score: ScoreBand,
    /// Empathy band
    pub empathy_score: ScoreBand,
    /// Response time band
    pub response_time_avg: ScoreBand,
    /// Overall band
    pub overall_satisfaction_score: ScoreBand,
}

impl From<&AnalysisRecord> for ScoreBands {
    fn from(record: &AnalysisRecord) -> Self {
        let r = &record.result;
        Self {
            clarity_score: ScoreBand::from_score(r.clarity_score),
            relevance_score: ScoreBand::from_score(r.relevance_score),
            accuracy_score: ScoreBand::from_score(r.accuracy_score),
            completeness_score: ScoreBand::from_score(r.completeness_score),
            empathy_score: ScoreBand::from_score(r.empathy_score),
            response_time_avg: ScoreBand::from_score(r.response_time_avg),
            overall_satisfaction_score: ScoreBand::from_score(r.overall_satisfaction_score),
        }
    }
}

/// Stored analysis with its conversation and score bands
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisReportResponse {
    /// The analyzed conversation
    pub conversation: ConversationRecord,
    /// The stored scorecard
    pub analysis: AnalysisRecord,
    /// Band of each bounded score
    pub bands: ScoreBands,
}

/// Analysis routes implementation
pub struct AnalysisRoutes;

impl AnalysisRoutes {
    /// Create all analysis routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(paths::ANALYZE_CONVERSATION, post(Self::analyze_from_body))
            .route(
                "/api/conversations/:conversation_id/analyze",
                post(Self::analyze_from_path),
            )
            .route(
                "/api/conversations/:conversation_id/analysis",
                get(Self::get_report),
            )
            .with_state(resources)
    }

    async fn analyze_from_body(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> AppResult<Json<AnalysisRecord>> {
        let auth = authenticate_request(&headers, &resources.auth_manager)?;
        let request: AnalyzeConversationRequest = parse_json_body(&body)?;
        let conversation_id = request
            .conversation_id
            .filter(|id| !id.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("conversation_id"))?;

        let record =
            Self::analyze(&resources, &auth.user_id.to_string(), &conversation_id).await?;
        Ok(Json(record))
    }

    async fn analyze_from_path(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(conversation_id): Path<String>,
    ) -> AppResult<Json<AnalysisRecord>> {
        let auth = authenticate_request(&headers, &resources.auth_manager)?;
        let record =
            Self::analyze(&resources, &auth.user_id.to_string(), &conversation_id).await?;
        Ok(Json(record))
    }

    async fn get_report(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(conversation_id): Path<String>,
    ) -> AppResult<Json<AnalysisReportResponse>> {
        let auth = authenticate_request(&headers, &resources.auth_manager)?;

        let conversation = resources
            .database
            .conversations()
            .get_conversation(&conversation_id, &auth.user_id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found("Conversation"))?;

        let analysis = resources
            .database
            .analyses()
            .get_analysis(&conversation_id)
            .await?
            .ok_or_else(|| {
                AppError::new(ErrorCode::ResourceNotFound, "No analysis found")
                    .with_resource_id(conversation_id.clone())
            })?;

        let bands = ScoreBands::from(&analysis);
        Ok(Json(AnalysisReportResponse {
            conversation,
            analysis,
            bands,
        }))
    }

    /// Score a stored conversation owned by `user_id` and persist the result
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` when the conversation does not exist for
    /// this user or has no messages, and a database error if persistence fails
    pub async fn analyze(
        resources: &ServerResources,
        user_id: &str,
        conversation_id: &str,
    ) -> AppResult<AnalysisRecord> {
        let conversations = resources.database.conversations();

        conversations
            .get_conversation(conversation_id, user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Conversation"))?;

        let messages: Vec<Message> = conversations
            .get_messages(conversation_id)
            .await?
            .iter()
            .map(Message::from)
            .collect();

        let result = ConversationScorer::score(&messages)
            .map_err(|e| e.with_resource_id(conversation_id))?;

        let record = resources
            .database
            .analyses()
            .upsert_analysis(conversation_id, &result)
            .await?;
        conversations.mark_analyzed(conversation_id).await?;

        info!(
            conversation_id = %conversation_id,
            message_count = messages.len(),
            overall = record.result.overall_satisfaction_score,
            "Conversation analyzed"
        );

        Ok(record)
    }
}
