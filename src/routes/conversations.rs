// ABOUTME: Conversation route handlers for uploading, listing, viewing and deleting transcripts
// ABOUTME: All handlers require a bearer token and only see the caller's own conversations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::parse_json_body;
use crate::constants::paths;
use crate::middleware::authenticate_request;
use crate::resources::ServerResources;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use scorecard_core::errors::{AppError, AppResult};
use scorecard_core::models::{ConversationRecord, ConversationSummary, Message, MessageRecord};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Upload of a transcript
#[derive(Debug, Deserialize)]
pub struct CreateConversationRequest {
    /// Conversation title
    pub title: String,
    /// Messages in send order
    pub messages: Vec<Message>,
}

/// Response for listing conversations
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationListResponse {
    /// Newest first
    pub conversations: Vec<ConversationSummary>,
    /// Total count
    pub total: usize,
}

/// A conversation with its transcript
#[derive(Debug, Serialize, Deserialize)]
pub struct ConversationDetailResponse {
    /// The conversation
    pub conversation: ConversationRecord,
    /// Messages in send order
    pub messages: Vec<MessageRecord>,
}

// ============================================================================
// Routes
// ============================================================================

/// Conversation routes implementation
pub struct ConversationRoutes;

impl ConversationRoutes {
    /// Create all conversation routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                paths::CONVERSATIONS,
                get(Self::list_conversations).post(Self::create_conversation),
            )
            .route(
                "/api/conversations/:conversation_id",
                get(Self::get_conversation).delete(Self::delete_conversation),
            )
            .with_state(resources)
    }

    async fn create_conversation(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> AppResult<Response> {
        let auth = authenticate_request(&headers, &resources.auth_manager)?;
        let request: CreateConversationRequest = parse_json_body(&body)?;

        let title = request.title.trim();
        if title.is_empty() {
            return Err(AppError::invalid_input("Conversation title must not be empty"));
        }
        if request.messages.is_empty() {
            return Err(AppError::invalid_input(
                "Conversation must contain at least one message",
            ));
        }

        let conversation = resources
            .database
            .conversations()
            .create_conversation(&auth.user_id.to_string(), title, &request.messages)
            .await?;

        info!(
            conversation_id = %conversation.id,
            user_id = %auth.user_id,
            message_count = request.messages.len(),
            "Conversation uploaded"
        );

        Ok((StatusCode::CREATED, Json(conversation)).into_response())
    }

    async fn list_conversations(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> AppResult<Json<ConversationListResponse>> {
        let auth = authenticate_request(&headers, &resources.auth_manager)?;

        let conversations = resources
            .database
            .conversations()
            .list_conversations(&auth.user_id.to_string())
            .await?;

        Ok(Json(ConversationListResponse {
            total: conversations.len(),
            conversations,
        }))
    }

    async fn get_conversation(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(conversation_id): Path<String>,
    ) -> AppResult<Json<ConversationDetailResponse>> {
        let auth = authenticate_request(&headers, &resources.auth_manager)?;
        let manager = resources.database.conversations();

        let conversation = manager
            .get_conversation(&conversation_id, &auth.user_id.to_string())
            .await?
            .ok_or_else(|| AppError::not_found("Conversation"))?;
        let messages = manager.get_messages(&conversation_id).await?;

        Ok(Json(ConversationDetailResponse {
            conversation,
            messages,
        }))
    }

    async fn delete_conversation(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        Path(conversation_id): Path<String>,
    ) -> AppResult<StatusCode> {
        let auth = authenticate_request(&headers, &resources.auth_manager)?;

        let deleted = resources
            .database
            .conversations()
            .delete_conversation(&conversation_id, &auth.user_id.to_string())
            .await?;

        if !deleted {
            return Err(AppError::not_found("Conversation"));
        }

        info!(conversation_id = %conversation_id, "Conversation deleted");
        Ok(StatusCode::NO_CONTENT)
    }
}
