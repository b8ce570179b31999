// ABOUTME: Database operations for uploaded conversations and their ordered messages
// ABOUTME: Every read and delete is scoped to the owning user
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use scorecard_core::errors::{AppError, AppResult};
use scorecard_core::models::{
    ConversationRecord, ConversationSummary, Message, MessageRecord, Sender,
};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

/// Conversation database operations manager
pub struct ConversationManager {
    pool: SqlitePool,
}

impl ConversationManager {
    /// Create a new conversation manager
    #[must_use]
    pub const fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    // ========================================================================
    // Conversation Operations
    // ========================================================================

    /// Store a conversation and its messages atomically
    ///
    /// # Errors
    ///
    /// Returns an error if any insert fails; nothing is stored in that case
    pub async fn create_conversation(
        &self,
        user_id: &str,
        title: &str,
        messages: &[Message],
    ) -> AppResult<ConversationRecord> {
        let id = Uuid::new_v4().to_string();
        let now = chrono::Utc::now().to_rfc3339();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| AppError::database(format!("Failed to begin transaction: {e}")))?;

        sqlx::query(
            r"
            INSERT INTO conversations (id, user_id, title, created_at, analyzed_at)
            VALUES ($1, $2, $3, $4, NULL)
            ",
        )
        .bind(&id)
        .bind(user_id)
        .bind(title)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::database(format!("Failed to create conversation: {e}")))?;

        for (position, message) in (0_i64..).zip(messages) {
            sqlx::query(
                r"
                INSERT INTO messages (id, conversation_id, position, sender, content, created_at)
                VALUES ($1, $2, $3, $4, $5, $6)
                ",
            )
            .bind(Uuid::new_v4().to_string())
            .bind(&id)
            .bind(position)
            .bind(message.sender.as_str())
            .bind(&message.content)
            .bind(&now)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::database(format!("Failed to add message: {e}")))?;
        }

        tx.commit()
            .await
            .map_err(|e| AppError::database(format!("Failed to commit conversation: {e}")))?;

        tracing::debug!(
            conversation_id = %id,
            message_count = messages.len(),
            "Stored conversation"
        );

        Ok(ConversationRecord {
            id,
            user_id: user_id.to_owned(),
            title: title.to_owned(),
            created_at: now,
            analyzed_at: None,
        })
    }

    /// Get a conversation by ID owned by `user_id`
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn get_conversation(
        &self,
        conversation_id: &str,
        user_id: &str,
    ) -> AppResult<Option<ConversationRecord>> {
        let row = sqlx::query(
            r"
            SELECT id, user_id, title, created_at, analyzed_at
            FROM conversations
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(conversation_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get conversation: {e}")))?;

        Ok(row.map(|r| ConversationRecord {
            id: r.get("id"),
            user_id: r.get("user_id"),
            title: r.get("title"),
            created_at: r.get("created_at"),
            analyzed_at: r.get("analyzed_at"),
        }))
    }

    /// List a user's conversations, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn list_conversations(&self, user_id: &str) -> AppResult<Vec<ConversationSummary>> {
        let rows = sqlx::query(
            r"
            SELECT c.id, c.title, c.created_at, c.analyzed_at,
                   COUNT(m.id) as message_count
            FROM conversations c
            LEFT JOIN messages m ON m.conversation_id = c.id
            WHERE c.user_id = $1
            GROUP BY c.id
            ORDER BY c.created_at DESC, c.rowid DESC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list conversations: {e}")))?;

        let summaries = rows
            .into_iter()
            .map(|r| ConversationSummary {
                id: r.get("id"),
                title: r.get("title"),
                message_count: r.get("message_count"),
                created_at: r.get("created_at"),
                analyzed_at: r.get("analyzed_at"),
            })
            .collect();

        Ok(summaries)
    }

    /// Delete a conversation with its messages and analysis
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn delete_conversation(&self, conversation_id: &str, user_id: &str) -> AppResult<bool> {
        let result = sqlx::query(
            r"
            DELETE FROM conversations
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(conversation_id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete conversation: {e}")))?;

        Ok(result.rows_affected() > 0)
    }

    /// Stamp the conversation as analyzed now
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails
    pub async fn mark_analyzed(&self, conversation_id: &str) -> AppResult<String> {
        let now = chrono::Utc::now().to_rfc3339();

        sqlx::query(
            r"
            UPDATE conversations
            SET analyzed_at = $1
            WHERE id = $2
            ",
        )
        .bind(&now)
        .bind(conversation_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to mark conversation analyzed: {e}")))?;

        Ok(now)
    }

    // ========================================================================
    // Message Operations
    // ========================================================================

    /// Get all messages for a conversation in transcript order
    ///
    /// # Errors
    ///
    /// Returns an error if database operation fails or a stored sender is unknown
    pub async fn get_messages(&self, conversation_id: &str) -> AppResult<Vec<MessageRecord>> {
        let rows = sqlx::query(
            r"
            SELECT id, conversation_id, position, sender, content, created_at
            FROM messages
            WHERE conversation_id = $1
            ORDER BY position ASC
            ",
        )
        .bind(conversation_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to get messages: {e}")))?;

        rows.iter().map(row_to_message).collect()
    }
}

fn row_to_message(r: &SqliteRow) -> AppResult<MessageRecord> {
    let sender: String = r.get("sender");
    Ok(MessageRecord {
        id: r.get("id"),
        conversation_id: r.get("conversation_id"),
        position: r.get("position"),
        sender: sender.parse::<Sender>()?,
        content: r.get("content"),
        created_at: r.get("created_at"),
    })
}
