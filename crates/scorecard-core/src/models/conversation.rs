// ABOUTME: Transcript message and conversation record types for upload and persistence
// ABOUTME: DTOs for user-owned conversations with their ordered message history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Author of a transcript message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    /// The human customer
    User,
    /// The automated responder
    Ai,
}

impl Sender {
    /// Storage and wire representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Ai => "ai",
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sender {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Self::User),
            "ai" => Ok(Self::Ai),
            other => Err(AppError::invalid_input(format!(
                "Unknown message sender '{other}', expected 'user' or 'ai'"
            ))),
        }
    }
}

/// One transcript entry, in send order
///
/// Uploaded transcripts may carry the text under `message` instead of
/// `content`; both spellings deserialize into the same field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent the message
    pub sender: Sender,
    /// Message text
    #[serde(alias = "message")]
    pub content: String,
}

impl Message {
    /// Create a message
    pub fn new(sender: Sender, content: impl Into<String>) -> Self {
        Self {
            sender,
            content: content.into(),
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Sender::User, content)
    }

    /// Create an AI message
    pub fn ai(content: impl Into<String>) -> Self {
        Self::new(Sender::Ai, content)
    }

    /// Whether the automated responder wrote this message
    #[must_use]
    pub fn is_ai(&self) -> bool {
        self.sender == Sender::Ai
    }

    /// Whether the human customer wrote this message
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Database representation of an uploaded conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationRecord {
    /// Unique conversation ID
    pub id: String,
    /// User ID who owns the conversation
    pub user_id: String,
    /// Conversation title
    pub title: String,
    /// When the conversation was uploaded (ISO 8601)
    pub created_at: String,
    /// When the conversation was last analyzed (ISO 8601)
    pub analyzed_at: Option<String>,
}

/// Database representation of a stored transcript message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageRecord {
    /// Unique message ID
    pub id: String,
    /// Conversation ID this message belongs to
    pub conversation_id: String,
    /// Zero-based position in the transcript
    pub position: i64,
    /// Who sent the message
    pub sender: Sender,
    /// Message content
    pub content: String,
    /// When the message was stored (ISO 8601)
    pub created_at: String,
}

impl From<&MessageRecord> for Message {
    fn from(record: &MessageRecord) -> Self {
        Self::new(record.sender, record.content.clone())
    }
}

/// Summary of a conversation for listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationSummary {
    /// Conversation ID
    pub id: String,
    /// Conversation title
    pub title: String,
    /// Number of messages in the conversation
    pub message_count: i64,
    /// When the conversation was uploaded
    pub created_at: String,
    /// When the conversation was last analyzed
    pub analyzed_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_round_trips_through_str() {
        assert_eq!("user".parse::<Sender>().unwrap(), Sender::User);
        assert_eq!("ai".parse::<Sender>().unwrap(), Sender::Ai);
        assert_eq!(Sender::Ai.to_string(), "ai");
        assert!("assistant".parse::<Sender>().is_err());
    }

    #[test]
    fn test_message_accepts_legacy_field_name() {
        let parsed: Vec<Message> = serde_json::from_str(
            r#"[{"sender":"user","message":"hello"},{"sender":"ai","content":"hi there"}]"#,
        )
        .unwrap();

        assert_eq!(parsed[0], Message::user("hello"));
        assert_eq!(parsed[1], Message::ai("hi there"));
    }

    #[test]
    fn test_message_rejects_unknown_sender() {
        let parsed: Result<Message, _> =
            serde_json::from_str(r#"{"sender":"bot","content":"beep"}"#);
        assert!(parsed.is_err());
    }
}
