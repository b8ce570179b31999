// ABOUTME: Core data models for transcripts, conversations, and analysis results
// ABOUTME: Re-exports conversation and analysis types shared across the workspace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Data Models
//!
//! Transcript and analysis types. Everything here is plain data; persistence
//! lives in the server crate and scoring in `scorecard-intelligence`.

/// Analysis result, sentiment, and report banding
pub mod analysis;
/// Transcript messages and conversation records
pub mod conversation;

pub use analysis::{AnalysisRecord, AnalysisResult, ScoreBand, Sentiment};
pub use conversation::{ConversationRecord, ConversationSummary, Message, MessageRecord, Sender};
