// ABOUTME: Conversation scoring engine for heuristic transcript quality analysis
// ABOUTME: Pure, deterministic reducers over an ordered message list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Scorecard Intelligence
//!
//! The scorer turns an ordered transcript into an [`AnalysisResult`]. Every
//! metric is an independent reducer over the same immutable message slice,
//! so scoring performs no I/O and holds no state between calls.
//!
//! ```rust
//! use scorecard_core::models::Message;
//! use scorecard_intelligence::ConversationScorer;
//!
//! let messages = vec![
//!     Message::user("Where is my order"),
//!     Message::ai("Your order ships today"),
//! ];
//! let result = ConversationScorer::score(&messages).unwrap();
//! assert!((result.relevance_score - 90.0).abs() < f64::EPSILON);
//! ```

/// Substring lexicon matching over lowercased text
pub mod lexicon;
/// Per-metric reducers and the composed scoring pipeline
pub mod scorer;

pub use scorecard_core::models::{AnalysisResult, Message, Sender, Sentiment};
pub use scorer::ConversationScorer;
