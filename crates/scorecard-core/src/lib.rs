// ABOUTME: Core types and constants for the conversation scorecard platform
// ABOUTME: Foundation crate with error handling, transcript models, and scoring lexicons
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Scorecard Core
//!
//! Foundation crate providing shared types and constants for the conversation
//! scorecard platform. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and HTTP error bodies
//! - **constants**: Scoring baselines, penalties, and phrase lexicons
//! - **models**: Transcript messages, conversation records, and analysis results

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Scoring constants and phrase lexicons organized by metric
pub mod constants;

/// Core data models (Message, Conversation, `AnalysisResult`)
pub mod models;
