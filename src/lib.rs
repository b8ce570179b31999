// ABOUTME: Main library entry point for the conversation scorecard service
// ABOUTME: Wires storage, authentication and HTTP routes around the scoring engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Conversation Scorecard
//!
//! Users upload chat transcripts between a customer and an AI agent. The
//! service scores each transcript on ten heuristic metrics plus an overall
//! satisfaction score, stores one analysis per conversation, and serves the
//! results over a bearer-authenticated HTTP API.
//!
//! ## Architecture
//!
//! - `scorecard-core`: error system, scoring constants, shared models
//! - `scorecard-intelligence`: the pure scoring engine
//! - this crate: configuration, logging, SQLite storage, JWT auth, routes

/// JWT issuing and validation
pub mod auth;
/// Environment-driven configuration
pub mod config;
/// Deployment defaults and route paths
pub mod constants;
/// SQLite storage for conversations and analyses
pub mod database;
/// Tracing subscriber setup
pub mod logging;
/// Authentication and CORS middleware
pub mod middleware;
/// Shared resources injected into handlers
pub mod resources;
/// HTTP route groups
pub mod routes;
/// Router assembly and serving
pub mod server;

pub use scorecard_core::errors;
pub use scorecard_core::models;
pub use scorecard_intelligence::ConversationScorer;
