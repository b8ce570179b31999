// ABOUTME: HTTP middleware for authentication and cross-origin handling
// ABOUTME: Shared by every route group mounted on the scorecard server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Bearer-token extraction
pub mod auth;
/// CORS layer construction
pub mod cors;

pub use auth::authenticate_request;
pub use cors::setup_cors;
