// ABOUTME: Configuration module for centralized server settings
// ABOUTME: Re-exports the environment-driven server configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Environment and server configuration
pub mod environment;

pub use environment::{AuthConfig, CorsConfig, DatabaseUrl, Environment, ServerConfig};
