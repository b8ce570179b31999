// ABOUTME: Scorecard CLI - scores transcript files offline and mints development tokens
// ABOUTME: Shares the scoring engine and token manager with the HTTP server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Score a transcript (JSON array of {sender, content} objects)
//! scorecard-cli score transcript.json
//!
//! # Mint a bearer token for local testing
//! scorecard-cli token --user-id 6f1c1a8e-3f0b-4a53-9a57-2f6d9c1c0b11 --email dev@example.com
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use convo_scorecard::{
    auth::AuthManager, config::environment::ServerConfig, logging::LoggingConfig,
    models::Message, ConversationScorer,
};
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "scorecard-cli",
    about = "Conversation Scorecard CLI",
    long_about = "Score chat transcripts from the command line and mint development tokens."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a transcript file and print the analysis as JSON
    Score {
        /// Path to a JSON array of messages
        file: PathBuf,
    },
    /// Issue a bearer token signed with the configured secret
    Token {
        /// User the token authenticates
        #[arg(long)]
        user_id: Uuid,
        /// Email claim
        #[arg(long, default_value = "")]
        email: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::for_cli().init()?;

    match cli.command {
        Command::Score { file } => score(&file),
        Command::Token { user_id, email } => token(user_id, &email),
    }
}

fn score(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let messages: Vec<Message> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of messages", file.display()))?;
    debug!("Loaded {} messages from {}", messages.len(), file.display());

    let result = ConversationScorer::score(&messages)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn token(user_id: Uuid, email: &str) -> Result<()> {
    let config = ServerConfig::from_env()?;
    let manager = AuthManager::new(
        config.auth.jwt_secret.as_bytes(),
        config.auth.jwt_expiry_hours,
    );

    let token = manager.generate_token(user_id, email)?;
    println!("{token}");
    Ok(())
}
