// ABOUTME: Server binary for the conversation scorecard HTTP API
// ABOUTME: Loads configuration, initializes logging and storage, then serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Conversation Scorecard Server Binary

use anyhow::Result;
use clap::Parser;
use convo_scorecard::{
    config::environment::ServerConfig, logging, resources::ServerResources, server,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "scorecard-server")]
#[command(about = "Conversation Scorecard - heuristic quality scoring for chat transcripts")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(url) = args.database_url {
        config.database_url = convo_scorecard::config::DatabaseUrl::parse_url(&url);
    }
    config.validate()?;

    info!("Starting Conversation Scorecard server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::from_config(config).await?);
    info!("Server resources initialized");

    info!("Endpoints:");
    info!("  POST   /functions/v1/analyze-conversation");
    info!("  POST   /api/conversations");
    info!("  GET    /api/conversations");
    info!("  GET    /api/conversations/:id");
    info!("  DELETE /api/conversations/:id");
    info!("  POST   /api/conversations/:id/analyze");
    info!("  GET    /api/conversations/:id/analysis");
    info!("  GET    /health, /ready");

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
