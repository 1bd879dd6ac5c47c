// ABOUTME: FitTrack API server binary
// ABOUTME: Parses CLI overrides, initializes logging, and serves the REST API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # FitTrack Server Binary

use anyhow::{Context, Result};
use clap::Parser;
use fittrack::{build_app, config::ServerConfig, logging, resources::ServerResources};
use fittrack_core::constants::endpoints;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "fittrack-server")]
#[command(about = "FitTrack nutrition API - meal-plan scheduling, targets, and progress")]
struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind host
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    config.validate()?;

    logging::init_from_env()?;
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::with_global_intelligence(config.clone()));
    let app = build_app(resources);

    let address = config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    display_available_endpoints(&address);
    info!("Ready to serve nutrition data");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server stopped");
    Ok(())
}

#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(address: &str) {
    let api = endpoints::API_BASE;
    info!("=== Available API Endpoints ===");
    info!("   Health:        GET  http://{address}{}", endpoints::HEALTH_CHECK);
    info!("   Ready:         GET  http://{address}{}", endpoints::READY_CHECK);
    info!("   Targets:       POST http://{address}{api}/nutrition/targets");
    info!("   Daily totals:  POST http://{address}{api}/nutrition/daily-totals");
    info!("   Progress:      POST http://{address}{api}/nutrition/progress");
    info!("   Schedule plan: POST http://{address}{api}/meal-plans/schedule");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
