// ABOUTME: Main library entry point for the FitTrack nutrition API server
// ABOUTME: Wires configuration, logging, shared resources, and HTTP routes together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack Server
//!
//! A small stateless REST surface over `fittrack-intelligence`, so dashboard
//! pages request computed figures instead of re-implementing them.
//!
//! ```text
//! JSON payload -> boundary validation -> Day Bucketer -> Aggregator -> Progress Projector -> JSON
//! ```

/// Environment-based server configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// CORS, request ids, and tracing layers
pub mod middleware;

/// Shared handler state
pub mod resources;

/// HTTP routes
pub mod routes;

use axum::Router;
use resources::ServerResources;
use std::sync::Arc;

/// Application router with the full middleware stack
pub fn build_app(resources: Arc<ServerResources>) -> Router {
    let config = resources.config.clone();
    middleware::apply(routes::router(resources), &config)
}
