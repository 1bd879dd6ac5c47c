// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging and application builders with default configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code, clippy::must_use_candidate)]

use fittrack::{
    build_app, config::ServerConfig, resources::ServerResources, routes,
};
use fittrack_intelligence::config::IntelligenceConfig;
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Resources with default server and nutrition configuration
pub fn test_resources() -> Arc<ServerResources> {
    Arc::new(ServerResources::new(
        ServerConfig::default(),
        IntelligenceConfig::default(),
    ))
}

/// Routes without middleware
pub fn test_router() -> axum::Router {
    init_test_logging();
    routes::router(test_resources())
}

/// Routes with the full middleware stack
pub fn test_app(config: ServerConfig) -> axum::Router {
    init_test_logging();
    build_app(Arc::new(ServerResources::new(
        config,
        IntelligenceConfig::default(),
    )))
}
