// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for the FitTrack nutrition platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Unit conversion and measurement constants
pub mod units;

/// API endpoints
pub mod endpoints {
    /// Health check endpoint
    pub const HEALTH_CHECK: &str = "/health";
    /// Readiness endpoint
    pub const READY_CHECK: &str = "/ready";
    /// API base path
    pub const API_BASE: &str = "/api";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8081;
}

/// Service names used in structured logs
pub mod service_names {
    /// Main API server
    pub const FITTRACK_SERVER: &str = "fittrack-server";
}

/// Reference profile used when a user has not filled in their body metrics
pub mod profile_defaults {
    /// Body weight (kg)
    pub const WEIGHT_KG: f64 = 75.0;
    /// Height (cm)
    pub const HEIGHT_CM: f64 = 178.0;
    /// Age (years)
    pub const AGE_YEARS: u32 = 32;
}

/// Accepted ranges for body metrics at the data boundary
pub mod limits {
    /// Upper bound for body weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 500.0;
    /// Upper bound for height (cm)
    pub const MAX_HEIGHT_CM: f64 = 300.0;
    /// Upper bound for age (years)
    pub const MAX_AGE_YEARS: u32 = 130;
    /// Longest meal plan accepted (days)
    pub const MAX_PLAN_DAYS: i64 = 366;
}
