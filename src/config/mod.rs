// ABOUTME: Configuration module for the FitTrack server binary
// ABOUTME: Re-exports environment-driven server settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based server configuration
pub mod environment;

pub use environment::{Environment, ServerConfig};
