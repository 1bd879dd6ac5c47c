// ABOUTME: Shared read-only state handed to every HTTP handler
// ABOUTME: Bundles server settings with the validated nutrition configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::ServerConfig;
use fittrack_intelligence::config::{IntelligenceConfig, NutritionConfig};

/// State shared by all routes behind an `Arc`
#[derive(Debug, Clone)]
pub struct ServerResources {
    /// HTTP server settings
    pub config: ServerConfig,
    /// Formula coefficients used by the calculators
    pub intelligence: IntelligenceConfig,
}

impl ServerResources {
    /// Build resources from explicit configuration
    #[must_use]
    pub const fn new(config: ServerConfig, intelligence: IntelligenceConfig) -> Self {
        Self {
            config,
            intelligence,
        }
    }

    /// Build resources using the process-wide intelligence configuration
    #[must_use]
    pub fn with_global_intelligence(config: ServerConfig) -> Self {
        Self::new(config, IntelligenceConfig::global().clone())
    }

    /// Nutrition coefficients
    #[must_use]
    pub const fn nutrition(&self) -> &NutritionConfig {
        &self.intelligence.nutrition
    }
}
