// ABOUTME: Intelligence configuration container with environment overrides and validation
// ABOUTME: Provides the process-wide IntelligenceConfig singleton used by the calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Intelligence Configuration Module
//!
//! Configuration is built from defaults, then overridden by `FITTRACK_*`
//! environment variables, then validated. [`IntelligenceConfig::global`] keeps
//! one validated copy for the lifetime of the process.

pub mod error;
pub mod nutrition;

pub use error::ConfigError;
pub use nutrition::{
    ActivityFactorsConfig, BmrConfig, BodyCompositionConfig, HydrationConfig, MacroSplitConfig,
    NutritionConfig, ProfileDefaultsConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Global configuration singleton
static INTELLIGENCE_CONFIG: OnceLock<IntelligenceConfig> = OnceLock::new();

/// Main intelligence configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntelligenceConfig {
    /// Configuration for nutrition targets
    pub nutrition: NutritionConfig,
}

impl IntelligenceConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        INTELLIGENCE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load intelligence config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        debug!(
            macro_split = ?config.nutrition.macro_split,
            "intelligence configuration loaded"
        );
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint
    pub fn validate(&self) -> Result<(), ConfigError> {
        let nutr = &self.nutrition;

        if nutr.bmr.male_weight_coef <= 0.0
            || nutr.bmr.male_height_coef <= 0.0
            || nutr.bmr.female_weight_coef <= 0.0
            || nutr.bmr.female_height_coef <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "BMR weight and height coefficients must be positive".to_owned(),
            ));
        }

        let factors = &nutr.activity_factors;
        if factors.sedentary < 1.0 || factors.very_active > 2.5 {
            return Err(ConfigError::ValueOutOfRange(
                "Activity factors must be between 1.0 and 2.5".to_owned(),
            ));
        }
        if !is_ascending(&[
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ]) {
            return Err(ConfigError::InvalidRange(
                "Activity factors must be in ascending order".to_owned(),
            ));
        }

        let hydration = &nutr.hydration;
        if hydration.ml_per_kg <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "Water intake per kg must be positive".to_owned(),
            ));
        }
        if hydration.sedentary <= 0.0
            || !is_ascending(&[
                hydration.sedentary,
                hydration.light,
                hydration.moderate,
                hydration.active,
                hydration.very_active,
            ])
        {
            return Err(ConfigError::InvalidRange(
                "Hydration factors must be positive and in ascending order".to_owned(),
            ));
        }

        nutr.macro_split.validate()?;

        let defaults = &nutr.profile_defaults;
        if defaults.weight_kg <= 0.0 || defaults.height_cm <= 0.0 || defaults.age == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "Default profile metrics must be positive".to_owned(),
            ));
        }

        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: {val}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let nutr = &mut self.nutrition;

        let factors = &mut nutr.activity_factors;
        Self::apply_env_var("FITTRACK_ACTIVITY_FACTOR_SEDENTARY", &mut factors.sedentary)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_FACTOR_LIGHT", &mut factors.light)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_FACTOR_MODERATE", &mut factors.moderate)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_FACTOR_ACTIVE", &mut factors.active)?;
        Self::apply_env_var("FITTRACK_ACTIVITY_FACTOR_VERY_ACTIVE", &mut factors.very_active)?;

        Self::apply_env_var("FITTRACK_WATER_ML_PER_KG", &mut nutr.hydration.ml_per_kg)?;

        let split = &mut nutr.macro_split;
        Self::apply_env_var("FITTRACK_MACRO_PROTEIN_PCT", &mut split.protein_pct)?;
        Self::apply_env_var("FITTRACK_MACRO_CARBS_PCT", &mut split.carbs_pct)?;
        Self::apply_env_var("FITTRACK_MACRO_FAT_PCT", &mut split.fat_pct)?;

        let defaults = &mut nutr.profile_defaults;
        Self::apply_env_var("FITTRACK_DEFAULT_WEIGHT_KG", &mut defaults.weight_kg)?;
        Self::apply_env_var("FITTRACK_DEFAULT_HEIGHT_CM", &mut defaults.height_cm)?;
        Self::apply_env_var("FITTRACK_DEFAULT_AGE", &mut defaults.age)?;

        Ok(self)
    }
}

fn is_ascending(values: &[f64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serial_test::serial;

    #[test]
    fn test_defaults_validate() {
        assert!(IntelligenceConfig::default().validate().is_ok());
    }

    #[test]
    fn test_unordered_activity_factors_rejected() {
        let mut config = IntelligenceConfig::default();
        config.nutrition.activity_factors.light = 1.1;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_) | ConfigError::InvalidRange(_))
        ));
    }

    #[test]
    #[serial]
    fn test_env_override_applied() {
        env::set_var("FITTRACK_MACRO_PROTEIN_PCT", "25");
        env::set_var("FITTRACK_MACRO_CARBS_PCT", "45");
        let config = IntelligenceConfig::load();
        env::remove_var("FITTRACK_MACRO_PROTEIN_PCT");
        env::remove_var("FITTRACK_MACRO_CARBS_PCT");

        let split = config.unwrap().nutrition.macro_split;
        assert_eq!(split.protein_pct, 25);
        assert_eq!(split.carbs_pct, 45);
        assert_eq!(split.fat_pct, 30);
    }

    #[test]
    #[serial]
    fn test_env_override_breaking_split_fails() {
        env::set_var("FITTRACK_MACRO_FAT_PCT", "50");
        let result = IntelligenceConfig::load();
        env::remove_var("FITTRACK_MACRO_FAT_PCT");
        assert!(matches!(result, Err(ConfigError::InvalidWeights(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_parse_error() {
        env::set_var("FITTRACK_DEFAULT_AGE", "thirty");
        let result = IntelligenceConfig::load();
        env::remove_var("FITTRACK_DEFAULT_AGE");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
