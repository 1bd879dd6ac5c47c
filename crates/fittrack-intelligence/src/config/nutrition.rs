// ABOUTME: Nutrition configuration for body targets and daily macro goals
// ABOUTME: Configures BMR coefficients, activity and hydration factors, macro split, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Target Configuration
//!
//! Coefficients for every physiological formula used by the target calculator.
//! Defaults reproduce the published values; each can be overridden through the
//! environment (see [`super::IntelligenceConfig::load`]).
//!
//! # References
//!
//! - BMR: Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Ideal body weight: Devine, B.J. (1974). Gentamicin therapy. *Drug Intell Clin Pharm*, 8, 650-655.
//! - Activity factors: `McArdle`, W.D., Katch, F.I., & Katch, V.L. (2010). Exercise Physiology.

use super::error::ConfigError;
use fittrack_core::constants::profile_defaults;
use fittrack_core::models::{ActivityLevel, Gender, UserProfile};
use serde::{Deserialize, Serialize};

/// Nutrition target configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionConfig {
    /// BMR coefficients
    pub bmr: BmrConfig,
    /// Activity multipliers for TDEE
    pub activity_factors: ActivityFactorsConfig,
    /// Activity multipliers for daily water intake
    pub hydration: HydrationConfig,
    /// Share of TDEE assigned to each macronutrient
    pub macro_split: MacroSplitConfig,
    /// Ideal body weight and body-fat constants
    pub body_composition: BodyCompositionConfig,
    /// Profile used for fields the user left empty
    pub profile_defaults: ProfileDefaultsConfig,
}

/// Revised Harris-Benedict coefficients
///
/// `BMR = constant + weight_coef·kg + height_coef·cm − age_coef·years`, with one
/// coefficient set for men and one used for every other answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrConfig {
    /// Male constant term (88.362)
    pub male_constant: f64,
    /// Male weight coefficient (13.397)
    pub male_weight_coef: f64,
    /// Male height coefficient (4.799)
    pub male_height_coef: f64,
    /// Male age coefficient (5.677)
    pub male_age_coef: f64,
    /// Female constant term (447.593)
    pub female_constant: f64,
    /// Female weight coefficient (9.247)
    pub female_weight_coef: f64,
    /// Female height coefficient (3.098)
    pub female_height_coef: f64,
    /// Female age coefficient (4.330)
    pub female_age_coef: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityFactorsConfig {
    /// Sedentary: 1.2
    pub sedentary: f64,
    /// Light: 1.375
    pub light: f64,
    /// Moderate: 1.55
    pub moderate: f64,
    /// Active: 1.725
    pub active: f64,
    /// Very active: 1.9
    pub very_active: f64,
}

impl ActivityFactorsConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Daily water intake settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HydrationConfig {
    /// Base intake per kilogram of body weight (35 mL)
    pub ml_per_kg: f64,
    /// Sedentary: 1.0
    pub sedentary: f64,
    /// Light: 1.2
    pub light: f64,
    /// Moderate: 1.4
    pub moderate: f64,
    /// Active: 1.6
    pub active: f64,
    /// Very active: 1.8
    pub very_active: f64,
}

impl HydrationConfig {
    /// Multiplier for an activity level
    #[must_use]
    pub const fn factor(&self, level: ActivityLevel) -> f64 {
        match level {
            ActivityLevel::Sedentary => self.sedentary,
            ActivityLevel::Light => self.light,
            ActivityLevel::Moderate => self.moderate,
            ActivityLevel::Active => self.active,
            ActivityLevel::VeryActive => self.very_active,
        }
    }
}

/// Percent of TDEE assigned to each macronutrient; must sum to 100
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MacroSplitConfig {
    /// Protein share (30)
    pub protein_pct: u8,
    /// Carbohydrate share (40)
    pub carbs_pct: u8,
    /// Fat share (30)
    pub fat_pct: u8,
}

impl MacroSplitConfig {
    /// Validate that the split sums to 100%
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidWeights` if protein + carbs + fat is not 100
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sum = u16::from(self.protein_pct) + u16::from(self.carbs_pct) + u16::from(self.fat_pct);
        if sum == 100 {
            Ok(())
        } else {
            Err(ConfigError::InvalidWeights(format!(
                "macro split must sum to 100, got {sum}"
            )))
        }
    }
}

/// Constants for ideal body weight and body-fat estimation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyCompositionConfig {
    /// Devine base weight for women (45.5 kg)
    pub ibw_female_base_kg: f64,
    /// Devine base weight otherwise (50 kg)
    pub ibw_male_base_kg: f64,
    /// Weight added per inch above the threshold (2.3 kg)
    pub ibw_kg_per_inch: f64,
    /// Height where the Devine increment starts (60 in)
    pub ibw_threshold_inches: f64,
}

/// Values substituted for profile fields the user left empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDefaultsConfig {
    /// Weight (75 kg)
    pub weight_kg: f64,
    /// Height (178 cm)
    pub height_cm: f64,
    /// Age (32)
    pub age: u32,
    /// Gender (male)
    pub gender: Gender,
    /// Activity level (moderate)
    pub activity_level: ActivityLevel,
}

impl ProfileDefaultsConfig {
    /// Defaults as a resolved profile
    #[must_use]
    pub const fn as_profile(&self) -> UserProfile {
        UserProfile {
            gender: self.gender,
            age: self.age,
            height_cm: self.height_cm,
            weight_kg: self.weight_kg,
            activity_level: self.activity_level,
        }
    }
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            male_constant: 88.362,
            male_weight_coef: 13.397,
            male_height_coef: 4.799,
            male_age_coef: 5.677,
            female_constant: 447.593,
            female_weight_coef: 9.247,
            female_height_coef: 3.098,
            female_age_coef: 4.330,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for HydrationConfig {
    fn default() -> Self {
        Self {
            ml_per_kg: 35.0,
            sedentary: 1.0,
            light: 1.2,
            moderate: 1.4,
            active: 1.6,
            very_active: 1.8,
        }
    }
}

impl Default for MacroSplitConfig {
    fn default() -> Self {
        Self {
            protein_pct: 30,
            carbs_pct: 40,
            fat_pct: 30,
        }
    }
}

impl Default for BodyCompositionConfig {
    fn default() -> Self {
        Self {
            ibw_female_base_kg: 45.5,
            ibw_male_base_kg: 50.0,
            ibw_kg_per_inch: 2.3,
            ibw_threshold_inches: 60.0,
        }
    }
}

impl Default for ProfileDefaultsConfig {
    fn default() -> Self {
        Self {
            weight_kg: profile_defaults::WEIGHT_KG,
            height_cm: profile_defaults::HEIGHT_CM,
            age: profile_defaults::AGE_YEARS,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
        }
    }
}
