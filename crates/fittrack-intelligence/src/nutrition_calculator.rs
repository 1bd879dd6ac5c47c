// ABOUTME: Physiological target calculations from a user profile
// ABOUTME: BMR, TDEE, ideal body weight, body fat, water intake, BMI, and macro targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Calculator Module
//!
//! Every function here is total over a resolved [`UserProfile`]: inputs have
//! already been range-checked at the boundary, so the calculators never fail.
//! Coefficients come from [`NutritionConfig`].
//!
//! # Scientific References
//!
//! - Roza, A.M. & Shizgal, H.M. (1984). The Harris Benedict equation reevaluated.
//!   *American Journal of Clinical Nutrition*, 40(1), 168-182.
//! - Devine, B.J. (1974). Gentamicin therapy. *Drug Intell Clin Pharm*, 8, 650-655.
//! - Hodgdon, J.A. & Beckett, M.B. (1984). Prediction of percent body fat for
//!   U.S. Navy men and women from body circumferences and height.
//! - World Health Organization (2000). Obesity: preventing and managing the global epidemic.

use crate::config::NutritionConfig;
use fittrack_core::constants::units::{
    CM_PER_INCH, CM_PER_METER, KCAL_PER_GRAM_CARBS, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN,
    ML_PER_LITER, PERCENT,
};
use fittrack_core::models::{ActivityLevel, Gender, ProfileInput, UserProfile};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Daily calorie and macronutrient goals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetMacros {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

/// WHO adult BMI classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// Below 18.5
    Underweight,
    /// 18.5 up to 25
    Normal,
    /// 25 up to 30
    Overweight,
    /// 30 and above
    Obese,
}

/// Body mass index with its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    /// kg/m², one decimal
    pub value: f64,
    /// Category of the unrounded value
    pub category: BmiCategory,
}

/// Every target derived from one profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyTargets {
    /// Profile after defaults were applied
    pub profile: UserProfile,
    /// Basal metabolic rate, whole kcal
    pub bmr: f64,
    /// Total daily energy expenditure, whole kcal
    pub tdee: f64,
    /// Devine ideal body weight (kg, one decimal)
    pub ideal_body_weight_kg: f64,
    /// Estimated body fat (%, one decimal)
    pub body_fat_percent: f64,
    /// Recommended water intake (litres, one decimal)
    pub water_liters: f64,
    /// Body mass index
    pub bmi: Bmi,
    /// Daily macro goals
    pub macros: TargetMacros,
}

/// Basal metabolic rate (kcal/day), revised Harris-Benedict
///
/// Men use the male coefficient set; every other answer uses the female set.
#[must_use]
pub fn calculate_bmr(profile: &UserProfile, config: &NutritionConfig) -> f64 {
    let c = &config.bmr;
    let (constant, weight_coef, height_coef, age_coef) = match profile.gender {
        Gender::Male => (
            c.male_constant,
            c.male_weight_coef,
            c.male_height_coef,
            c.male_age_coef,
        ),
        Gender::Female | Gender::Other => (
            c.female_constant,
            c.female_weight_coef,
            c.female_height_coef,
            c.female_age_coef,
        ),
    };
    age_coef.mul_add(
        -f64::from(profile.age),
        height_coef.mul_add(
            profile.height_cm,
            weight_coef.mul_add(profile.weight_kg, constant),
        ),
    )
}

/// Total daily energy expenditure from a BMR and activity level
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &NutritionConfig) -> f64 {
    bmr * config.activity_factors.factor(activity_level)
}

/// Devine ideal body weight (kg)
#[must_use]
pub fn ideal_body_weight(gender: Gender, height_cm: f64, config: &NutritionConfig) -> f64 {
    let c = &config.body_composition;
    let base = match gender {
        Gender::Female => c.ibw_female_base_kg,
        Gender::Male | Gender::Other => c.ibw_male_base_kg,
    };
    let inches_over = (height_cm / CM_PER_INCH - c.ibw_threshold_inches).max(0.0);
    c.ibw_kg_per_inch.mul_add(inches_over, base)
}

/// Body-fat estimate (%) from weight and height, floored at zero
///
/// The male branch takes height in centimetres: its 0.15456 coefficient is
/// the metric Hodgdon constant, and feeding it inches puts a 75 kg, 178 cm
/// man near 66%. The female branch keeps its inch-based constants.
/// Log terms of non-positive inputs are undefined; those profiles estimate 0.
#[must_use]
pub fn body_fat_percentage(gender: Gender, weight_kg: f64, height_cm: f64) -> f64 {
    if weight_kg <= 0.0 || height_cm <= 0.0 {
        return 0.0;
    }
    let density = match gender {
        Gender::Male => 0.15456f64.mul_add(
            height_cm.log10(),
            0.19077f64.mul_add(-weight_kg.log10(), 1.0324),
        ),
        Gender::Female | Gender::Other => 0.221f64.mul_add(
            (height_cm / CM_PER_INCH).log10(),
            0.35004f64.mul_add(-weight_kg.log10(), 1.29579),
        ),
    };
    let estimate = 495.0 / density - 450.0;
    if estimate.is_finite() {
        estimate.max(0.0)
    } else {
        0.0
    }
}

/// Recommended daily water intake (litres)
#[must_use]
pub fn water_intake_liters(
    weight_kg: f64,
    activity_level: ActivityLevel,
    config: &NutritionConfig,
) -> f64 {
    let hydration = &config.hydration;
    weight_kg * hydration.ml_per_kg * hydration.factor(activity_level) / ML_PER_LITER
}

/// Daily macro goals for a TDEE using the configured split
#[must_use]
pub fn macro_targets(tdee: f64, config: &NutritionConfig) -> TargetMacros {
    let split = &config.macro_split;
    let share = |pct: u8| tdee * f64::from(pct) / PERCENT;
    TargetMacros {
        calories: tdee.round(),
        protein: (share(split.protein_pct) / KCAL_PER_GRAM_PROTEIN).round(),
        carbs: (share(split.carbs_pct) / KCAL_PER_GRAM_CARBS).round(),
        fat: (share(split.fat_pct) / KCAL_PER_GRAM_FAT).round(),
    }
}

/// Body mass index and category
#[must_use]
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Bmi {
    let height_m = height_cm / CM_PER_METER;
    let raw = if height_m > 0.0 {
        weight_kg / (height_m * height_m)
    } else {
        0.0
    };
    let category = if raw < 18.5 {
        BmiCategory::Underweight
    } else if raw < 25.0 {
        BmiCategory::Normal
    } else if raw < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    };
    Bmi {
        value: round_to(raw, 1),
        category,
    }
}

/// All targets for a resolved profile
///
/// TDEE applies the activity multiplier to the unrounded BMR; both are then
/// reported in whole kcal and the rounded TDEE drives the macro split.
#[must_use]
pub fn calculate_body_targets(profile: &UserProfile, config: &NutritionConfig) -> BodyTargets {
    let raw_bmr = calculate_bmr(profile, config);
    let tdee = calculate_tdee(raw_bmr, profile.activity_level, config).round();
    let bmr = raw_bmr.round();

    debug!(
        gender = ?profile.gender,
        activity = ?profile.activity_level,
        bmr,
        tdee,
        "calculated body targets"
    );

    BodyTargets {
        profile: *profile,
        bmr,
        tdee,
        ideal_body_weight_kg: round_to(
            ideal_body_weight(profile.gender, profile.height_cm, config),
            1,
        ),
        body_fat_percent: round_to(
            body_fat_percentage(profile.gender, profile.weight_kg, profile.height_cm),
            1,
        ),
        water_liters: round_to(
            water_intake_liters(profile.weight_kg, profile.activity_level, config),
            1,
        ),
        bmi: calculate_bmi(profile.weight_kg, profile.height_cm),
        macros: macro_targets(tdee, config),
    }
}

/// Resolve a partial profile against the configured defaults and compute its targets
#[must_use]
pub fn targets_for_input(input: &ProfileInput, config: &NutritionConfig) -> BodyTargets {
    let profile = input.resolve(&config.profile_defaults.as_profile());
    calculate_body_targets(&profile, config)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
