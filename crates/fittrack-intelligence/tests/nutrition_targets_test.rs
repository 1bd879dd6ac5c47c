// ABOUTME: Integration tests for body targets and progress projection
// ABOUTME: Uses the reference profile to pin BMR, TDEE, macros, water, and body composition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fittrack_core::models::{ActivityLevel, Gender, ProfileInput, UserProfile};
use fittrack_intelligence::aggregation::DailyTotals;
use fittrack_intelligence::config::NutritionConfig;
use fittrack_intelligence::nutrition_calculator::{
    body_fat_percentage, calculate_body_targets, calculate_tdee, targets_for_input,
    water_intake_liters, BmiCategory,
};
use fittrack_intelligence::progress::NutritionProgress;

fn approx(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

fn reference() -> UserProfile {
    UserProfile {
        gender: Gender::Male,
        age: 32,
        height_cm: 178.0,
        weight_kg: 75.0,
        activity_level: ActivityLevel::Moderate,
    }
}

#[test]
fn test_reference_profile_targets() {
    let targets = calculate_body_targets(&reference(), &NutritionConfig::default());

    approx(targets.bmr, 1766.0, 0.0);
    approx(targets.tdee, 2737.0, 0.0);
    approx(targets.macros.calories, 2737.0, 0.0);
    approx(targets.macros.protein, 205.0, 0.0);
    approx(targets.macros.carbs, 274.0, 0.0);
    approx(targets.macros.fat, 91.0, 0.0);
    approx(targets.water_liters, 3.7, 1e-9);
    approx(targets.ideal_body_weight_kg, 73.2, 1e-9);
    approx(targets.body_fat_percent, 34.1, 1e-9);
    approx(targets.bmi.value, 23.7, 1e-9);
    assert_eq!(targets.bmi.category, BmiCategory::Normal);
}

#[test]
fn test_empty_input_matches_reference() {
    let config = NutritionConfig::default();
    assert_eq!(
        targets_for_input(&ProfileInput::default(), &config),
        calculate_body_targets(&reference(), &config)
    );
}

#[test]
fn test_tdee_multipliers() {
    let config = NutritionConfig::default();
    for (level, factor) in [
        (ActivityLevel::Sedentary, 1.2),
        (ActivityLevel::Light, 1.375),
        (ActivityLevel::Moderate, 1.55),
        (ActivityLevel::Active, 1.725),
        (ActivityLevel::VeryActive, 1.9),
    ] {
        approx(calculate_tdee(1000.0, level, &config), 1000.0 * factor, 1e-9);
    }
}

#[test]
fn test_water_scales_with_activity() {
    let config = NutritionConfig::default();
    approx(
        water_intake_liters(60.0, ActivityLevel::Sedentary, &config),
        2.1,
        1e-9,
    );
    approx(
        water_intake_liters(60.0, ActivityLevel::VeryActive, &config),
        3.78,
        1e-9,
    );
}

#[test]
fn test_body_fat_branches() {
    approx(body_fat_percentage(Gender::Male, 75.0, 178.0), 34.1, 0.05);
    approx(body_fat_percentage(Gender::Female, 60.0, 165.0), 10.9, 0.05);
    approx(
        body_fat_percentage(Gender::Other, 60.0, 165.0),
        body_fat_percentage(Gender::Female, 60.0, 165.0),
        1e-12,
    );
}

#[test]
fn test_progress_against_reference_targets() {
    let targets = calculate_body_targets(&reference(), &NutritionConfig::default());
    let actual = DailyTotals {
        calories: 2737.0,
        protein: 0.0,
        carbs: 548.0,
        fat: 45.5,
    };

    let progress = NutritionProgress::project(&actual, &targets.macros);
    approx(progress.calories.percent_of_target, 100.0, 1e-9);
    approx(progress.calories.variance_percent, 0.0, 0.0);
    approx(progress.protein.percent_of_target, 0.0, 0.0);
    approx(progress.protein.remaining, 205.0, 0.0);
    approx(progress.carbs.percent_of_target, 100.0, 0.0);
    approx(progress.carbs.variance_percent, 100.0, 0.0);
    approx(progress.fat.percent_of_target, 50.0, 1e-9);
}
