// ABOUTME: Nutrition intelligence crate for meal-plan scheduling and body targets
// ABOUTME: Day bucketing, nutrition aggregation, target calculation, and progress projection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # FitTrack Intelligence
//!
//! Pure, synchronous calculations over already-validated records from
//! `fittrack-core`. Nothing here performs I/O or holds mutable state; the only
//! process-wide value is the read-only [`config::IntelligenceConfig`].
//!
//! ## Modules
//!
//! - **`meal_schedule`**: spreads a flat meal list over the plan's calendar days
//! - **`aggregation`**: sums calories and macros over meals or log entries
//! - **`nutrition_calculator`**: BMR, TDEE, ideal body weight, body fat, water, BMI, macros
//! - **`progress`**: actual vs. target as clamped percent and signed variance
//! - **`config`**: formula coefficients with environment overrides

/// Formula coefficients and environment overrides
pub mod config;

/// Nutrition Aggregator
pub mod aggregation;

/// Day Bucketer
pub mod meal_schedule;

/// Target Calculator
pub mod nutrition_calculator;

/// Progress Projector
pub mod progress;

pub use aggregation::{aggregate, DailyTotals, NutrientAmounts, NutrientSource};
pub use config::IntelligenceConfig;
pub use meal_schedule::{bucket_meals, schedule_plan, MealSchedule, ScheduledDay, ScheduledMeal};
pub use nutrition_calculator::{BodyTargets, TargetMacros};
pub use progress::{MacroProgress, NutritionProgress};
