// ABOUTME: Progress projection comparing actual intake against daily targets
// ABOUTME: Clamped percent-of-target, signed variance, and per-macro progress summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progress Projector
//!
//! A target that is zero, negative or not finite has no meaningful ratio, so
//! both the percentage and the variance report 0 instead of NaN or infinity.

use crate::aggregation::DailyTotals;
use crate::nutrition_calculator::TargetMacros;
use fittrack_core::constants::units::PERCENT;
use serde::{Deserialize, Serialize};

fn usable_target(target: f64) -> bool {
    target.is_finite() && target > 0.0
}

/// Share of the target reached, capped at 100
#[must_use]
pub fn percent_of_target(actual: f64, target: f64) -> f64 {
    if !usable_target(target) || !actual.is_finite() {
        return 0.0;
    }
    (actual / target * PERCENT).min(PERCENT)
}

/// Signed deviation from the target in whole percent
#[must_use]
pub fn variance_percent(actual: f64, target: f64) -> f64 {
    if !usable_target(target) || !actual.is_finite() {
        return 0.0;
    }
    ((actual - target) / target * PERCENT).round()
}

/// Progress of one nutrient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Amount consumed
    pub actual: f64,
    /// Daily goal
    pub target: f64,
    /// `min(actual / target × 100, 100)`
    pub percent_of_target: f64,
    /// Signed whole-percent deviation
    pub variance_percent: f64,
    /// Amount left to reach the goal, never negative
    pub remaining: f64,
}

impl MacroProgress {
    /// Compare one actual value with its target
    #[must_use]
    pub fn new(actual: f64, target: f64) -> Self {
        Self {
            actual,
            target,
            percent_of_target: percent_of_target(actual, target),
            variance_percent: variance_percent(actual, target),
            remaining: if usable_target(target) && actual.is_finite() {
                (target - actual).max(0.0)
            } else {
                0.0
            },
        }
    }

    /// True once the goal has been met
    #[must_use]
    pub fn is_complete(&self) -> bool {
        usable_target(self.target) && self.actual >= self.target
    }
}

/// Progress of every tracked nutrient for one day
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionProgress {
    /// Energy
    pub calories: MacroProgress,
    /// Protein
    pub protein: MacroProgress,
    /// Carbohydrates
    pub carbs: MacroProgress,
    /// Fat
    pub fat: MacroProgress,
}

impl NutritionProgress {
    /// Project a day's totals onto its targets
    #[must_use]
    pub fn project(actual: &DailyTotals, target: &TargetMacros) -> Self {
        Self {
            calories: MacroProgress::new(actual.calories, target.calories),
            protein: MacroProgress::new(actual.protein, target.protein),
            carbs: MacroProgress::new(actual.carbs, target.carbs),
            fat: MacroProgress::new(actual.fat, target.fat),
        }
    }
}
