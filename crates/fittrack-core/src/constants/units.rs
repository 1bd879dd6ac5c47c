// ABOUTME: Unit conversion constants for body metrics and nutrition energy
// ABOUTME: Provides named constants to eliminate magic numbers in calculations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Centimeters per meter
pub const CM_PER_METER: f64 = 100.0;

/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;

/// Energy density of protein (kcal/g)
pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;

/// Energy density of carbohydrate (kcal/g)
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;

/// Energy density of fat (kcal/g)
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

/// Percent scale factor
pub const PERCENT: f64 = 100.0;
