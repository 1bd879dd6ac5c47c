// ABOUTME: User body-metric profile used for physiological target calculation
// ABOUTME: Gender, ActivityLevel, ProfileInput wire form, and resolved UserProfile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{limits, profile_defaults};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Gender as recorded on the profile form
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum Gender {
    /// Male
    #[default]
    Male,
    /// Female
    Female,
    /// Any other answer
    Other,
}

impl Gender {
    /// Parse gender from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Self::Male,
            "female" | "f" => Self::Female,
            _ => Self::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Self-reported activity level
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    Light,
    /// Moderate exercise 3-5 days/week
    #[default]
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Hard daily training or a physical job
    VeryActive,
}

impl ActivityLevel {
    /// Parse activity level from string; unknown labels fall back to `Moderate`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "sedentary" => Self::Sedentary,
            "light" | "lightly-active" => Self::Light,
            "active" => Self::Active,
            "very-active" | "extra-active" => Self::VeryActive,
            _ => Self::Moderate,
        }
    }
}

impl From<String> for ActivityLevel {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Profile as submitted by the profile form, every field optional
///
/// Non-positive numbers are treated as "not filled in" and replaced by the
/// defaults on [`ProfileInput::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileInput {
    /// Gender
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Age (years)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Height (cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight (kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Activity level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
}

impl ProfileInput {
    /// Reject values that cannot describe a person
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` for non-finite, negative, or implausibly
    /// large metrics
    pub fn validate(&self) -> AppResult<()> {
        check_metric("weight_kg", self.weight_kg, limits::MAX_WEIGHT_KG)?;
        check_metric("height_cm", self.height_cm, limits::MAX_HEIGHT_CM)?;
        if let Some(age) = self.age {
            if age > limits::MAX_AGE_YEARS {
                return Err(AppError::out_of_range(
                    "age",
                    format!("age must be at most {}, got {age}", limits::MAX_AGE_YEARS),
                ));
            }
        }
        Ok(())
    }

    /// Fill missing fields from `defaults`
    #[must_use]
    pub fn resolve(&self, defaults: &UserProfile) -> UserProfile {
        UserProfile {
            gender: self.gender.unwrap_or(defaults.gender),
            age: self.age.filter(|a| *a > 0).unwrap_or(defaults.age),
            height_cm: self
                .height_cm
                .filter(|h| *h > 0.0)
                .unwrap_or(defaults.height_cm),
            weight_kg: self
                .weight_kg
                .filter(|w| *w > 0.0)
                .unwrap_or(defaults.weight_kg),
            activity_level: self.activity_level.unwrap_or(defaults.activity_level),
        }
    }
}

fn check_metric(field: &str, value: Option<f64>, max: f64) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 || v > max => Err(AppError::out_of_range(
            field,
            format!("{field} must be between 0 and {max}, got {v}"),
        )),
        _ => Ok(()),
    }
}

/// Fully resolved body metrics
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    /// Gender
    pub gender: Gender,
    /// Age (years)
    pub age: u32,
    /// Height (cm)
    pub height_cm: f64,
    /// Weight (kg)
    pub weight_kg: f64,
    /// Activity level
    pub activity_level: ActivityLevel,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            age: profile_defaults::AGE_YEARS,
            height_cm: profile_defaults::HEIGHT_CM,
            weight_kg: profile_defaults::WEIGHT_KG,
            activity_level: ActivityLevel::Moderate,
        }
    }
}
