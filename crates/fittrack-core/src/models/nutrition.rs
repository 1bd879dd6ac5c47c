// ABOUTME: Nutrition tracking models for meals and logged food entries
// ABOUTME: Meal, MealType, Instructions, and NutritionLogEntry definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Type of meal
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
    /// Second snack slot
    Snack2,
    /// Unspecified or other meal type
    #[default]
    Other,
}

impl MealType {
    /// Parse meal type from string
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            "snack" | "snack1" => Self::Snack,
            "snack2" | "snack_2" => Self::Snack2,
            _ => Self::Other,
        }
    }

    /// Wire label of this meal type
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
            Self::Snack2 => "snack2",
            Self::Other => "other",
        }
    }
}

impl From<String> for MealType {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Preparation steps, delivered either as a list or as one block of text
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Instructions {
    /// Ordered list of steps
    Steps(Vec<String>),
    /// Free text, one step per line
    Text(String),
}

impl Default for Instructions {
    fn default() -> Self {
        Self::Steps(Vec::new())
    }
}

impl Instructions {
    /// Normalized list of non-empty steps
    #[must_use]
    pub fn steps(&self) -> Vec<&str> {
        match self {
            Self::Steps(steps) => steps
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect(),
            Self::Text(text) => text
                .lines()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }
}

/// A generated meal belonging to a meal plan
///
/// Meals carry no date of their own. Their calendar day is derived from their
/// position in the plan by the meal schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Meal {
    /// Meal identifier
    pub id: String,
    /// Display name
    #[serde(default)]
    pub meal_name: String,
    /// Slot of the day this meal fills
    #[serde(default)]
    pub meal_type: MealType,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
    /// Preparation time (minutes)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prep_time: Option<u32>,
    /// Ingredient lines in recipe order
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Preparation steps
    #[serde(default)]
    pub instructions: Instructions,
    /// Image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Recipe source URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl Meal {
    /// Check macro values are finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        validate_macros(("meal_id", &self.id), [self.calories, self.protein, self.carbs, self.fat])
    }
}

/// A food item logged by the user for a given day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionLogEntry {
    /// Entry identifier
    pub id: String,
    /// Day the food was eaten
    pub date: NaiveDate,
    /// Food description
    #[serde(default)]
    pub food_name: String,
    /// Meal slot
    #[serde(default)]
    pub meal_type: MealType,
    /// Energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Protein (g)
    #[serde(default)]
    pub protein: f64,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: f64,
    /// Fat (g)
    #[serde(default)]
    pub fat: f64,
}

impl NutritionLogEntry {
    /// Check macro values are finite and non-negative
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` naming the offending field
    pub fn validate(&self) -> AppResult<()> {
        validate_macros(("entry_id", &self.id), [self.calories, self.protein, self.carbs, self.fat])
    }
}

/// Macro values in `calories, protein, carbs, fat` order
fn validate_macros((owner_key, owner_id): (&str, &str), values: [f64; 4]) -> AppResult<()> {
    const FIELDS: [&str; 4] = ["calories", "protein", "carbs", "fat"];
    for (field, value) in FIELDS.into_iter().zip(values) {
        if !value.is_finite() || value < 0.0 {
            let mut details = serde_json::Map::new();
            details.insert("field".to_owned(), field.into());
            details.insert(owner_key.to_owned(), owner_id.into());
            return Err(AppError::out_of_range(
                field,
                format!("{field} must be a non-negative number, got {value}"),
            )
            .with_details(serde_json::Value::Object(details)));
        }
    }
    Ok(())
}
