// ABOUTME: Meal plan models delivered by the external meal-generation service
// ABOUTME: MealPlan, ShoppingList, and boundary validation of plan date ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::nutrition::Meal;
use crate::constants::limits;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of a shopping list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingListItem {
    /// Ingredient name
    pub name: String,
    /// Free-form quantity ("2 cups", "300 g")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    /// Store aisle or food group
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Whether the user ticked the item off
    #[serde(default)]
    pub checked: bool,
}

/// Shopping list generated alongside a meal plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShoppingList {
    /// List identifier
    pub id: String,
    /// Optional title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Items in display order
    #[serde(default)]
    pub items: Vec<ShoppingListItem>,
}

/// A generated meal plan spanning one or more calendar days
///
/// `meals` is a flat list; the order is significant because day boundaries are
/// derived from each meal's position.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealPlan {
    /// Plan identifier
    pub id: String,
    /// First day of the plan (inclusive)
    pub plan_date: NaiveDate,
    /// Last day of the plan (inclusive); absent for single-day plans
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan_end_date: Option<NaiveDate>,
    /// Meals in generation order
    #[serde(default)]
    pub meals: Vec<Meal>,
    /// Shopping lists attached to the plan
    #[serde(default)]
    pub shopping_lists: Vec<ShoppingList>,
    /// Meals per day recorded by the generator, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meals_per_day: Option<u32>,
}

impl MealPlan {
    /// Check the plan invariants before any scheduling happens
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` when the end date precedes the start date or
    /// `meals_per_day` is zero, and `VALUE_OUT_OF_RANGE` when the plan is too
    /// long or a meal carries invalid macros
    pub fn validate(&self) -> AppResult<()> {
        if let Some(end) = self.plan_end_date {
            if end < self.plan_date {
                return Err(AppError::invalid_input(format!(
                    "plan_end_date {end} precedes plan_date {}",
                    self.plan_date
                ))
                .with_details(serde_json::json!({ "plan_id": self.id })));
            }
            let span = (end - self.plan_date).num_days() + 1;
            if span > limits::MAX_PLAN_DAYS {
                return Err(AppError::out_of_range(
                    "plan_end_date",
                    format!(
                        "meal plan spans {span} days, at most {} allowed",
                        limits::MAX_PLAN_DAYS
                    ),
                ));
            }
        }

        if self.meals_per_day == Some(0) {
            return Err(AppError::invalid_input("meals_per_day must be at least 1"));
        }

        self.meals.iter().try_for_each(Meal::validate)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::errors::ErrorCode;

    fn plan(start: &str, end: Option<&str>) -> MealPlan {
        serde_json::from_value(serde_json::json!({
            "id": "plan-1",
            "plan_date": start,
            "plan_end_date": end,
            "meals": [{ "id": "m1", "meal_name": "Eggs", "calories": 300 }]
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_week_plan() {
        assert!(plan("2024-01-01", Some("2024-01-07")).validate().is_ok());
        assert!(plan("2024-01-01", None).validate().is_ok());
    }

    #[test]
    fn test_reversed_range_rejected() {
        let err = plan("2024-01-07", Some("2024-01-01")).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.details["plan_id"], "plan-1");
    }

    #[test]
    fn test_overlong_plan_rejected() {
        let err = plan("2024-01-01", Some("2026-01-01")).validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_zero_meals_per_day_rejected() {
        let mut p = plan("2024-01-01", None);
        p.meals_per_day = Some(0);
        assert_eq!(p.validate().unwrap_err().code, ErrorCode::InvalidInput);
    }
}
