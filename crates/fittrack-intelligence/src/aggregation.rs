// ABOUTME: Nutrition aggregation summing calories and macros across meals or log entries
// ABOUTME: DailyTotals, NutrientSource trait, and per-date / per-meal-type grouping helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Aggregator
//!
//! Reduces any collection of food items to total calories, protein, carbs and
//! fat. A field an item does not report counts as zero, so the result is
//! independent of item order and an empty collection sums to zero.

use chrono::NaiveDate;
use fittrack_core::models::{Meal, MealType, NutritionLogEntry};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Anything that reports (possibly partial) nutrition values
pub trait NutrientSource {
    /// Energy (kcal)
    fn calories(&self) -> Option<f64>;
    /// Protein (g)
    fn protein(&self) -> Option<f64>;
    /// Carbohydrates (g)
    fn carbs(&self) -> Option<f64>;
    /// Fat (g)
    fn fat(&self) -> Option<f64>;
}

/// Summed nutrition for a set of items
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyTotals {
    /// Energy (kcal)
    pub calories: f64,
    /// Protein (g)
    pub protein: f64,
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Fat (g)
    pub fat: f64,
}

impl DailyTotals {
    /// Totals of a single item, missing fields as zero
    #[must_use]
    pub fn of<T: NutrientSource + ?Sized>(item: &T) -> Self {
        Self {
            calories: item.calories().unwrap_or(0.0),
            protein: item.protein().unwrap_or(0.0),
            carbs: item.carbs().unwrap_or(0.0),
            fat: item.fat().unwrap_or(0.0),
        }
    }

    /// True when every field is zero
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

impl Add for DailyTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl AddAssign for DailyTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for DailyTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Partially filled nutrition values, as found on loosely typed payloads
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutrientAmounts {
    /// Energy (kcal)
    #[serde(default)]
    pub calories: Option<f64>,
    /// Protein (g)
    #[serde(default)]
    pub protein: Option<f64>,
    /// Carbohydrates (g)
    #[serde(default)]
    pub carbs: Option<f64>,
    /// Fat (g)
    #[serde(default)]
    pub fat: Option<f64>,
}

impl NutrientSource for NutrientAmounts {
    fn calories(&self) -> Option<f64> {
        self.calories
    }
    fn protein(&self) -> Option<f64> {
        self.protein
    }
    fn carbs(&self) -> Option<f64> {
        self.carbs
    }
    fn fat(&self) -> Option<f64> {
        self.fat
    }
}

impl NutrientSource for DailyTotals {
    fn calories(&self) -> Option<f64> {
        Some(self.calories)
    }
    fn protein(&self) -> Option<f64> {
        Some(self.protein)
    }
    fn carbs(&self) -> Option<f64> {
        Some(self.carbs)
    }
    fn fat(&self) -> Option<f64> {
        Some(self.fat)
    }
}

impl NutrientSource for Meal {
    fn calories(&self) -> Option<f64> {
        Some(self.calories)
    }
    fn protein(&self) -> Option<f64> {
        Some(self.protein)
    }
    fn carbs(&self) -> Option<f64> {
        Some(self.carbs)
    }
    fn fat(&self) -> Option<f64> {
        Some(self.fat)
    }
}

impl NutrientSource for NutritionLogEntry {
    fn calories(&self) -> Option<f64> {
        Some(self.calories)
    }
    fn protein(&self) -> Option<f64> {
        Some(self.protein)
    }
    fn carbs(&self) -> Option<f64> {
        Some(self.carbs)
    }
    fn fat(&self) -> Option<f64> {
        Some(self.fat)
    }
}

/// Sum the nutrition of every item
#[must_use]
pub fn aggregate<'a, T, I>(items: I) -> DailyTotals
where
    T: NutrientSource + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(DailyTotals::of).sum()
}

/// Totals of the log entries recorded on `date`
#[must_use]
pub fn totals_for_date(entries: &[NutritionLogEntry], date: NaiveDate) -> DailyTotals {
    aggregate(entries.iter().filter(|entry| entry.date == date))
}

/// Totals per meal slot, in slot order
#[must_use]
pub fn totals_by_meal_type<'a, I>(entries: I) -> BTreeMap<MealType, DailyTotals>
where
    I: IntoIterator<Item = &'a NutritionLogEntry>,
{
    entries
        .into_iter()
        .fold(BTreeMap::new(), |mut groups, entry| {
            *groups.entry(entry.meal_type).or_default() += DailyTotals::of(entry);
            groups
        })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn entry(id: &str, day: u32, meal_type: MealType, kcal: f64) -> NutritionLogEntry {
        NutritionLogEntry {
            id: id.to_owned(),
            date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
            food_name: id.to_owned(),
            meal_type,
            calories: kcal,
            protein: kcal / 20.0,
            carbs: kcal / 10.0,
            fat: kcal / 50.0,
        }
    }

    #[test]
    fn test_empty_aggregate_is_zero() {
        let none: Vec<Meal> = Vec::new();
        assert!(aggregate(&none).is_zero());
    }

    #[test]
    fn test_missing_fields_count_as_zero() {
        let items = [
            NutrientAmounts {
                calories: Some(200.0),
                protein: None,
                carbs: Some(30.0),
                fat: None,
            },
            NutrientAmounts {
                calories: None,
                protein: Some(12.0),
                carbs: None,
                fat: Some(4.5),
            },
        ];
        let totals = aggregate(&items);
        assert_eq!(
            totals,
            DailyTotals {
                calories: 200.0,
                protein: 12.0,
                carbs: 30.0,
                fat: 4.5,
            }
        );
    }

    #[test]
    fn test_totals_for_date_filters_other_days() {
        let entries = vec![
            entry("a", 1, MealType::Breakfast, 400.0),
            entry("b", 2, MealType::Lunch, 600.0),
            entry("c", 1, MealType::Dinner, 700.0),
        ];
        let totals = totals_for_date(&entries, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert!((totals.calories - 1100.0).abs() < 1e-9);
        assert!((totals.protein - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_group_by_meal_type() {
        let entries = vec![
            entry("a", 1, MealType::Snack, 100.0),
            entry("b", 1, MealType::Breakfast, 300.0),
            entry("c", 1, MealType::Snack, 150.0),
        ];
        let groups = totals_by_meal_type(&entries);
        assert_eq!(groups.len(), 2);
        assert!((groups[&MealType::Snack].calories - 250.0).abs() < 1e-9);
        assert_eq!(groups.keys().next(), Some(&MealType::Breakfast));
    }

    #[test]
    fn test_aggregate_ignores_item_order() {
        let entries = vec![
            entry("a", 1, MealType::Breakfast, 310.5),
            entry("b", 1, MealType::Lunch, 642.25),
            entry("c", 1, MealType::Snack, 95.0),
            entry("d", 1, MealType::Dinner, 788.75),
        ];
        let forward = aggregate(&entries);

        let reversed: Vec<_> = entries.iter().rev().cloned().collect();
        let mut rotated = entries.clone();
        rotated.rotate_left(2);

        for other in [aggregate(&reversed), aggregate(&rotated)] {
            assert!((forward.calories - other.calories).abs() < 1e-9);
            assert!((forward.protein - other.protein).abs() < 1e-9);
            assert!((forward.carbs - other.carbs).abs() < 1e-9);
            assert!((forward.fat - other.fat).abs() < 1e-9);
        }
        assert!((forward.calories - 1836.5).abs() < 1e-9);
    }
}
