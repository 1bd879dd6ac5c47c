// ABOUTME: Meal-plan day bucketing that spreads a flat meal list across calendar days
// ABOUTME: MealSchedule, ScheduledMeal, per-day lookup, and per-day nutrition totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Day Bucketer
//!
//! Generated meal plans arrive as one ordered list of meals with no dates. The
//! calendar day of each meal is derived from its position:
//!
//! ```text
//! total_days    = plan_end_date ? (end - start) + 1 : 1
//! meals_per_day = ceil(meals / total_days)
//! day_index(i)  = floor(i / meals_per_day)
//! day_date(i)   = start + day_index(i) days
//! ```
//!
//! When the plan records how many meals per day the generator produced, that
//! value replaces the inferred one, which keeps plans with an uneven day (an
//! extra snack, a skipped meal) from drifting across day boundaries.

use crate::aggregation::{aggregate, DailyTotals};
use chrono::{Duration, NaiveDate};
use fittrack_core::models::{Meal, MealPlan};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// A meal annotated with the day it was bucketed into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledMeal {
    /// Zero-based day within the plan
    pub day_index: usize,
    /// Calendar date of that day
    pub day_date: NaiveDate,
    /// The meal itself
    #[serde(flatten)]
    pub meal: Meal,
}

/// Meals of a plan grouped by day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealSchedule {
    /// First day of the plan
    pub start_date: NaiveDate,
    /// Number of calendar days the plan covers
    pub total_days: usize,
    /// Meals assigned to each day (0 when the plan has no meals)
    pub meals_per_day: usize,
    /// Day index to meals, original order preserved within each day
    pub days: BTreeMap<usize, Vec<ScheduledMeal>>,
}

/// One calendar day of a schedule with its nutrition totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduledDay<'a> {
    /// Zero-based day within the plan
    pub day_index: usize,
    /// Calendar date
    pub date: NaiveDate,
    /// Meals of the day, possibly empty
    pub meals: &'a [ScheduledMeal],
    /// Summed nutrition of those meals
    pub totals: DailyTotals,
}

/// Inclusive number of days from `start` to `end`, at least one
#[must_use]
pub fn days_between_inclusive(start: NaiveDate, end: NaiveDate) -> usize {
    let span = (end - start).num_days() + 1;
    usize::try_from(span).unwrap_or(0).max(1)
}

/// Bucket `meals` into calendar days starting at `start`
///
/// `meals_per_day_hint` overrides the value inferred from the list length.
#[must_use]
pub fn bucket_meals(
    meals: &[Meal],
    start: NaiveDate,
    end: Option<NaiveDate>,
    meals_per_day_hint: Option<usize>,
) -> MealSchedule {
    let total_days = end.map_or(1, |end| days_between_inclusive(start, end));

    if meals.is_empty() {
        return MealSchedule {
            start_date: start,
            total_days,
            meals_per_day: 0,
            days: BTreeMap::new(),
        };
    }

    let meals_per_day = meals_per_day_hint
        .filter(|n| *n > 0)
        .unwrap_or_else(|| meals.len().div_ceil(total_days));

    let mut days: BTreeMap<usize, Vec<ScheduledMeal>> = BTreeMap::new();
    for (i, meal) in meals.iter().enumerate() {
        let day_index = i / meals_per_day;
        days.entry(day_index).or_default().push(ScheduledMeal {
            day_index,
            day_date: offset_date(start, day_index),
            meal: meal.clone(),
        });
    }

    debug!(
        meals = meals.len(),
        total_days, meals_per_day, "bucketed meal plan"
    );

    MealSchedule {
        start_date: start,
        total_days,
        meals_per_day,
        days,
    }
}

/// Bucket the meals of a plan
#[must_use]
pub fn schedule_plan(plan: &MealPlan) -> MealSchedule {
    bucket_meals(
        &plan.meals,
        plan.plan_date,
        plan.plan_end_date,
        plan.meals_per_day.map(|n| n as usize),
    )
}

fn offset_date(start: NaiveDate, days: usize) -> NaiveDate {
    i64::try_from(days)
        .ok()
        .and_then(|d| start.checked_add_signed(Duration::days(d)))
        .unwrap_or(NaiveDate::MAX)
}

impl MealSchedule {
    /// Meals bucketed into `day_index`
    #[must_use]
    pub fn meals_for_index(&self, day_index: usize) -> &[ScheduledMeal] {
        self.days.get(&day_index).map_or(&[], Vec::as_slice)
    }

    /// Meals bucketed into `date`; empty outside the plan
    #[must_use]
    pub fn meals_for_day(&self, date: NaiveDate) -> &[ScheduledMeal] {
        usize::try_from((date - self.start_date).num_days())
            .map_or(&[], |index| self.meals_for_index(index))
    }

    /// Nutrition totals of one day
    #[must_use]
    pub fn totals_for_index(&self, day_index: usize) -> DailyTotals {
        aggregate(self.meals_for_index(day_index).iter().map(|s| &s.meal))
    }

    /// Every calendar day of the plan, including days that received no meals
    ///
    /// Meals that overflow the plan range (an explicit `meals_per_day` smaller
    /// than the plan needs) are reported on extra trailing days rather than
    /// dropped.
    #[must_use]
    pub fn plan_days(&self) -> Vec<ScheduledDay<'_>> {
        let last_bucket = self.days.keys().next_back().map_or(0, |last| last + 1);
        (0..self.total_days.max(last_bucket))
            .map(|day_index| ScheduledDay {
                day_index,
                date: offset_date(self.start_date, day_index),
                meals: self.meals_for_index(day_index),
                totals: self.totals_for_index(day_index),
            })
            .collect()
    }

    /// Total number of scheduled meals
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn meals(n: usize) -> Vec<Meal> {
        (0..n)
            .map(|i| Meal {
                id: format!("meal-{i}"),
                meal_name: format!("Meal {i}"),
                meal_type: fittrack_core::models::MealType::Other,
                calories: 100.0,
                protein: 10.0,
                carbs: 12.0,
                fat: 3.0,
                prep_time: None,
                ingredients: Vec::new(),
                instructions: fittrack_core::models::Instructions::default(),
                image: None,
                source_url: None,
            })
            .collect()
    }

    #[test]
    fn test_days_between_inclusive() {
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 1, 7)), 7);
        assert_eq!(days_between_inclusive(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(days_between_inclusive(date(2024, 1, 7), date(2024, 1, 1)), 1);
    }

    #[test]
    fn test_uneven_count_fills_early_days_first() {
        let schedule = bucket_meals(&meals(10), date(2024, 1, 1), Some(date(2024, 1, 3)), None);
        assert_eq!(schedule.meals_per_day, 4);
        assert_eq!(schedule.meals_for_index(0).len(), 4);
        assert_eq!(schedule.meals_for_index(1).len(), 4);
        assert_eq!(schedule.meals_for_index(2).len(), 2);
    }

    #[test]
    fn test_short_plan_leaves_trailing_days_empty() {
        let schedule = bucket_meals(&meals(4), date(2024, 1, 1), Some(date(2024, 1, 7)), None);
        assert_eq!(schedule.meals_per_day, 1);
        let days = schedule.plan_days();
        assert_eq!(days.len(), 7);
        assert!(days[5].meals.is_empty());
        assert!(days[5].totals.is_zero());
        assert_eq!(days[6].date, date(2024, 1, 7));
    }

    #[test]
    fn test_meals_for_day_outside_plan() {
        let schedule = bucket_meals(&meals(3), date(2024, 1, 2), None, None);
        assert!(schedule.meals_for_day(date(2024, 1, 1)).is_empty());
        assert_eq!(schedule.meals_for_day(date(2024, 1, 2)).len(), 3);
        assert!(schedule.meals_for_day(date(2024, 1, 3)).is_empty());
    }

    #[test]
    fn test_hint_overflow_reported_on_extra_days() {
        let schedule = bucket_meals(&meals(5), date(2024, 1, 1), Some(date(2024, 1, 2)), Some(2));
        let days = schedule.plan_days();
        assert_eq!(days.len(), 3);
        assert_eq!(days[2].meals.len(), 1);
        assert_eq!(schedule.meal_count(), 5);
    }
}
