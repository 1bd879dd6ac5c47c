// ABOUTME: Core data models shared by the FitTrack crates
// ABOUTME: Meals, meal plans, nutrition log entries, profiles, and workout sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Typed records for data fetched from the external FitTrack backend.
//!
//! Every record is validated once where it enters the system; downstream
//! calculations assume validated inputs.

/// Meal plans and shopping lists
pub mod meal_plan;
/// Meals and logged food entries
pub mod nutrition;
/// Body-metric profile
pub mod profile;
/// Workout session timer
pub mod workout;

pub use meal_plan::{MealPlan, ShoppingList, ShoppingListItem};
pub use nutrition::{Instructions, Meal, MealType, NutritionLogEntry};
pub use profile::{ActivityLevel, Gender, ProfileInput, UserProfile};
pub use workout::{SessionState, WorkoutSession};
