// ABOUTME: Meal plan route handlers for day-by-day scheduling
// ABOUTME: Buckets a generated plan's meals into calendar days with per-day totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::json_body;
use axum::{extract::rejection::JsonRejection, routing::post, Json, Router};
use fittrack_core::errors::AppResult;
use fittrack_core::models::MealPlan;
use fittrack_intelligence::aggregation::DailyTotals;
use fittrack_intelligence::meal_schedule::{schedule_plan, ScheduledDay};
use serde::Serialize;
use tracing::info;

/// A plan laid out by calendar day
#[derive(Debug, Serialize)]
pub struct ScheduleResponse<'a> {
    /// Plan identifier
    pub plan_id: &'a str,
    /// Calendar days covered by the plan
    pub total_days: usize,
    /// Meals assigned per day
    pub meals_per_day: usize,
    /// Every day with its meals and totals
    pub days: Vec<ScheduledDay<'a>>,
    /// Sum over the whole plan
    pub plan_totals: DailyTotals,
}

/// Meal plan routes
pub struct MealPlanRoutes;

impl MealPlanRoutes {
    /// Create all meal plan routes
    pub fn routes() -> Router {
        Router::new().route("/meal-plans/schedule", post(Self::handle_schedule))
    }

    async fn handle_schedule(
        payload: Result<Json<MealPlan>, JsonRejection>,
    ) -> AppResult<Json<serde_json::Value>> {
        let plan = json_body(payload)?;
        plan.validate()?;

        let schedule = schedule_plan(&plan);
        let days = schedule.plan_days();
        let plan_totals: DailyTotals = days.iter().map(|day| day.totals).sum();

        info!(
            plan_id = %plan.id,
            total_days = schedule.total_days,
            meals_per_day = schedule.meals_per_day,
            "scheduled meal plan"
        );

        let response = ScheduleResponse {
            plan_id: &plan.id,
            total_days: schedule.total_days,
            meals_per_day: schedule.meals_per_day,
            days,
            plan_totals,
        };
        Ok(Json(serde_json::to_value(&response)?))
    }
}
