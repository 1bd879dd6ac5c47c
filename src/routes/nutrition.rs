// ABOUTME: Nutrition route handlers for body targets, daily totals, and progress
// ABOUTME: Validates JSON payloads at the boundary and delegates to the intelligence crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition routes
//!
//! Stateless endpoints that turn already-fetched profile and log data into
//! computed figures for the dashboard.

use super::json_body;
use crate::resources::ServerResources;
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use chrono::NaiveDate;
use fittrack_core::errors::{AppError, AppResult};
use fittrack_core::models::{MealType, NutritionLogEntry, ProfileInput};
use fittrack_intelligence::aggregation::{aggregate, totals_by_meal_type, DailyTotals};
use fittrack_intelligence::nutrition_calculator::{targets_for_input, BodyTargets};
use fittrack_intelligence::progress::NutritionProgress;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::info;

/// Log entries to total, optionally restricted to one day
#[derive(Debug, Deserialize)]
pub struct DailyTotalsRequest {
    /// Logged food entries
    #[serde(default)]
    pub entries: Vec<NutritionLogEntry>,
    /// Only count entries on this date
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Totals for the requested entries
#[derive(Debug, Serialize, Deserialize)]
pub struct DailyTotalsResponse {
    /// Date filter that was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Number of entries counted
    pub entry_count: usize,
    /// Sum over the counted entries
    pub totals: DailyTotals,
    /// Sum per meal slot
    pub by_meal_type: BTreeMap<MealType, DailyTotals>,
}

/// Actual intake compared with the targets of a profile
#[derive(Debug, Deserialize)]
pub struct ProgressRequest {
    /// What was eaten
    pub actual: DailyTotals,
    /// Profile whose targets apply; missing fields use defaults
    #[serde(default)]
    pub profile: ProfileInput,
}

/// Nutrition routes
pub struct NutritionRoutes;

impl NutritionRoutes {
    /// Create all nutrition routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/nutrition/targets", post(Self::handle_targets))
            .route("/nutrition/daily-totals", post(Self::handle_daily_totals))
            .route("/nutrition/progress", post(Self::handle_progress))
            .with_state(resources)
    }

    async fn handle_targets(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ProfileInput>, JsonRejection>,
    ) -> AppResult<Json<BodyTargets>> {
        let input = json_body(payload)?;
        input.validate()?;

        let targets = targets_for_input(&input, resources.nutrition());
        info!(
            bmr = targets.bmr,
            tdee = targets.tdee,
            "computed nutrition targets"
        );
        Ok(Json(targets))
    }

    async fn handle_daily_totals(
        payload: Result<Json<DailyTotalsRequest>, JsonRejection>,
    ) -> AppResult<Json<DailyTotalsResponse>> {
        let request = json_body(payload)?;
        for entry in &request.entries {
            entry.validate()?;
        }

        let counted: Vec<&NutritionLogEntry> = request
            .entries
            .iter()
            .filter(|entry| request.date.is_none() || request.date == Some(entry.date))
            .collect();

        Ok(Json(DailyTotalsResponse {
            date: request.date,
            entry_count: counted.len(),
            totals: aggregate(counted.iter().copied()),
            by_meal_type: totals_by_meal_type(counted.iter().copied()),
        }))
    }

    async fn handle_progress(
        State(resources): State<Arc<ServerResources>>,
        payload: Result<Json<ProgressRequest>, JsonRejection>,
    ) -> AppResult<Json<NutritionProgress>> {
        let request = json_body(payload)?;
        request.profile.validate()?;
        validate_totals(&request.actual)?;

        let targets = targets_for_input(&request.profile, resources.nutrition());
        Ok(Json(NutritionProgress::project(
            &request.actual,
            &targets.macros,
        )))
    }
}

fn validate_totals(totals: &DailyTotals) -> AppResult<()> {
    for (field, value) in [
        ("calories", totals.calories),
        ("protein", totals.protein),
        ("carbs", totals.carbs),
        ("fat", totals.fat),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::out_of_range(
                field,
                format!("{field} must be a non-negative number, got {value}"),
            ));
        }
    }
    Ok(())
}
