// ABOUTME: Route module organization for the FitTrack HTTP API
// ABOUTME: Assembles health, nutrition, and meal plan routes into one router
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! HTTP routes
//!
//! Each domain module holds route definitions and thin handlers that validate
//! the payload and delegate to `fittrack-intelligence`.

/// Health check and readiness routes
pub mod health;
/// Meal plan scheduling routes
pub mod meal_plans;
/// Nutrition target, totals, and progress routes
pub mod nutrition;

pub use health::HealthRoutes;
pub use meal_plans::MealPlanRoutes;
pub use nutrition::NutritionRoutes;

use crate::resources::ServerResources;
use axum::{extract::rejection::JsonRejection, Json, Router};
use fittrack_core::constants::endpoints;
use fittrack_core::errors::{AppError, AppResult};
use std::sync::Arc;

/// Full application router without middleware
pub fn router(resources: Arc<ServerResources>) -> Router {
    let api = Router::new()
        .merge(NutritionRoutes::routes(resources))
        .merge(MealPlanRoutes::routes());

    Router::new()
        .merge(HealthRoutes::routes())
        .nest(endpoints::API_BASE, api)
}

/// Unwrap a JSON body, reporting malformed payloads in the standard error envelope
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| AppError::invalid_input(rejection.body_text()))
}
