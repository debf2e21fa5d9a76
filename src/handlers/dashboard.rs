// src/handlers/dashboard.rs

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use utoipa::IntoParams;

use crate::{
    common::error::AppError,
    config::AppState,
    models::dashboard::{DashboardStats, FleetStatusBreakdown, RecentTripRow},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecentTripsQuery {
    /// How many trips to return (default 5)
    pub limit: Option<usize>,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Service is up"))
)]
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

// GET /api/dashboard/stats
#[utoipa::path(
    get,
    path = "/api/dashboard/stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Fleet-wide totals and counters", body = DashboardStats)
    )
)]
pub async fn get_stats(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.dashboard_service.get_stats().await?;
    Ok(Json(stats))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/fleet-status",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Trucks counted by status", body = FleetStatusBreakdown)
    )
)]
pub async fn get_fleet_status(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let breakdown = app_state.dashboard_service.get_fleet_status().await?;
    Ok(Json(breakdown))
}

#[utoipa::path(
    get,
    path = "/api/dashboard/recent-trips",
    tag = "Dashboard",
    params(RecentTripsQuery),
    responses(
        (status = 200, description = "Newest trips with driver and truck", body = Vec<RecentTripRow>)
    )
)]
pub async fn get_recent_trips(
    State(app_state): State<AppState>,
    Query(query): Query<RecentTripsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let rows = app_state.dashboard_service.get_recent_trips(query.limit).await?;
    Ok(Json(rows))
}
