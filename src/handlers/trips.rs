// src/handlers/trips.rs

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::{error::AppError, serde_helpers::any_case},
    config::AppState,
    models::trip::{Trip, TripPayload, TripStatus},
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TripStatusQuery {
    /// New status, e.g. `COMPLETED` (any case)
    #[serde(deserialize_with = "any_case")]
    pub status: TripStatus,
}

#[utoipa::path(
    get,
    path = "/api/trips",
    tag = "Trips",
    responses((status = 200, description = "All trips", body = Vec<Trip>))
)]
pub async fn list_trips(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.fleet_service.list_trips().await?))
}

#[utoipa::path(
    get,
    path = "/api/trips/{id}",
    tag = "Trips",
    params(("id" = Uuid, Path, description = "Trip id")),
    responses(
        (status = 200, description = "The trip", body = Trip),
        (status = 404, description = "Unknown trip")
    )
)]
pub async fn get_trip(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.fleet_service.get_trip(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/trips",
    tag = "Trips",
    request_body = TripPayload,
    responses(
        (status = 201, description = "Trip scheduled", body = Trip),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_trip(
    State(app_state): State<AppState>,
    Json(payload): Json<TripPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let trip = app_state.fleet_service.create_trip(payload).await?;
    Ok((StatusCode::CREATED, Json(trip)))
}

#[utoipa::path(
    put,
    path = "/api/trips/{id}",
    tag = "Trips",
    params(("id" = Uuid, Path, description = "Trip id")),
    request_body = TripPayload,
    responses(
        (status = 200, description = "Trip updated", body = Trip),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Unknown trip")
    )
)]
pub async fn update_trip(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TripPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let trip = app_state.fleet_service.update_trip(id, payload).await?;
    Ok(Json(trip))
}

#[utoipa::path(
    patch,
    path = "/api/trips/{id}/status",
    tag = "Trips",
    params(("id" = Uuid, Path, description = "Trip id"), TripStatusQuery),
    responses(
        (status = 200, description = "Status changed", body = Trip),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Unknown trip")
    )
)]
pub async fn update_trip_status(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<TripStatusQuery>,
) -> Result<impl IntoResponse, AppError> {
    let trip = app_state.fleet_service.set_trip_status(id, query.status).await?;
    Ok(Json(trip))
}

#[utoipa::path(
    delete,
    path = "/api/trips/{id}",
    tag = "Trips",
    params(("id" = Uuid, Path, description = "Trip id")),
    responses(
        (status = 204, description = "Trip removed"),
        (status = 404, description = "Unknown trip")
    )
)]
pub async fn delete_trip(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.fleet_service.delete_trip(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
