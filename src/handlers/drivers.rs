// src/handlers/drivers.rs

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::driver::{Driver, DriverPayload},
};

#[utoipa::path(
    get,
    path = "/api/drivers",
    tag = "Drivers",
    responses((status = 200, description = "All drivers", body = Vec<Driver>))
)]
pub async fn list_drivers(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.fleet_service.list_drivers().await?))
}

#[utoipa::path(
    get,
    path = "/api/drivers/{id}",
    tag = "Drivers",
    params(("id" = Uuid, Path, description = "Driver id")),
    responses(
        (status = 200, description = "The driver", body = Driver),
        (status = 404, description = "Unknown driver")
    )
)]
pub async fn get_driver(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.fleet_service.get_driver(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/drivers",
    tag = "Drivers",
    request_body = DriverPayload,
    responses(
        (status = 201, description = "Driver registered", body = Driver),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "License number already registered")
    )
)]
pub async fn create_driver(
    State(app_state): State<AppState>,
    Json(payload): Json<DriverPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let driver = app_state.fleet_service.create_driver(payload).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

#[utoipa::path(
    put,
    path = "/api/drivers/{id}",
    tag = "Drivers",
    params(("id" = Uuid, Path, description = "Driver id")),
    request_body = DriverPayload,
    responses(
        (status = 200, description = "Driver updated", body = Driver),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Unknown driver")
    )
)]
pub async fn update_driver(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<DriverPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let driver = app_state.fleet_service.update_driver(id, payload).await?;
    Ok(Json(driver))
}

#[utoipa::path(
    delete,
    path = "/api/drivers/{id}",
    tag = "Drivers",
    params(("id" = Uuid, Path, description = "Driver id")),
    responses(
        (status = 204, description = "Driver removed"),
        (status = 404, description = "Unknown driver")
    )
)]
pub async fn delete_driver(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.fleet_service.delete_driver(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
