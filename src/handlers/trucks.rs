// src/handlers/trucks.rs

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
    models::truck::{Truck, TruckPayload},
};

#[utoipa::path(
    get,
    path = "/api/trucks",
    tag = "Trucks",
    responses(
        (status = 200, description = "All trucks", body = Vec<Truck>)
    )
)]
pub async fn list_trucks(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let trucks = app_state.fleet_service.list_trucks().await?;
    Ok(Json(trucks))
}

#[utoipa::path(
    get,
    path = "/api/trucks/{id}",
    tag = "Trucks",
    params(("id" = Uuid, Path, description = "Truck id")),
    responses(
        (status = 200, description = "The truck", body = Truck),
        (status = 404, description = "Unknown truck")
    )
)]
pub async fn get_truck(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    let truck = app_state.fleet_service.get_truck(id).await?;
    Ok(Json(truck))
}

#[utoipa::path(
    post,
    path = "/api/trucks",
    tag = "Trucks",
    request_body = TruckPayload,
    responses(
        (status = 201, description = "Truck registered", body = Truck),
        (status = 400, description = "Invalid payload"),
        (status = 409, description = "Plate number already registered")
    )
)]
pub async fn create_truck(
    State(app_state): State<AppState>,
    Json(payload): Json<TruckPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let truck = app_state.fleet_service.create_truck(payload).await?;
    Ok((StatusCode::CREATED, Json(truck)))
}

#[utoipa::path(
    put,
    path = "/api/trucks/{id}",
    tag = "Trucks",
    params(("id" = Uuid, Path, description = "Truck id")),
    request_body = TruckPayload,
    responses(
        (status = 200, description = "Truck updated", body = Truck),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Unknown truck")
    )
)]
pub async fn update_truck(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TruckPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let truck = app_state.fleet_service.update_truck(id, payload).await?;
    Ok(Json(truck))
}

#[utoipa::path(
    delete,
    path = "/api/trucks/{id}",
    tag = "Trucks",
    params(("id" = Uuid, Path, description = "Truck id")),
    responses(
        (status = 204, description = "Truck removed"),
        (status = 404, description = "Unknown truck")
    )
)]
pub async fn delete_truck(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.fleet_service.delete_truck(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
