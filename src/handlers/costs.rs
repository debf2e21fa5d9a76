// src/handlers/costs.rs

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
    models::{
        finance::{TripExpense, TripExpensePayload},
        fuel::{FuelRecord, FuelRecordPayload},
        maintenance::{MaintenanceRecord, MaintenanceRecordPayload},
    },
};

// =========================================================================
//  FUEL
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/fuel-records",
    tag = "Fuel",
    responses((status = 200, description = "All fuel records", body = Vec<FuelRecord>))
)]
pub async fn list_fuel_records(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.cost_service.list_fuel_records().await?))
}

#[utoipa::path(
    post,
    path = "/api/fuel-records",
    tag = "Fuel",
    request_body = FuelRecordPayload,
    responses(
        (status = 201, description = "Fuel record added", body = FuelRecord),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_fuel_record(
    State(app_state): State<AppState>,
    Json(payload): Json<FuelRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = app_state.cost_service.create_fuel_record(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/api/fuel-records/{id}",
    tag = "Fuel",
    params(("id" = Uuid, Path, description = "Fuel record id")),
    request_body = FuelRecordPayload,
    responses(
        (status = 200, description = "Fuel record updated", body = FuelRecord),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Unknown fuel record")
    )
)]
pub async fn update_fuel_record(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<FuelRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let updated = app_state.cost_service.update_fuel_record(id, payload).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/fuel-records/{id}",
    tag = "Fuel",
    params(("id" = Uuid, Path, description = "Fuel record id")),
    responses(
        (status = 204, description = "Fuel record removed"),
        (status = 404, description = "Unknown fuel record")
    )
)]
pub async fn delete_fuel_record(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cost_service.delete_fuel_record(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
//  MAINTENANCE
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/maintenance-records",
    tag = "Maintenance",
    responses((status = 200, description = "All maintenance records", body = Vec<MaintenanceRecord>))
)]
pub async fn list_maintenance_records(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.cost_service.list_maintenance_records().await?))
}

#[utoipa::path(
    post,
    path = "/api/maintenance-records",
    tag = "Maintenance",
    request_body = MaintenanceRecordPayload,
    responses(
        (status = 201, description = "Maintenance logged", body = MaintenanceRecord),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_maintenance_record(
    State(app_state): State<AppState>,
    Json(payload): Json<MaintenanceRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let record = app_state.cost_service.create_maintenance_record(payload).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

#[utoipa::path(
    put,
    path = "/api/maintenance-records/{id}",
    tag = "Maintenance",
    params(("id" = Uuid, Path, description = "Maintenance record id")),
    request_body = MaintenanceRecordPayload,
    responses(
        (status = 200, description = "Maintenance record updated", body = MaintenanceRecord),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Unknown maintenance record")
    )
)]
pub async fn update_maintenance_record(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<MaintenanceRecordPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let updated = app_state.cost_service.update_maintenance_record(id, payload).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/maintenance-records/{id}",
    tag = "Maintenance",
    params(("id" = Uuid, Path, description = "Maintenance record id")),
    responses(
        (status = 204, description = "Maintenance record removed"),
        (status = 404, description = "Unknown maintenance record")
    )
)]
pub async fn delete_maintenance_record(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cost_service.delete_maintenance_record(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// =========================================================================
//  TRIP EXPENSES
// =========================================================================

#[utoipa::path(
    get,
    path = "/api/trip-expenses",
    tag = "Trip expenses",
    responses((status = 200, description = "All trip expenses", body = Vec<TripExpense>))
)]
pub async fn list_trip_expenses(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.cost_service.list_trip_expenses().await?))
}

#[utoipa::path(
    get,
    path = "/api/trip-expenses/trip/{trip_id}",
    tag = "Trip expenses",
    params(("trip_id" = Uuid, Path, description = "Trip id")),
    responses((status = 200, description = "Expenses of the trip", body = Vec<TripExpense>))
)]
pub async fn list_trip_expenses_by_trip(
    State(app_state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.cost_service.list_trip_expenses_by_trip(trip_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/trip-expenses",
    tag = "Trip expenses",
    request_body = TripExpensePayload,
    responses(
        (status = 201, description = "Expense added", body = TripExpense),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_trip_expense(
    State(app_state): State<AppState>,
    Json(payload): Json<TripExpensePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let expense = app_state.cost_service.create_trip_expense(payload).await?;
    Ok((StatusCode::CREATED, Json(expense)))
}

#[utoipa::path(
    put,
    path = "/api/trip-expenses/{id}",
    tag = "Trip expenses",
    params(("id" = Uuid, Path, description = "Expense id")),
    request_body = TripExpensePayload,
    responses(
        (status = 200, description = "Expense updated", body = TripExpense),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Unknown expense")
    )
)]
pub async fn update_trip_expense(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TripExpensePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let updated = app_state.cost_service.update_trip_expense(id, payload).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete,
    path = "/api/trip-expenses/{id}",
    tag = "Trip expenses",
    params(("id" = Uuid, Path, description = "Expense id")),
    responses(
        (status = 204, description = "Expense removed"),
        (status = 404, description = "Unknown expense")
    )
)]
pub async fn delete_trip_expense(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.cost_service.delete_trip_expense(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
