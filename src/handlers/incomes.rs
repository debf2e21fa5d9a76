// src/handlers/incomes.rs

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
    models::finance::{CreateTripIncomePayload, TripIncome, TripLedger, UpdateTripIncomePayload},
};

#[utoipa::path(
    get,
    path = "/api/trip-incomes",
    tag = "Trip incomes",
    responses((status = 200, description = "All trip incomes", body = Vec<TripIncome>))
)]
pub async fn list_trip_incomes(State(app_state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.income_service.list_incomes().await?))
}

#[utoipa::path(
    get,
    path = "/api/trip-incomes/trip/{trip_id}",
    tag = "Trip incomes",
    params(("trip_id" = Uuid, Path, description = "Trip id")),
    responses((status = 200, description = "Incomes of the trip", body = Vec<TripIncome>))
)]
pub async fn list_trip_incomes_by_trip(
    State(app_state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.income_service.list_incomes_by_trip(trip_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/trip-incomes/trip/{trip_id}/ledger",
    tag = "Trip incomes",
    params(("trip_id" = Uuid, Path, description = "Trip id")),
    responses((status = 200, description = "Incomes with paid and outstanding totals", body = TripLedger))
)]
pub async fn get_trip_ledger(
    State(app_state): State<AppState>,
    Path(trip_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(app_state.income_service.trip_ledger(trip_id).await?))
}

#[utoipa::path(
    post,
    path = "/api/trip-incomes",
    tag = "Trip incomes",
    request_body = CreateTripIncomePayload,
    responses(
        (status = 201, description = "Income recorded", body = TripIncome),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_trip_income(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTripIncomePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let income = app_state.income_service.create_income(payload).await?;
    Ok((StatusCode::CREATED, Json(income)))
}

/// Partial update. Moving to PAID stamps `paidDate`; leaving PAID clears it.
#[utoipa::path(
    put,
    path = "/api/trip-incomes/{id}",
    tag = "Trip incomes",
    params(("id" = Uuid, Path, description = "Income id")),
    request_body = UpdateTripIncomePayload,
    responses(
        (status = 200, description = "Income updated", body = TripIncome),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Unknown income")
    )
)]
pub async fn update_trip_income(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateTripIncomePayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let income = app_state.income_service.update_income(id, payload).await?;
    Ok(Json(income))
}

#[utoipa::path(
    delete,
    path = "/api/trip-incomes/{id}",
    tag = "Trip incomes",
    params(("id" = Uuid, Path, description = "Income id")),
    responses(
        (status = 204, description = "Income removed"),
        (status = 404, description = "Unknown income")
    )
)]
pub async fn delete_trip_income(
    State(app_state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    app_state.income_service.delete_income(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
