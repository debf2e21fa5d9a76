// src/models/truck.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_not_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "truck_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruckStatus {
    Active,
    Maintenance,
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Truck {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,

    #[schema(example = "ABC-1234")]
    pub plate_number: String,

    #[schema(example = "Volvo FH16")]
    pub model: String,

    pub status: TruckStatus,

    // Payload capacity in tonnes
    #[schema(example = "25.0")]
    pub capacity: Decimal,

    #[sqlx(rename = "model_year")]
    #[schema(example = 2021)]
    pub year: i32,

    #[schema(example = "120500.0")]
    pub mileage: Decimal,

    pub created_at: DateTime<Utc>,
}

// Body of POST /api/trucks and PUT /api/trucks/{id}
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TruckPayload {
    #[validate(length(min = 1, message = "Plate number is required."))]
    #[schema(example = "ABC-1234")]
    pub plate_number: String,

    #[validate(length(min = 1, message = "Model is required."))]
    #[schema(example = "Volvo FH16")]
    pub model: String,

    // Defaults to ACTIVE on create, keeps the current status on update
    pub status: Option<TruckStatus>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub capacity: Decimal,

    #[validate(range(min = 1900, max = 2100, message = "Year out of range."))]
    #[schema(example = 2021)]
    pub year: i32,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub mileage: Decimal,
}
