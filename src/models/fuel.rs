// src/models/fuel.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::{validate_not_negative, validate_positive};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    pub id: Uuid,

    // Fuel is attributed to the truck directly, not through a trip
    pub truck_id: Uuid,
    pub trip_id: Option<Uuid>,

    // Litres
    #[schema(example = "320.5")]
    pub amount: Decimal,

    #[schema(example = "640.00")]
    pub cost: Decimal,

    pub date: DateTime<Utc>,

    #[schema(example = "Station 42")]
    pub station: String,

    #[schema(example = "120950.0")]
    pub odometer_reading: Decimal,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecordPayload {
    pub truck_id: Uuid,
    pub trip_id: Option<Uuid>,

    #[validate(custom(function = "validate_positive"))]
    pub amount: Decimal,

    #[validate(custom(function = "validate_not_negative"))]
    pub cost: Decimal,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub station: String,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub odometer_reading: Decimal,
}
