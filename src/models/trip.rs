// src/models/trip.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_not_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "trip_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: Uuid,

    #[schema(example = "Riyadh")]
    pub origin: String,

    #[schema(example = "Jeddah")]
    pub destination: String,

    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,

    pub driver_id: Uuid,
    pub truck_id: Uuid,

    pub status: TripStatus,

    // Kilometres
    #[schema(example = "950.0")]
    pub distance: Decimal,

    #[schema(example = "Acme Logistics")]
    pub client_name: String,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripPayload {
    #[validate(length(min = 1, message = "Origin is required."))]
    pub origin: String,

    #[validate(length(min = 1, message = "Destination is required."))]
    pub destination: String,

    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,

    pub driver_id: Uuid,
    pub truck_id: Uuid,

    // Defaults to SCHEDULED on create
    pub status: Option<TripStatus>,

    #[validate(custom(function = "validate_not_negative"))]
    #[serde(default)]
    pub distance: Decimal,

    #[serde(default)]
    pub client_name: String,
}
