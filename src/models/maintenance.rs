// src/models/maintenance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::validation::validate_not_negative;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "maintenance_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MaintenanceType {
    Routine,
    Repair,
    Inspection,
    Emergency,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecord {
    pub id: Uuid,
    pub truck_id: Uuid,

    #[serde(rename = "type")]
    #[sqlx(rename = "maintenance_type")]
    pub kind: MaintenanceType,

    #[schema(example = "1200.00")]
    pub cost: Decimal,

    pub date: DateTime<Utc>,

    #[schema(example = "Brake pads replaced")]
    pub description: String,

    #[schema(example = "Central Garage")]
    pub vendor: String,

    #[schema(value_type = Option<String>, format = Date, example = "2025-01-15")]
    pub next_due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRecordPayload {
    pub truck_id: Uuid,

    #[serde(rename = "type")]
    pub kind: MaintenanceType,

    #[validate(custom(function = "validate_not_negative"))]
    pub cost: Decimal,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub vendor: String,

    #[schema(value_type = Option<String>, format = Date)]
    pub next_due_date: Option<NaiveDate>,
}
