// src/models/driver.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "driver_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DriverStatus {
    Available,
    OnTrip,
    OffDuty,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: Uuid,

    #[schema(example = "Omar")]
    pub first_name: String,

    #[schema(example = "Haddad")]
    pub last_name: String,

    #[schema(example = "DL-778812")]
    pub license_number: String,

    #[schema(value_type = String, format = Date, example = "2027-06-30")]
    pub license_expiry: NaiveDate,

    pub phone: Option<String>,
    pub email: Option<String>,

    // Weak reference, the truck may no longer exist
    pub assigned_truck_id: Option<Uuid>,

    pub status: DriverStatus,

    pub created_at: DateTime<Utc>,
}

impl Driver {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DriverPayload {
    #[validate(length(min = 1, message = "First name is required."))]
    pub first_name: String,

    #[validate(length(min = 1, message = "Last name is required."))]
    pub last_name: String,

    #[validate(length(min = 1, message = "License number is required."))]
    pub license_number: String,

    #[schema(value_type = String, format = Date, example = "2027-06-30")]
    pub license_expiry: NaiveDate,

    pub phone: Option<String>,

    #[validate(email(message = "Invalid e-mail address."))]
    pub email: Option<String>,

    pub assigned_truck_id: Option<Uuid>,

    pub status: Option<DriverStatus>,
}
