// src/models/dashboard.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::trip::TripStatus;

// 1. Landing view cards
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_revenue: Decimal,
    pub total_expenses: Decimal, // fuel + maintenance + trip expenses
    pub net_profit: Decimal,
    pub active_trips: u64,
    pub active_trucks: u64,
    pub available_drivers: u64,
    pub pending_payments: Decimal, // PENDING incomes only
}

// 2. Fleet status widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FleetStatusBreakdown {
    pub active: u64,
    pub maintenance: u64,
    pub inactive: u64,
    pub total: u64,
}

// 3. Recent trips table, driver and truck resolved through weak references
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecentTripRow {
    pub id: Uuid,
    pub origin: String,
    pub destination: String,
    pub client_name: String,
    pub status: TripStatus,
    pub start_date: DateTime<Utc>,
    pub driver_name: Option<String>,
    pub truck_plate: Option<String>,
}
