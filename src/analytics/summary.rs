// src/analytics/summary.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{margin_percent, FleetSnapshot};
use crate::models::{
    dashboard::{DashboardStats, FleetStatusBreakdown, RecentTripRow},
    driver::DriverStatus,
    finance::PaymentStatus,
    reports::ReportOverview,
    trip::TripStatus,
    truck::{Truck, TruckStatus},
};

pub(crate) fn total_revenue(snapshot: &FleetSnapshot) -> Decimal {
    snapshot.incomes.iter().map(|i| i.amount).sum()
}

// Global sums, no join: records pointing at unknown trucks/trips still count.
pub(crate) fn total_expenses(snapshot: &FleetSnapshot) -> Decimal {
    let fuel: Decimal = snapshot.fuel_records.iter().map(|f| f.cost).sum();
    let maintenance: Decimal = snapshot.maintenance_records.iter().map(|m| m.cost).sum();
    let trip_expenses: Decimal = snapshot.expenses.iter().map(|e| e.amount).sum();
    fuel + maintenance + trip_expenses
}

pub fn compute_dashboard_stats(snapshot: &FleetSnapshot) -> DashboardStats {
    let total_revenue = total_revenue(snapshot);
    let total_expenses = total_expenses(snapshot);

    let active_trips = snapshot
        .trips
        .iter()
        .filter(|t| t.status == TripStatus::InProgress)
        .count() as u64;

    let active_trucks = snapshot
        .trucks
        .iter()
        .filter(|t| t.status == TruckStatus::Active)
        .count() as u64;

    let available_drivers = snapshot
        .drivers
        .iter()
        .filter(|d| d.status == DriverStatus::Available)
        .count() as u64;

    let pending_payments = snapshot
        .incomes
        .iter()
        .filter(|i| i.payment_status == PaymentStatus::Pending)
        .map(|i| i.amount)
        .sum();

    DashboardStats {
        total_revenue,
        total_expenses,
        net_profit: total_revenue - total_expenses,
        active_trips,
        active_trucks,
        available_drivers,
        pending_payments,
    }
}

pub fn compute_fleet_status(trucks: &[Truck]) -> FleetStatusBreakdown {
    trucks.iter().fold(FleetStatusBreakdown::default(), |mut acc, truck| {
        match truck.status {
            TruckStatus::Active => acc.active += 1,
            TruckStatus::Maintenance => acc.maintenance += 1,
            TruckStatus::Inactive => acc.inactive += 1,
        }
        acc.total += 1;
        acc
    })
}

pub fn compute_report_overview(snapshot: &FleetSnapshot) -> ReportOverview {
    let total_revenue = total_revenue(snapshot);
    let total_expenses = total_expenses(snapshot);
    let total_profit = total_revenue - total_expenses;

    ReportOverview {
        total_revenue,
        total_expenses,
        total_profit,
        profit_margin: margin_percent(total_profit, total_revenue),
    }
}

/// The `limit` newest trips (by start date, then creation time), with driver
/// name and truck plate looked up by id. Unknown references stay `None`.
pub fn recent_trips(snapshot: &FleetSnapshot, limit: usize) -> Vec<RecentTripRow> {
    let drivers: HashMap<Uuid, String> = snapshot
        .drivers
        .iter()
        .map(|d| (d.id, d.full_name()))
        .collect();
    let plates: HashMap<Uuid, &str> = snapshot
        .trucks
        .iter()
        .map(|t| (t.id, t.plate_number.as_str()))
        .collect();

    let mut trips: Vec<_> = snapshot.trips.iter().collect();
    trips.sort_by(|a, b| {
        b.start_date
            .cmp(&a.start_date)
            .then_with(|| b.created_at.cmp(&a.created_at))
    });

    trips
        .into_iter()
        .take(limit)
        .map(|trip| RecentTripRow {
            id: trip.id,
            origin: trip.origin.clone(),
            destination: trip.destination.clone(),
            client_name: trip.client_name.clone(),
            status: trip.status,
            start_date: trip.start_date,
            driver_name: drivers.get(&trip.driver_id).cloned(),
            truck_plate: plates.get(&trip.truck_id).map(|p| p.to_string()),
        })
        .collect()
}
