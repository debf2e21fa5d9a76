// src/services/dashboard_service.rs

use std::sync::Arc;

use crate::{
    analytics::{compute_dashboard_stats, compute_fleet_status, recent_trips},
    common::error::AppError,
    db::FleetStore,
    models::dashboard::{DashboardStats, FleetStatusBreakdown, RecentTripRow},
};

pub const DEFAULT_RECENT_TRIPS: usize = 5;
const MAX_RECENT_TRIPS: usize = 100;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn FleetStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn get_stats(&self) -> Result<DashboardStats, AppError> {
        let snapshot = self.store.snapshot().await?;
        Ok(compute_dashboard_stats(&snapshot))
    }

    pub async fn get_fleet_status(&self) -> Result<FleetStatusBreakdown, AppError> {
        let trucks = self.store.list_trucks().await?;
        Ok(compute_fleet_status(&trucks))
    }

    pub async fn get_recent_trips(&self, limit: Option<usize>) -> Result<Vec<RecentTripRow>, AppError> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_TRIPS).min(MAX_RECENT_TRIPS);
        let snapshot = self.store.snapshot().await?;
        Ok(recent_trips(&snapshot, limit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{fixtures::*, FleetSnapshot};
    use crate::db::InMemoryFleetStore;
    use crate::models::{
        driver::DriverStatus, finance::PaymentStatus, trip::TripStatus, truck::TruckStatus,
    };
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn stats_reflect_the_store() {
        let t1 = truck("T1", TruckStatus::Active);
        let d1 = driver("Ali", DriverStatus::Available);
        let r1 = trip(t1.id, d1.id, TripStatus::InProgress, at(2024, 3, 1));
        let snapshot = FleetSnapshot {
            incomes: vec![income(r1.id, dec!(1000), PaymentStatus::Pending, day(2024, 3, 20))],
            expenses: vec![expense(r1.id, dec!(200), at(2024, 3, 5))],
            trucks: vec![t1],
            drivers: vec![d1],
            trips: vec![r1],
            ..FleetSnapshot::default()
        };
        let svc = DashboardService::new(Arc::new(InMemoryFleetStore::with_snapshot(snapshot)));

        let stats = svc.get_stats().await.unwrap();
        assert_eq!(stats.net_profit, dec!(800));
        assert_eq!(stats.pending_payments, dec!(1000));
        assert_eq!(stats.active_trips, 1);
    }

    #[tokio::test]
    async fn recent_trips_defaults_to_five() {
        let truck_id = uuid::Uuid::new_v4();
        let trips = (1..=8)
            .map(|d| trip(truck_id, uuid::Uuid::new_v4(), TripStatus::Scheduled, at(2024, 1, d)))
            .collect();
        let snapshot = FleetSnapshot { trips, ..FleetSnapshot::default() };
        let svc = DashboardService::new(Arc::new(InMemoryFleetStore::with_snapshot(snapshot)));

        let rows = svc.get_recent_trips(None).await.unwrap();
        assert_eq!(rows.len(), DEFAULT_RECENT_TRIPS);
        assert_eq!(rows[0].start_date, at(2024, 1, 8));

        assert_eq!(svc.get_recent_trips(Some(2)).await.unwrap().len(), 2);
    }
}
