// src/db/store.rs

use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    analytics::FleetSnapshot,
    common::error::AppError,
    models::{
        driver::Driver,
        finance::{TripExpense, TripIncome},
        fuel::FuelRecord,
        maintenance::MaintenanceRecord,
        trip::Trip,
        truck::Truck,
    },
};

/// Data source behind the services.
///
/// Stores are dumb persistence: ids, timestamps, defaults and status rules are
/// decided by the services before a record reaches `create_*`/`update_*`.
/// `update_*` returns `None` and `delete_*` returns `false` when the id is unknown.
#[async_trait]
pub trait FleetStore: Send + Sync {
    // --- Trucks ---
    async fn list_trucks(&self) -> Result<Vec<Truck>, AppError>;
    async fn get_truck(&self, id: Uuid) -> Result<Option<Truck>, AppError>;
    async fn create_truck(&self, truck: &Truck) -> Result<Truck, AppError>;
    async fn update_truck(&self, truck: &Truck) -> Result<Option<Truck>, AppError>;
    async fn delete_truck(&self, id: Uuid) -> Result<bool, AppError>;

    // --- Drivers ---
    async fn list_drivers(&self) -> Result<Vec<Driver>, AppError>;
    async fn get_driver(&self, id: Uuid) -> Result<Option<Driver>, AppError>;
    async fn create_driver(&self, driver: &Driver) -> Result<Driver, AppError>;
    async fn update_driver(&self, driver: &Driver) -> Result<Option<Driver>, AppError>;
    async fn delete_driver(&self, id: Uuid) -> Result<bool, AppError>;

    // --- Trips ---
    async fn list_trips(&self) -> Result<Vec<Trip>, AppError>;
    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, AppError>;
    async fn create_trip(&self, trip: &Trip) -> Result<Trip, AppError>;
    async fn update_trip(&self, trip: &Trip) -> Result<Option<Trip>, AppError>;
    async fn delete_trip(&self, id: Uuid) -> Result<bool, AppError>;

    // --- Fuel ---
    async fn list_fuel_records(&self) -> Result<Vec<FuelRecord>, AppError>;
    async fn create_fuel_record(&self, record: &FuelRecord) -> Result<FuelRecord, AppError>;
    async fn update_fuel_record(&self, record: &FuelRecord) -> Result<Option<FuelRecord>, AppError>;
    async fn delete_fuel_record(&self, id: Uuid) -> Result<bool, AppError>;

    // --- Maintenance ---
    async fn list_maintenance_records(&self) -> Result<Vec<MaintenanceRecord>, AppError>;
    async fn create_maintenance_record(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<MaintenanceRecord, AppError>;
    async fn update_maintenance_record(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<Option<MaintenanceRecord>, AppError>;
    async fn delete_maintenance_record(&self, id: Uuid) -> Result<bool, AppError>;

    // --- Trip expenses ---
    async fn list_trip_expenses(&self) -> Result<Vec<TripExpense>, AppError>;
    async fn list_trip_expenses_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripExpense>, AppError>;
    async fn create_trip_expense(&self, expense: &TripExpense) -> Result<TripExpense, AppError>;
    async fn update_trip_expense(&self, expense: &TripExpense) -> Result<Option<TripExpense>, AppError>;
    async fn delete_trip_expense(&self, id: Uuid) -> Result<bool, AppError>;

    // --- Trip incomes ---
    async fn list_trip_incomes(&self) -> Result<Vec<TripIncome>, AppError>;
    async fn list_trip_incomes_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripIncome>, AppError>;
    async fn get_trip_income(&self, id: Uuid) -> Result<Option<TripIncome>, AppError>;
    async fn create_trip_income(&self, income: &TripIncome) -> Result<TripIncome, AppError>;
    async fn update_trip_income(&self, income: &TripIncome) -> Result<Option<TripIncome>, AppError>;
    async fn delete_trip_income(&self, id: Uuid) -> Result<bool, AppError>;

    /// Every collection the aggregation engine needs, fetched concurrently.
    async fn snapshot(&self) -> Result<FleetSnapshot, AppError> {
        let (trucks, drivers, trips, incomes, expenses, fuel_records, maintenance_records) = tokio::try_join!(
            self.list_trucks(),
            self.list_drivers(),
            self.list_trips(),
            self.list_trip_incomes(),
            self.list_trip_expenses(),
            self.list_fuel_records(),
            self.list_maintenance_records(),
        )?;

        Ok(FleetSnapshot {
            trucks,
            drivers,
            trips,
            incomes,
            expenses,
            fuel_records,
            maintenance_records,
        })
    }
}
