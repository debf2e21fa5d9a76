// src/db/pg_store.rs

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{
        cost_repo::CostRepository, driver_repo::DriverRepository, finance_repo::FinanceRepository,
        store::FleetStore, trip_repo::TripRepository, truck_repo::TruckRepository,
    },
    models::{
        driver::Driver,
        finance::{TripExpense, TripIncome},
        fuel::FuelRecord,
        maintenance::MaintenanceRecord,
        trip::Trip,
        truck::Truck,
    },
};

/// Postgres-backed store; one repository per table family over a shared pool.
#[derive(Clone)]
pub struct PgFleetStore {
    trucks: TruckRepository,
    drivers: DriverRepository,
    trips: TripRepository,
    costs: CostRepository,
    finance: FinanceRepository,
}

impl PgFleetStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            trucks: TruckRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            trips: TripRepository::new(pool.clone()),
            costs: CostRepository::new(pool.clone()),
            finance: FinanceRepository::new(pool),
        }
    }
}

#[async_trait]
impl FleetStore for PgFleetStore {
    async fn list_trucks(&self) -> Result<Vec<Truck>, AppError> {
        self.trucks.list().await
    }

    async fn get_truck(&self, id: Uuid) -> Result<Option<Truck>, AppError> {
        self.trucks.find_by_id(id).await
    }

    async fn create_truck(&self, truck: &Truck) -> Result<Truck, AppError> {
        self.trucks.create(truck).await
    }

    async fn update_truck(&self, truck: &Truck) -> Result<Option<Truck>, AppError> {
        self.trucks.update(truck).await
    }

    async fn delete_truck(&self, id: Uuid) -> Result<bool, AppError> {
        self.trucks.delete(id).await
    }

    async fn list_drivers(&self) -> Result<Vec<Driver>, AppError> {
        self.drivers.list().await
    }

    async fn get_driver(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        self.drivers.find_by_id(id).await
    }

    async fn create_driver(&self, driver: &Driver) -> Result<Driver, AppError> {
        self.drivers.create(driver).await
    }

    async fn update_driver(&self, driver: &Driver) -> Result<Option<Driver>, AppError> {
        self.drivers.update(driver).await
    }

    async fn delete_driver(&self, id: Uuid) -> Result<bool, AppError> {
        self.drivers.delete(id).await
    }

    async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        self.trips.list().await
    }

    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        self.trips.find_by_id(id).await
    }

    async fn create_trip(&self, trip: &Trip) -> Result<Trip, AppError> {
        self.trips.create(trip).await
    }

    async fn update_trip(&self, trip: &Trip) -> Result<Option<Trip>, AppError> {
        self.trips.update(trip).await
    }

    async fn delete_trip(&self, id: Uuid) -> Result<bool, AppError> {
        self.trips.delete(id).await
    }

    async fn list_fuel_records(&self) -> Result<Vec<FuelRecord>, AppError> {
        self.costs.list_fuel().await
    }

    async fn create_fuel_record(&self, record: &FuelRecord) -> Result<FuelRecord, AppError> {
        self.costs.create_fuel(record).await
    }

    async fn update_fuel_record(&self, record: &FuelRecord) -> Result<Option<FuelRecord>, AppError> {
        self.costs.update_fuel(record).await
    }

    async fn delete_fuel_record(&self, id: Uuid) -> Result<bool, AppError> {
        self.costs.delete_fuel(id).await
    }

    async fn list_maintenance_records(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.costs.list_maintenance().await
    }

    async fn create_maintenance_record(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<MaintenanceRecord, AppError> {
        self.costs.create_maintenance(record).await
    }

    async fn update_maintenance_record(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<Option<MaintenanceRecord>, AppError> {
        self.costs.update_maintenance(record).await
    }

    async fn delete_maintenance_record(&self, id: Uuid) -> Result<bool, AppError> {
        self.costs.delete_maintenance(id).await
    }

    async fn list_trip_expenses(&self) -> Result<Vec<TripExpense>, AppError> {
        self.finance.list_expenses().await
    }

    async fn list_trip_expenses_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripExpense>, AppError> {
        self.finance.list_expenses_by_trip(trip_id).await
    }

    async fn create_trip_expense(&self, expense: &TripExpense) -> Result<TripExpense, AppError> {
        self.finance.create_expense(expense).await
    }

    async fn update_trip_expense(&self, expense: &TripExpense) -> Result<Option<TripExpense>, AppError> {
        self.finance.update_expense(expense).await
    }

    async fn delete_trip_expense(&self, id: Uuid) -> Result<bool, AppError> {
        self.finance.delete_expense(id).await
    }

    async fn list_trip_incomes(&self) -> Result<Vec<TripIncome>, AppError> {
        self.finance.list_incomes().await
    }

    async fn list_trip_incomes_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripIncome>, AppError> {
        self.finance.list_incomes_by_trip(trip_id).await
    }

    async fn get_trip_income(&self, id: Uuid) -> Result<Option<TripIncome>, AppError> {
        self.finance.find_income(id).await
    }

    async fn create_trip_income(&self, income: &TripIncome) -> Result<TripIncome, AppError> {
        self.finance.create_income(income).await
    }

    async fn update_trip_income(&self, income: &TripIncome) -> Result<Option<TripIncome>, AppError> {
        self.finance.update_income(income).await
    }

    async fn delete_trip_income(&self, id: Uuid) -> Result<bool, AppError> {
        self.finance.delete_income(id).await
    }
}
