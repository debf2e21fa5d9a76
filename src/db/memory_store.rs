// src/db/memory_store.rs

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    analytics::FleetSnapshot,
    common::error::AppError,
    db::store::FleetStore,
    models::{
        driver::Driver,
        finance::{TripExpense, TripIncome},
        fuel::FuelRecord,
        maintenance::MaintenanceRecord,
        trip::Trip,
        truck::Truck,
    },
};

/// Process-local store (`FLEET_STORE=memory`). Data lives as long as the process.
#[derive(Debug, Default)]
pub struct InMemoryFleetStore {
    data: RwLock<FleetSnapshot>,
}

impl InMemoryFleetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: FleetSnapshot) -> Self {
        Self {
            data: RwLock::new(snapshot),
        }
    }
}

fn find<T: Clone>(items: &[T], id: Uuid, id_of: impl Fn(&T) -> Uuid) -> Option<T> {
    items.iter().find(|item| id_of(item) == id).cloned()
}

fn replace<T: Clone>(items: &mut [T], item: &T, id_of: impl Fn(&T) -> Uuid) -> Option<T> {
    let id = id_of(item);
    let slot = items.iter_mut().find(|existing| id_of(existing) == id)?;
    *slot = item.clone();
    Some(item.clone())
}

fn remove<T>(items: &mut Vec<T>, id: Uuid, id_of: impl Fn(&T) -> Uuid) -> bool {
    let before = items.len();
    items.retain(|item| id_of(item) != id);
    items.len() != before
}

#[async_trait]
impl FleetStore for InMemoryFleetStore {
    // =========================================================================
    //  TRUCKS
    // =========================================================================

    async fn list_trucks(&self) -> Result<Vec<Truck>, AppError> {
        Ok(self.data.read().await.trucks.clone())
    }

    async fn get_truck(&self, id: Uuid) -> Result<Option<Truck>, AppError> {
        Ok(find(&self.data.read().await.trucks, id, |t| t.id))
    }

    async fn create_truck(&self, truck: &Truck) -> Result<Truck, AppError> {
        let mut data = self.data.write().await;
        if data.trucks.iter().any(|t| t.plate_number == truck.plate_number) {
            return Err(AppError::Conflict("Plate number already registered.".into()));
        }
        data.trucks.push(truck.clone());
        Ok(truck.clone())
    }

    async fn update_truck(&self, truck: &Truck) -> Result<Option<Truck>, AppError> {
        let mut data = self.data.write().await;
        if data
            .trucks
            .iter()
            .any(|t| t.id != truck.id && t.plate_number == truck.plate_number)
        {
            return Err(AppError::Conflict("Plate number already registered.".into()));
        }
        Ok(replace(&mut data.trucks, truck, |t| t.id))
    }

    async fn delete_truck(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(remove(&mut self.data.write().await.trucks, id, |t| t.id))
    }

    // =========================================================================
    //  DRIVERS
    // =========================================================================

    async fn list_drivers(&self) -> Result<Vec<Driver>, AppError> {
        Ok(self.data.read().await.drivers.clone())
    }

    async fn get_driver(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        Ok(find(&self.data.read().await.drivers, id, |d| d.id))
    }

    async fn create_driver(&self, driver: &Driver) -> Result<Driver, AppError> {
        let mut data = self.data.write().await;
        if data
            .drivers
            .iter()
            .any(|d| d.license_number == driver.license_number)
        {
            return Err(AppError::Conflict("License number already registered.".into()));
        }
        data.drivers.push(driver.clone());
        Ok(driver.clone())
    }

    async fn update_driver(&self, driver: &Driver) -> Result<Option<Driver>, AppError> {
        let mut data = self.data.write().await;
        if data
            .drivers
            .iter()
            .any(|d| d.id != driver.id && d.license_number == driver.license_number)
        {
            return Err(AppError::Conflict("License number already registered.".into()));
        }
        Ok(replace(&mut data.drivers, driver, |d| d.id))
    }

    async fn delete_driver(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(remove(&mut self.data.write().await.drivers, id, |d| d.id))
    }

    // =========================================================================
    //  TRIPS
    // =========================================================================

    async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        Ok(self.data.read().await.trips.clone())
    }

    async fn get_trip(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        Ok(find(&self.data.read().await.trips, id, |t| t.id))
    }

    async fn create_trip(&self, trip: &Trip) -> Result<Trip, AppError> {
        self.data.write().await.trips.push(trip.clone());
        Ok(trip.clone())
    }

    async fn update_trip(&self, trip: &Trip) -> Result<Option<Trip>, AppError> {
        Ok(replace(&mut self.data.write().await.trips, trip, |t| t.id))
    }

    async fn delete_trip(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(remove(&mut self.data.write().await.trips, id, |t| t.id))
    }

    // =========================================================================
    //  FUEL & MAINTENANCE
    // =========================================================================

    async fn list_fuel_records(&self) -> Result<Vec<FuelRecord>, AppError> {
        Ok(self.data.read().await.fuel_records.clone())
    }

    async fn create_fuel_record(&self, record: &FuelRecord) -> Result<FuelRecord, AppError> {
        self.data.write().await.fuel_records.push(record.clone());
        Ok(record.clone())
    }

    async fn update_fuel_record(&self, record: &FuelRecord) -> Result<Option<FuelRecord>, AppError> {
        Ok(replace(&mut self.data.write().await.fuel_records, record, |f| f.id))
    }

    async fn delete_fuel_record(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(remove(&mut self.data.write().await.fuel_records, id, |f| f.id))
    }

    async fn list_maintenance_records(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        Ok(self.data.read().await.maintenance_records.clone())
    }

    async fn create_maintenance_record(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<MaintenanceRecord, AppError> {
        self.data.write().await.maintenance_records.push(record.clone());
        Ok(record.clone())
    }

    async fn update_maintenance_record(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<Option<MaintenanceRecord>, AppError> {
        Ok(replace(&mut self.data.write().await.maintenance_records, record, |m| m.id))
    }

    async fn delete_maintenance_record(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(remove(&mut self.data.write().await.maintenance_records, id, |m| m.id))
    }

    // =========================================================================
    //  TRIP FINANCIALS
    // =========================================================================

    async fn list_trip_expenses(&self) -> Result<Vec<TripExpense>, AppError> {
        Ok(self.data.read().await.expenses.clone())
    }

    async fn list_trip_expenses_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripExpense>, AppError> {
        let data = self.data.read().await;
        Ok(data
            .expenses
            .iter()
            .filter(|e| e.trip_id == trip_id)
            .cloned()
            .collect())
    }

    async fn create_trip_expense(&self, expense: &TripExpense) -> Result<TripExpense, AppError> {
        self.data.write().await.expenses.push(expense.clone());
        Ok(expense.clone())
    }

    async fn update_trip_expense(&self, expense: &TripExpense) -> Result<Option<TripExpense>, AppError> {
        Ok(replace(&mut self.data.write().await.expenses, expense, |e| e.id))
    }

    async fn delete_trip_expense(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(remove(&mut self.data.write().await.expenses, id, |e| e.id))
    }

    async fn list_trip_incomes(&self) -> Result<Vec<TripIncome>, AppError> {
        Ok(self.data.read().await.incomes.clone())
    }

    async fn list_trip_incomes_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripIncome>, AppError> {
        let data = self.data.read().await;
        Ok(data
            .incomes
            .iter()
            .filter(|i| i.trip_id == trip_id)
            .cloned()
            .collect())
    }

    async fn get_trip_income(&self, id: Uuid) -> Result<Option<TripIncome>, AppError> {
        Ok(find(&self.data.read().await.incomes, id, |i| i.id))
    }

    async fn create_trip_income(&self, income: &TripIncome) -> Result<TripIncome, AppError> {
        self.data.write().await.incomes.push(income.clone());
        Ok(income.clone())
    }

    async fn update_trip_income(&self, income: &TripIncome) -> Result<Option<TripIncome>, AppError> {
        Ok(replace(&mut self.data.write().await.incomes, income, |i| i.id))
    }

    async fn delete_trip_income(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(remove(&mut self.data.write().await.incomes, id, |i| i.id))
    }

    // One read lock for the whole snapshot
    async fn snapshot(&self) -> Result<FleetSnapshot, AppError> {
        Ok(self.data.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures::*;
    use crate::models::{finance::PaymentStatus, truck::TruckStatus};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn duplicate_plate_is_a_conflict() {
        let store = InMemoryFleetStore::new();
        store.create_truck(&truck("DUP-1", TruckStatus::Active)).await.unwrap();

        let err = store
            .create_truck(&truck("DUP-1", TruckStatus::Inactive))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn update_and_delete_report_unknown_ids() {
        let store = InMemoryFleetStore::new();
        let ghost = truck("GHOST", TruckStatus::Active);

        assert!(store.update_truck(&ghost).await.unwrap().is_none());
        assert!(!store.delete_truck(ghost.id).await.unwrap());
    }

    #[tokio::test]
    async fn incomes_filter_by_trip() {
        let store = InMemoryFleetStore::new();
        let trip_a = Uuid::new_v4();
        let trip_b = Uuid::new_v4();
        for (trip_id, amount) in [(trip_a, dec!(10)), (trip_a, dec!(20)), (trip_b, dec!(5))] {
            store
                .create_trip_income(&income(trip_id, amount, PaymentStatus::Pending, day(2024, 1, 1)))
                .await
                .unwrap();
        }

        let incomes = store.list_trip_incomes_by_trip(trip_a).await.unwrap();
        assert_eq!(incomes.len(), 2);
        assert!(incomes.iter().all(|i| i.trip_id == trip_a));

        let snapshot = store.snapshot().await.unwrap();
        assert_eq!(snapshot.incomes.len(), 3);
    }
}
