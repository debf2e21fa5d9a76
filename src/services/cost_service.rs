// src/services/cost_service.rs

use std::sync::Arc;

use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::FleetStore,
    models::{
        finance::{TripExpense, TripExpensePayload},
        fuel::{FuelRecord, FuelRecordPayload},
        maintenance::{MaintenanceRecord, MaintenanceRecordPayload},
    },
};

/// Fuel fill-ups, maintenance jobs and per-trip expenses.
#[derive(Clone)]
pub struct CostService {
    store: Arc<dyn FleetStore>,
}

impl CostService {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list_fuel_records(&self) -> Result<Vec<FuelRecord>, AppError> {
        self.store.list_fuel_records().await
    }

    pub async fn create_fuel_record(&self, payload: FuelRecordPayload) -> Result<FuelRecord, AppError> {
        let record = FuelRecord {
            id: Uuid::new_v4(),
            truck_id: payload.truck_id,
            trip_id: payload.trip_id,
            amount: payload.amount,
            cost: payload.cost,
            date: payload.date,
            station: payload.station,
            odometer_reading: payload.odometer_reading,
        };

        let created = self.store.create_fuel_record(&record).await?;
        tracing::info!(record_id = %created.id, truck_id = %created.truck_id, cost = %created.cost, "Fuel record added");
        Ok(created)
    }

    pub async fn update_fuel_record(
        &self,
        id: Uuid,
        payload: FuelRecordPayload,
    ) -> Result<FuelRecord, AppError> {
        let record = FuelRecord {
            id,
            truck_id: payload.truck_id,
            trip_id: payload.trip_id,
            amount: payload.amount,
            cost: payload.cost,
            date: payload.date,
            station: payload.station,
            odometer_reading: payload.odometer_reading,
        };

        let updated = self
            .store
            .update_fuel_record(&record)
            .await?
            .ok_or_else(|| AppError::not_found("Fuel record", id))?;
        tracing::info!(record_id = %id, cost = %updated.cost, "Fuel record updated");
        Ok(updated)
    }

    pub async fn delete_fuel_record(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete_fuel_record(id).await? {
            return Err(AppError::not_found("Fuel record", id));
        }
        Ok(())
    }

    pub async fn list_maintenance_records(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        self.store.list_maintenance_records().await
    }

    pub async fn create_maintenance_record(
        &self,
        payload: MaintenanceRecordPayload,
    ) -> Result<MaintenanceRecord, AppError> {
        check_next_due_date(&payload)?;

        let record = MaintenanceRecord {
            id: Uuid::new_v4(),
            truck_id: payload.truck_id,
            kind: payload.kind,
            cost: payload.cost,
            date: payload.date,
            description: payload.description,
            vendor: payload.vendor,
            next_due_date: payload.next_due_date,
        };

        let created = self.store.create_maintenance_record(&record).await?;
        tracing::info!(record_id = %created.id, truck_id = %created.truck_id, kind = ?created.kind, "Maintenance logged");
        Ok(created)
    }

    pub async fn update_maintenance_record(
        &self,
        id: Uuid,
        payload: MaintenanceRecordPayload,
    ) -> Result<MaintenanceRecord, AppError> {
        check_next_due_date(&payload)?;

        let record = MaintenanceRecord {
            id,
            truck_id: payload.truck_id,
            kind: payload.kind,
            cost: payload.cost,
            date: payload.date,
            description: payload.description,
            vendor: payload.vendor,
            next_due_date: payload.next_due_date,
        };

        let updated = self
            .store
            .update_maintenance_record(&record)
            .await?
            .ok_or_else(|| AppError::not_found("Maintenance record", id))?;
        tracing::info!(record_id = %id, kind = ?updated.kind, "Maintenance record updated");
        Ok(updated)
    }

    pub async fn delete_maintenance_record(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete_maintenance_record(id).await? {
            return Err(AppError::not_found("Maintenance record", id));
        }
        Ok(())
    }

    pub async fn list_trip_expenses(&self) -> Result<Vec<TripExpense>, AppError> {
        self.store.list_trip_expenses().await
    }

    pub async fn list_trip_expenses_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripExpense>, AppError> {
        self.store.list_trip_expenses_by_trip(trip_id).await
    }

    pub async fn create_trip_expense(&self, payload: TripExpensePayload) -> Result<TripExpense, AppError> {
        let expense = TripExpense {
            id: Uuid::new_v4(),
            trip_id: payload.trip_id,
            kind: payload.kind,
            amount: payload.amount,
            date: payload.date,
            description: payload.description,
        };

        let created = self.store.create_trip_expense(&expense).await?;
        tracing::info!(expense_id = %created.id, trip_id = %created.trip_id, amount = %created.amount, "Trip expense added");
        Ok(created)
    }

    pub async fn update_trip_expense(
        &self,
        id: Uuid,
        payload: TripExpensePayload,
    ) -> Result<TripExpense, AppError> {
        let expense = TripExpense {
            id,
            trip_id: payload.trip_id,
            kind: payload.kind,
            amount: payload.amount,
            date: payload.date,
            description: payload.description,
        };

        let updated = self
            .store
            .update_trip_expense(&expense)
            .await?
            .ok_or_else(|| AppError::not_found("Trip expense", id))?;
        tracing::info!(expense_id = %id, amount = %updated.amount, "Trip expense updated");
        Ok(updated)
    }

    pub async fn delete_trip_expense(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete_trip_expense(id).await? {
            return Err(AppError::not_found("Trip expense", id));
        }
        Ok(())
    }
}

fn check_next_due_date(payload: &MaintenanceRecordPayload) -> Result<(), AppError> {
    if let Some(next) = payload.next_due_date {
        if next < payload.date.date_naive() {
            return Err(AppError::BadRequest(
                "Next due date cannot be before the service date.".to_string(),
            ));
        }
    }
    Ok(())
}
