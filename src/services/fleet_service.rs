// src/services/fleet_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::FleetStore,
    models::{
        driver::{Driver, DriverPayload, DriverStatus},
        trip::{Trip, TripPayload, TripStatus},
        truck::{Truck, TruckPayload, TruckStatus},
    },
};

/// Trucks, drivers and trips.
#[derive(Clone)]
pub struct FleetService {
    store: Arc<dyn FleetStore>,
}

impl FleetService {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    // =========================================================================
    //  TRUCKS
    // =========================================================================

    pub async fn list_trucks(&self) -> Result<Vec<Truck>, AppError> {
        self.store.list_trucks().await
    }

    pub async fn get_truck(&self, id: Uuid) -> Result<Truck, AppError> {
        self.store
            .get_truck(id)
            .await?
            .ok_or_else(|| AppError::not_found("Truck", id))
    }

    pub async fn create_truck(&self, payload: TruckPayload) -> Result<Truck, AppError> {
        let truck = Truck {
            id: Uuid::new_v4(),
            plate_number: payload.plate_number,
            model: payload.model,
            status: payload.status.unwrap_or(TruckStatus::Active),
            capacity: payload.capacity,
            year: payload.year,
            mileage: payload.mileage,
            created_at: Utc::now(),
        };

        let created = self.store.create_truck(&truck).await?;
        tracing::info!(truck_id = %created.id, plate = %created.plate_number, "Truck registered");
        Ok(created)
    }

    pub async fn update_truck(&self, id: Uuid, payload: TruckPayload) -> Result<Truck, AppError> {
        let mut truck = self.get_truck(id).await?;
        truck.plate_number = payload.plate_number;
        truck.model = payload.model;
        if let Some(status) = payload.status {
            truck.status = status;
        }
        truck.capacity = payload.capacity;
        truck.year = payload.year;
        truck.mileage = payload.mileage;

        self.store
            .update_truck(&truck)
            .await?
            .ok_or_else(|| AppError::not_found("Truck", id))
    }

    pub async fn delete_truck(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete_truck(id).await? {
            return Err(AppError::not_found("Truck", id));
        }
        tracing::info!(truck_id = %id, "Truck removed");
        Ok(())
    }

    // =========================================================================
    //  DRIVERS
    // =========================================================================

    pub async fn list_drivers(&self) -> Result<Vec<Driver>, AppError> {
        self.store.list_drivers().await
    }

    pub async fn get_driver(&self, id: Uuid) -> Result<Driver, AppError> {
        self.store
            .get_driver(id)
            .await?
            .ok_or_else(|| AppError::not_found("Driver", id))
    }

    pub async fn create_driver(&self, payload: DriverPayload) -> Result<Driver, AppError> {
        let driver = Driver {
            id: Uuid::new_v4(),
            first_name: payload.first_name,
            last_name: payload.last_name,
            license_number: payload.license_number,
            license_expiry: payload.license_expiry,
            phone: payload.phone,
            email: payload.email,
            assigned_truck_id: payload.assigned_truck_id,
            status: payload.status.unwrap_or(DriverStatus::Available),
            created_at: Utc::now(),
        };

        let created = self.store.create_driver(&driver).await?;
        tracing::info!(driver_id = %created.id, "Driver registered");
        Ok(created)
    }

    pub async fn update_driver(&self, id: Uuid, payload: DriverPayload) -> Result<Driver, AppError> {
        let mut driver = self.get_driver(id).await?;
        driver.first_name = payload.first_name;
        driver.last_name = payload.last_name;
        driver.license_number = payload.license_number;
        driver.license_expiry = payload.license_expiry;
        driver.phone = payload.phone;
        driver.email = payload.email;
        driver.assigned_truck_id = payload.assigned_truck_id;
        if let Some(status) = payload.status {
            driver.status = status;
        }

        self.store
            .update_driver(&driver)
            .await?
            .ok_or_else(|| AppError::not_found("Driver", id))
    }

    pub async fn delete_driver(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete_driver(id).await? {
            return Err(AppError::not_found("Driver", id));
        }
        tracing::info!(driver_id = %id, "Driver removed");
        Ok(())
    }

    // =========================================================================
    //  TRIPS
    // =========================================================================

    pub async fn list_trips(&self) -> Result<Vec<Trip>, AppError> {
        self.store.list_trips().await
    }

    pub async fn get_trip(&self, id: Uuid) -> Result<Trip, AppError> {
        self.store
            .get_trip(id)
            .await?
            .ok_or_else(|| AppError::not_found("Trip", id))
    }

    pub async fn create_trip(&self, payload: TripPayload) -> Result<Trip, AppError> {
        check_trip_window(&payload)?;

        let trip = Trip {
            id: Uuid::new_v4(),
            origin: payload.origin,
            destination: payload.destination,
            start_date: payload.start_date,
            end_date: payload.end_date,
            driver_id: payload.driver_id,
            truck_id: payload.truck_id,
            status: payload.status.unwrap_or(TripStatus::Scheduled),
            distance: payload.distance,
            client_name: payload.client_name,
            created_at: Utc::now(),
        };

        let created = self.store.create_trip(&trip).await?;
        tracing::info!(
            trip_id = %created.id,
            truck_id = %created.truck_id,
            "Trip scheduled: {} -> {}",
            created.origin,
            created.destination
        );
        Ok(created)
    }

    pub async fn update_trip(&self, id: Uuid, payload: TripPayload) -> Result<Trip, AppError> {
        check_trip_window(&payload)?;

        let mut trip = self.get_trip(id).await?;
        trip.origin = payload.origin;
        trip.destination = payload.destination;
        trip.start_date = payload.start_date;
        trip.end_date = payload.end_date;
        trip.driver_id = payload.driver_id;
        trip.truck_id = payload.truck_id;
        if let Some(status) = payload.status {
            trip.status = status;
        }
        trip.distance = payload.distance;
        trip.client_name = payload.client_name;

        self.store
            .update_trip(&trip)
            .await?
            .ok_or_else(|| AppError::not_found("Trip", id))
    }

    pub async fn set_trip_status(&self, id: Uuid, status: TripStatus) -> Result<Trip, AppError> {
        let mut trip = self.get_trip(id).await?;
        let previous = trip.status;
        trip.status = status;

        let updated = self
            .store
            .update_trip(&trip)
            .await?
            .ok_or_else(|| AppError::not_found("Trip", id))?;
        tracing::info!(trip_id = %id, ?previous, ?status, "Trip status changed");
        Ok(updated)
    }

    pub async fn delete_trip(&self, id: Uuid) -> Result<(), AppError> {
        // Incomes and expenses of the trip stay; the engine treats them as orphans
        if !self.store.delete_trip(id).await? {
            return Err(AppError::not_found("Trip", id));
        }
        tracing::info!(trip_id = %id, "Trip removed");
        Ok(())
    }
}

fn check_trip_window(payload: &TripPayload) -> Result<(), AppError> {
    match payload.end_date {
        Some(end) if end < payload.start_date => Err(AppError::BadRequest(
            "End date cannot be before the start date.".to_string(),
        )),
        _ => Ok(()),
    }
}
