// src/db/cost_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{fuel::FuelRecord, maintenance::MaintenanceRecord},
};

/// Fuel fill-ups and maintenance work: the costs booked straight on a truck.
#[derive(Clone)]
pub struct CostRepository {
    pool: PgPool,
}

impl CostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  FUEL
    // =========================================================================

    pub async fn list_fuel(&self) -> Result<Vec<FuelRecord>, AppError> {
        let records = sqlx::query_as::<_, FuelRecord>(
            r#"
            SELECT id, truck_id, trip_id, amount, cost, date, station, odometer_reading
            FROM fuel_records
            WHERE deleted = false
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn create_fuel(&self, record: &FuelRecord) -> Result<FuelRecord, AppError> {
        let created = sqlx::query_as::<_, FuelRecord>(
            r#"
            INSERT INTO fuel_records (id, truck_id, trip_id, amount, cost, date, station, odometer_reading)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, truck_id, trip_id, amount, cost, date, station, odometer_reading
            "#,
        )
        .bind(record.id)
        .bind(record.truck_id)
        .bind(record.trip_id)
        .bind(record.amount)
        .bind(record.cost)
        .bind(record.date)
        .bind(&record.station)
        .bind(record.odometer_reading)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_fuel(&self, record: &FuelRecord) -> Result<Option<FuelRecord>, AppError> {
        let updated = sqlx::query_as::<_, FuelRecord>(
            r#"
            UPDATE fuel_records
            SET truck_id = $2, trip_id = $3, amount = $4, cost = $5, date = $6,
                station = $7, odometer_reading = $8, updated_at = now()
            WHERE id = $1 AND deleted = false
            RETURNING id, truck_id, trip_id, amount, cost, date, station, odometer_reading
            "#,
        )
        .bind(record.id)
        .bind(record.truck_id)
        .bind(record.trip_id)
        .bind(record.amount)
        .bind(record.cost)
        .bind(record.date)
        .bind(&record.station)
        .bind(record.odometer_reading)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_fuel(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE fuel_records SET deleted = true, updated_at = now() WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    //  MAINTENANCE
    // =========================================================================

    pub async fn list_maintenance(&self) -> Result<Vec<MaintenanceRecord>, AppError> {
        let records = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            SELECT id, truck_id, maintenance_type, cost, date, description, vendor, next_due_date
            FROM maintenance_records
            WHERE deleted = false
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(records)
    }

    pub async fn create_maintenance(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<MaintenanceRecord, AppError> {
        let created = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            INSERT INTO maintenance_records (
                id, truck_id, maintenance_type, cost, date, description, vendor, next_due_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, truck_id, maintenance_type, cost, date, description, vendor, next_due_date
            "#,
        )
        .bind(record.id)
        .bind(record.truck_id)
        .bind(record.kind)
        .bind(record.cost)
        .bind(record.date)
        .bind(&record.description)
        .bind(&record.vendor)
        .bind(record.next_due_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_maintenance(
        &self,
        record: &MaintenanceRecord,
    ) -> Result<Option<MaintenanceRecord>, AppError> {
        let updated = sqlx::query_as::<_, MaintenanceRecord>(
            r#"
            UPDATE maintenance_records
            SET truck_id = $2, maintenance_type = $3, cost = $4, date = $5,
                description = $6, vendor = $7, next_due_date = $8, updated_at = now()
            WHERE id = $1 AND deleted = false
            RETURNING id, truck_id, maintenance_type, cost, date, description, vendor, next_due_date
            "#,
        )
        .bind(record.id)
        .bind(record.truck_id)
        .bind(record.kind)
        .bind(record.cost)
        .bind(record.date)
        .bind(&record.description)
        .bind(&record.vendor)
        .bind(record.next_due_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_maintenance(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE maintenance_records
            SET deleted = true, updated_at = now()
            WHERE id = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
