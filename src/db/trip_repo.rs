// src/db/trip_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::trip::Trip};

#[derive(Clone)]
pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(
            r#"
            SELECT id, origin, destination, start_date, end_date, driver_id, truck_id,
                   status, distance, client_name, created_at
            FROM trips
            WHERE deleted = false
            ORDER BY start_date DESC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Trip>, AppError> {
        let trip = sqlx::query_as::<_, Trip>(
            r#"
            SELECT id, origin, destination, start_date, end_date, driver_id, truck_id,
                   status, distance, client_name, created_at
            FROM trips
            WHERE id = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn create(&self, trip: &Trip) -> Result<Trip, AppError> {
        let created = sqlx::query_as::<_, Trip>(
            r#"
            INSERT INTO trips (
                id, origin, destination, start_date, end_date, driver_id, truck_id,
                status, distance, client_name, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING id, origin, destination, start_date, end_date, driver_id, truck_id,
                      status, distance, client_name, created_at
            "#,
        )
        .bind(trip.id)
        .bind(&trip.origin)
        .bind(&trip.destination)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(trip.driver_id)
        .bind(trip.truck_id)
        .bind(trip.status)
        .bind(trip.distance)
        .bind(&trip.client_name)
        .bind(trip.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update(&self, trip: &Trip) -> Result<Option<Trip>, AppError> {
        let updated = sqlx::query_as::<_, Trip>(
            r#"
            UPDATE trips
            SET origin = $2, destination = $3, start_date = $4, end_date = $5,
                driver_id = $6, truck_id = $7, status = $8, distance = $9,
                client_name = $10, updated_at = now()
            WHERE id = $1 AND deleted = false
            RETURNING id, origin, destination, start_date, end_date, driver_id, truck_id,
                      status, distance, client_name, created_at
            "#,
        )
        .bind(trip.id)
        .bind(&trip.origin)
        .bind(&trip.destination)
        .bind(trip.start_date)
        .bind(trip.end_date)
        .bind(trip.driver_id)
        .bind(trip.truck_id)
        .bind(trip.status)
        .bind(trip.distance)
        .bind(&trip.client_name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE trips SET deleted = true, updated_at = now() WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
