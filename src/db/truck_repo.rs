// src/db/truck_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::truck::Truck};

const PLATE_TAKEN: &str = "Plate number already registered.";

#[derive(Clone)]
pub struct TruckRepository {
    pool: PgPool,
}

impl TruckRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Truck>, AppError> {
        let trucks = sqlx::query_as::<_, Truck>(
            r#"
            SELECT id, plate_number, model, status, capacity, model_year, mileage, created_at
            FROM trucks
            WHERE deleted = false
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(trucks)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Truck>, AppError> {
        let truck = sqlx::query_as::<_, Truck>(
            r#"
            SELECT id, plate_number, model, status, capacity, model_year, mileage, created_at
            FROM trucks
            WHERE id = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(truck)
    }

    pub async fn create(&self, truck: &Truck) -> Result<Truck, AppError> {
        sqlx::query_as::<_, Truck>(
            r#"
            INSERT INTO trucks (id, plate_number, model, status, capacity, model_year, mileage, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, plate_number, model, status, capacity, model_year, mileage, created_at
            "#,
        )
        .bind(truck.id)
        .bind(&truck.plate_number)
        .bind(&truck.model)
        .bind(truck.status)
        .bind(truck.capacity)
        .bind(truck.year)
        .bind(truck.mileage)
        .bind(truck.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, PLATE_TAKEN))
    }

    pub async fn update(&self, truck: &Truck) -> Result<Option<Truck>, AppError> {
        sqlx::query_as::<_, Truck>(
            r#"
            UPDATE trucks
            SET plate_number = $2, model = $3, status = $4, capacity = $5,
                model_year = $6, mileage = $7, updated_at = now()
            WHERE id = $1 AND deleted = false
            RETURNING id, plate_number, model, status, capacity, model_year, mileage, created_at
            "#,
        )
        .bind(truck.id)
        .bind(&truck.plate_number)
        .bind(&truck.model)
        .bind(truck.status)
        .bind(truck.capacity)
        .bind(truck.year)
        .bind(truck.mileage)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, PLATE_TAKEN))
    }

    // Soft delete
    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            UPDATE trucks
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
