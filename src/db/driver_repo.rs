// src/db/driver_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{common::error::AppError, models::driver::Driver};

const LICENSE_TAKEN: &str = "License number already registered.";

#[derive(Clone)]
pub struct DriverRepository {
    pool: PgPool,
}

impl DriverRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Driver>, AppError> {
        let drivers = sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, first_name, last_name, license_number, license_expiry,
                   phone, email, assigned_truck_id, status, created_at
            FROM drivers
            WHERE deleted = false
            ORDER BY created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(drivers)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Driver>, AppError> {
        let driver = sqlx::query_as::<_, Driver>(
            r#"
            SELECT id, first_name, last_name, license_number, license_expiry,
                   phone, email, assigned_truck_id, status, created_at
            FROM drivers
            WHERE id = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(driver)
    }

    pub async fn create(&self, driver: &Driver) -> Result<Driver, AppError> {
        sqlx::query_as::<_, Driver>(
            r#"
            INSERT INTO drivers (
                id, first_name, last_name, license_number, license_expiry,
                phone, email, assigned_truck_id, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, first_name, last_name, license_number, license_expiry,
                      phone, email, assigned_truck_id, status, created_at
            "#,
        )
        .bind(driver.id)
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.license_number)
        .bind(driver.license_expiry)
        .bind(&driver.phone)
        .bind(&driver.email)
        .bind(driver.assigned_truck_id)
        .bind(driver.status)
        .bind(driver.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, LICENSE_TAKEN))
    }

    pub async fn update(&self, driver: &Driver) -> Result<Option<Driver>, AppError> {
        sqlx::query_as::<_, Driver>(
            r#"
            UPDATE drivers
            SET first_name = $2, last_name = $3, license_number = $4, license_expiry = $5,
                phone = $6, email = $7, assigned_truck_id = $8, status = $9, updated_at = now()
            WHERE id = $1 AND deleted = false
            RETURNING id, first_name, last_name, license_number, license_expiry,
                      phone, email, assigned_truck_id, status, created_at
            "#,
        )
        .bind(driver.id)
        .bind(&driver.first_name)
        .bind(&driver.last_name)
        .bind(&driver.license_number)
        .bind(driver.license_expiry)
        .bind(&driver.phone)
        .bind(&driver.email)
        .bind(driver.assigned_truck_id)
        .bind(driver.status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_unique_violation(e, LICENSE_TAKEN))
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE drivers SET deleted = true, updated_at = now() WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
