// src/db/finance_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::finance::{TripExpense, TripIncome},
};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    //  TRIP EXPENSES
    // =========================================================================

    pub async fn list_expenses(&self) -> Result<Vec<TripExpense>, AppError> {
        let expenses = sqlx::query_as::<_, TripExpense>(
            r#"
            SELECT id, trip_id, expense_type, amount, date, description
            FROM trip_expenses
            WHERE deleted = false
            ORDER BY date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn list_expenses_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripExpense>, AppError> {
        let expenses = sqlx::query_as::<_, TripExpense>(
            r#"
            SELECT id, trip_id, expense_type, amount, date, description
            FROM trip_expenses
            WHERE trip_id = $1 AND deleted = false
            ORDER BY date DESC
            "#,
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn create_expense(&self, expense: &TripExpense) -> Result<TripExpense, AppError> {
        let created = sqlx::query_as::<_, TripExpense>(
            r#"
            INSERT INTO trip_expenses (id, trip_id, expense_type, amount, date, description)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, trip_id, expense_type, amount, date, description
            "#,
        )
        .bind(expense.id)
        .bind(expense.trip_id)
        .bind(expense.kind)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(&expense.description)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_expense(&self, expense: &TripExpense) -> Result<Option<TripExpense>, AppError> {
        let updated = sqlx::query_as::<_, TripExpense>(
            r#"
            UPDATE trip_expenses
            SET trip_id = $2, expense_type = $3, amount = $4, date = $5,
                description = $6, updated_at = now()
            WHERE id = $1 AND deleted = false
            RETURNING id, trip_id, expense_type, amount, date, description
            "#,
        )
        .bind(expense.id)
        .bind(expense.trip_id)
        .bind(expense.kind)
        .bind(expense.amount)
        .bind(expense.date)
        .bind(&expense.description)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_expense(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE trip_expenses SET deleted = true, updated_at = now() WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    // =========================================================================
    //  TRIP INCOMES (receivables)
    // =========================================================================

    pub async fn list_incomes(&self) -> Result<Vec<TripIncome>, AppError> {
        let incomes = sqlx::query_as::<_, TripIncome>(
            r#"
            SELECT id, trip_id, client_name, amount, payment_status, due_date, paid_date
            FROM trip_incomes
            WHERE deleted = false
            ORDER BY due_date ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(incomes)
    }

    pub async fn list_incomes_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripIncome>, AppError> {
        let incomes = sqlx::query_as::<_, TripIncome>(
            r#"
            SELECT id, trip_id, client_name, amount, payment_status, due_date, paid_date
            FROM trip_incomes
            WHERE trip_id = $1 AND deleted = false
            ORDER BY due_date ASC
            "#,
        )
        .bind(trip_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(incomes)
    }

    pub async fn find_income(&self, id: Uuid) -> Result<Option<TripIncome>, AppError> {
        let income = sqlx::query_as::<_, TripIncome>(
            r#"
            SELECT id, trip_id, client_name, amount, payment_status, due_date, paid_date
            FROM trip_incomes
            WHERE id = $1 AND deleted = false
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(income)
    }

    pub async fn create_income(&self, income: &TripIncome) -> Result<TripIncome, AppError> {
        let created = sqlx::query_as::<_, TripIncome>(
            r#"
            INSERT INTO trip_incomes (id, trip_id, client_name, amount, payment_status, due_date, paid_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, trip_id, client_name, amount, payment_status, due_date, paid_date
            "#,
        )
        .bind(income.id)
        .bind(income.trip_id)
        .bind(&income.client_name)
        .bind(income.amount)
        .bind(income.payment_status)
        .bind(income.due_date)
        .bind(income.paid_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    pub async fn update_income(&self, income: &TripIncome) -> Result<Option<TripIncome>, AppError> {
        let updated = sqlx::query_as::<_, TripIncome>(
            r#"
            UPDATE trip_incomes
            SET client_name = $2, amount = $3, payment_status = $4,
                due_date = $5, paid_date = $6, updated_at = now()
            WHERE id = $1 AND deleted = false
            RETURNING id, trip_id, client_name, amount, payment_status, due_date, paid_date
            "#,
        )
        .bind(income.id)
        .bind(&income.client_name)
        .bind(income.amount)
        .bind(income.payment_status)
        .bind(income.due_date)
        .bind(income.paid_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(updated)
    }

    pub async fn delete_income(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query(
            "UPDATE trip_incomes SET deleted = true, updated_at = now() WHERE id = $1 AND deleted = false",
        )
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
