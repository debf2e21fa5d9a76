// src/services/income_service.rs

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::FleetStore,
    models::finance::{
        CreateTripIncomePayload, PaymentStatus, TripIncome, TripLedger, UpdateTripIncomePayload,
    },
};

/// Receivables attached to trips.
#[derive(Clone)]
pub struct IncomeService {
    store: Arc<dyn FleetStore>,
}

impl IncomeService {
    pub fn new(store: Arc<dyn FleetStore>) -> Self {
        Self { store }
    }

    pub async fn list_incomes(&self) -> Result<Vec<TripIncome>, AppError> {
        self.store.list_trip_incomes().await
    }

    pub async fn list_incomes_by_trip(&self, trip_id: Uuid) -> Result<Vec<TripIncome>, AppError> {
        self.store.list_trip_incomes_by_trip(trip_id).await
    }

    pub async fn trip_ledger(&self, trip_id: Uuid) -> Result<TripLedger, AppError> {
        let incomes = self.store.list_trip_incomes_by_trip(trip_id).await?;
        Ok(TripLedger::from_incomes(trip_id, incomes))
    }

    pub async fn create_income(&self, payload: CreateTripIncomePayload) -> Result<TripIncome, AppError> {
        let status = payload.payment_status.unwrap_or(PaymentStatus::Pending);
        let income = TripIncome {
            id: Uuid::new_v4(),
            trip_id: payload.trip_id,
            client_name: payload.client_name,
            amount: payload.amount,
            payment_status: status,
            due_date: payload.due_date,
            // PAID on creation is an immediate transition
            paid_date: (status == PaymentStatus::Paid).then(Utc::now),
        };

        let created = self.store.create_trip_income(&income).await?;
        tracing::info!(
            income_id = %created.id,
            trip_id = %created.trip_id,
            amount = %created.amount,
            status = ?created.payment_status,
            "Trip income recorded"
        );
        Ok(created)
    }

    pub async fn update_income(
        &self,
        id: Uuid,
        payload: UpdateTripIncomePayload,
    ) -> Result<TripIncome, AppError> {
        let mut income = self
            .store
            .get_trip_income(id)
            .await?
            .ok_or_else(|| AppError::not_found("Trip income", id))?;

        if let Some(client_name) = payload.client_name {
            income.client_name = client_name;
        }
        if let Some(amount) = payload.amount {
            income.amount = amount;
        }
        if let Some(due_date) = payload.due_date {
            income.due_date = due_date;
        }
        if let Some(status) = payload.payment_status {
            let previous = income.payment_status;
            income.set_payment_status(status, Utc::now());
            if previous != status {
                tracing::info!(income_id = %id, ?previous, ?status, "Payment status changed");
            }
        }

        self.store
            .update_trip_income(&income)
            .await?
            .ok_or_else(|| AppError::not_found("Trip income", id))
    }

    pub async fn delete_income(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.delete_trip_income(id).await? {
            return Err(AppError::not_found("Trip income", id));
        }
        tracing::info!(income_id = %id, "Trip income removed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryFleetStore;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn service() -> IncomeService {
        IncomeService::new(Arc::new(InMemoryFleetStore::new()))
    }

    fn payload(trip_id: Uuid, amount: Decimal) -> CreateTripIncomePayload {
        CreateTripIncomePayload {
            trip_id,
            client_name: "Acme".to_string(),
            amount,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 20).unwrap(),
            payment_status: None,
        }
    }

    fn set_status(status: PaymentStatus) -> UpdateTripIncomePayload {
        UpdateTripIncomePayload {
            payment_status: Some(status),
            ..UpdateTripIncomePayload::default()
        }
    }

    #[tokio::test]
    async fn create_defaults_to_pending() {
        let svc = service();
        let income = svc.create_income(payload(Uuid::new_v4(), dec!(500))).await.unwrap();

        assert_eq!(income.payment_status, PaymentStatus::Pending);
        assert_eq!(income.paid_date, None);
    }

    #[tokio::test]
    async fn create_as_paid_stamps_paid_date() {
        let svc = service();
        let mut body = payload(Uuid::new_v4(), dec!(500));
        body.payment_status = Some(PaymentStatus::Paid);

        let income = svc.create_income(body).await.unwrap();
        assert!(income.paid_date.is_some());
    }

    #[tokio::test]
    async fn pending_paid_pending_round_trip() {
        let svc = service();
        let trip_id = Uuid::new_v4();
        let income = svc.create_income(payload(trip_id, dec!(1000))).await.unwrap();

        let before = Utc::now();
        let paid = svc.update_income(income.id, set_status(PaymentStatus::Paid)).await.unwrap();
        let stamp = paid.paid_date.expect("paid date set");
        assert!(stamp >= before);

        // Re-saving PAID keeps the first stamp
        let again = svc.update_income(income.id, set_status(PaymentStatus::Paid)).await.unwrap();
        assert_eq!(again.paid_date, Some(stamp));

        let reverted = svc.update_income(income.id, set_status(PaymentStatus::Pending)).await.unwrap();
        assert_eq!(reverted.paid_date, None);

        let ledger = svc.trip_ledger(trip_id).await.unwrap();
        assert_eq!(ledger.total_income, dec!(1000));
        assert_eq!(ledger.outstanding_amount, dec!(1000));
    }

    #[tokio::test]
    async fn partial_update_leaves_other_fields() {
        let svc = service();
        let income = svc.create_income(payload(Uuid::new_v4(), dec!(750))).await.unwrap();

        let updated = svc
            .update_income(
                income.id,
                UpdateTripIncomePayload {
                    amount: Some(dec!(800)),
                    ..UpdateTripIncomePayload::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.amount, dec!(800));
        assert_eq!(updated.client_name, income.client_name);
        assert_eq!(updated.due_date, income.due_date);
        assert_eq!(updated.payment_status, PaymentStatus::Pending);
    }

    #[tokio::test]
    async fn overdue_is_only_set_explicitly() {
        let svc = service();
        let mut body = payload(Uuid::new_v4(), dec!(10));
        // Long past due
        body.due_date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let income = svc.create_income(body).await.unwrap();
        assert_eq!(income.payment_status, PaymentStatus::Pending);

        let overdue = svc.update_income(income.id, set_status(PaymentStatus::Overdue)).await.unwrap();
        assert_eq!(overdue.payment_status, PaymentStatus::Overdue);
        assert_eq!(overdue.paid_date, None);
    }

    #[tokio::test]
    async fn unknown_income_is_not_found() {
        let svc = service();
        let id = Uuid::new_v4();

        assert!(matches!(
            svc.update_income(id, set_status(PaymentStatus::Paid)).await,
            Err(AppError::ResourceNotFound(_))
        ));
        assert!(matches!(svc.delete_income(id).await, Err(AppError::ResourceNotFound(_))));
    }

    #[tokio::test]
    async fn delete_removes_from_the_trip_list() {
        let svc = service();
        let trip_id = Uuid::new_v4();
        let keep = svc.create_income(payload(trip_id, dec!(1))).await.unwrap();
        let gone = svc.create_income(payload(trip_id, dec!(2))).await.unwrap();

        svc.delete_income(gone.id).await.unwrap();

        let left = svc.list_incomes_by_trip(trip_id).await.unwrap();
        assert_eq!(left.len(), 1);
        assert_eq!(left[0].id, keep.id);
    }
}
