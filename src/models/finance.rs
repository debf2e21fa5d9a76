// src/models/finance.rs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::common::{
    serde_helpers::any_case_opt,
    validation::{validate_not_negative, validate_positive},
};

// --- Enums (mapped to Postgres enum types) ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "expense_type", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    Fuel,
    Toll,
    Repair,
    Food,
    Lodging,
    Other,
}

// No transition graph: any status may move to any other.
// OVERDUE is only ever set explicitly, never derived from the due date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripExpense {
    pub id: Uuid,
    pub trip_id: Uuid,

    #[serde(rename = "type")]
    #[sqlx(rename = "expense_type")]
    pub kind: ExpenseType,

    #[schema(example = "85.00")]
    pub amount: Decimal,

    pub date: DateTime<Utc>,

    #[schema(example = "Highway toll")]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripIncome {
    pub id: Uuid,
    pub trip_id: Uuid,

    #[schema(example = "Acme Logistics")]
    pub client_name: String,

    #[schema(example = "4500.00")]
    pub amount: Decimal,

    pub payment_status: PaymentStatus,

    // Revenue is recognized in the month of the due date
    #[schema(value_type = String, format = Date, example = "2024-03-31")]
    pub due_date: NaiveDate,

    pub paid_date: Option<DateTime<Utc>>,
}

impl TripIncome {
    /// Moves the income to `status`.
    ///
    /// Entering PAID stamps `paid_date` with `now`; staying in PAID keeps the
    /// original stamp. Any other status clears it.
    pub fn set_payment_status(&mut self, status: PaymentStatus, now: DateTime<Utc>) {
        self.paid_date = match status {
            PaymentStatus::Paid if self.payment_status == PaymentStatus::Paid => {
                self.paid_date.or(Some(now))
            }
            PaymentStatus::Paid => Some(now),
            PaymentStatus::Pending | PaymentStatus::Overdue => None,
        };
        self.payment_status = status;
    }
}

// --- Payloads ---

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripExpensePayload {
    pub trip_id: Uuid,

    #[serde(rename = "type")]
    pub kind: ExpenseType,

    #[validate(custom(function = "validate_not_negative"))]
    pub amount: Decimal,

    pub date: DateTime<Utc>,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripIncomePayload {
    pub trip_id: Uuid,

    #[validate(length(min = 1, message = "Client name is required."))]
    #[schema(example = "Acme Logistics")]
    pub client_name: String,

    #[validate(custom(function = "validate_positive"))]
    #[schema(example = "4500.00")]
    pub amount: Decimal,

    #[schema(value_type = String, format = Date, example = "2024-03-31")]
    pub due_date: NaiveDate,

    // Defaults to PENDING
    #[serde(default, deserialize_with = "any_case_opt")]
    pub payment_status: Option<PaymentStatus>,
}

// PUT /api/trip-incomes/{id} only touches the fields that are present
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTripIncomePayload {
    #[validate(length(min = 1, message = "Client name is required."))]
    pub client_name: Option<String>,

    #[validate(custom(function = "validate_positive"))]
    pub amount: Option<Decimal>,

    #[schema(value_type = Option<String>, format = Date)]
    pub due_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "any_case_opt")]
    pub payment_status: Option<PaymentStatus>,
}

// --- Ledger view ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TripLedger {
    pub trip_id: Uuid,
    pub incomes: Vec<TripIncome>,
    // Contracted revenue: every status counts
    pub total_income: Decimal,
    pub paid_amount: Decimal,
    pub outstanding_amount: Decimal,
}

impl TripLedger {
    pub fn from_incomes(trip_id: Uuid, incomes: Vec<TripIncome>) -> Self {
        let (paid_amount, outstanding_amount) = incomes.iter().fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(paid, outstanding), income| match income.payment_status {
                PaymentStatus::Paid => (paid + income.amount, outstanding),
                PaymentStatus::Pending | PaymentStatus::Overdue => {
                    (paid, outstanding + income.amount)
                }
            },
        );

        Self {
            trip_id,
            incomes,
            total_income: paid_amount + outstanding_amount,
            paid_amount,
            outstanding_amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    fn income(amount: Decimal, status: PaymentStatus) -> TripIncome {
        TripIncome {
            id: Uuid::new_v4(),
            trip_id: Uuid::new_v4(),
            client_name: "Acme".into(),
            amount,
            payment_status: status,
            due_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            paid_date: None,
        }
    }

    #[test]
    fn marking_paid_stamps_and_reverting_clears() {
        let now = Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap();
        let mut inc = income(dec!(1000), PaymentStatus::Pending);

        inc.set_payment_status(PaymentStatus::Paid, now);
        assert_eq!(inc.payment_status, PaymentStatus::Paid);
        assert_eq!(inc.paid_date, Some(now));

        inc.set_payment_status(PaymentStatus::Pending, now);
        assert_eq!(inc.paid_date, None);
        assert_eq!(inc.amount, dec!(1000));
    }

    #[test]
    fn resaving_paid_keeps_original_stamp() {
        let first = Utc.with_ymd_and_hms(2024, 4, 2, 10, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut inc = income(dec!(10), PaymentStatus::Pending);

        inc.set_payment_status(PaymentStatus::Paid, first);
        inc.set_payment_status(PaymentStatus::Paid, later);
        assert_eq!(inc.paid_date, Some(first));
    }

    #[test]
    fn overdue_is_reachable_from_paid() {
        let now = Utc::now();
        let mut inc = income(dec!(10), PaymentStatus::Pending);
        inc.set_payment_status(PaymentStatus::Paid, now);
        inc.set_payment_status(PaymentStatus::Overdue, now);
        assert_eq!(inc.payment_status, PaymentStatus::Overdue);
        assert!(inc.paid_date.is_none());
    }

    #[test]
    fn ledger_total_counts_every_status() {
        let trip_id = Uuid::new_v4();
        let ledger = TripLedger::from_incomes(
            trip_id,
            vec![
                income(dec!(1000), PaymentStatus::Paid),
                income(dec!(250.50), PaymentStatus::Pending),
                income(dec!(49.50), PaymentStatus::Overdue),
            ],
        );

        assert_eq!(ledger.total_income, dec!(1300));
        assert_eq!(ledger.paid_amount, dec!(1000));
        assert_eq!(ledger.outstanding_amount, dec!(300));
    }

    #[test]
    fn empty_ledger_is_zero() {
        let ledger = TripLedger::from_incomes(Uuid::new_v4(), Vec::new());
        assert_eq!(ledger.total_income, Decimal::ZERO);
        assert!(ledger.incomes.is_empty());
    }
}
