// src/analytics/monthly.rs

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::FleetSnapshot;
use crate::models::reports::MonthlyBucket;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

#[derive(Debug, Default, Clone, Copy)]
struct MonthTotals {
    revenue: Decimal,
    expenses: Decimal,
}

/// Revenue/expense/profit per calendar month, chronological and sparse.
///
/// Incomes land in the month of their due date, never the paid date. The key
/// is the month alone, so March 2023 and March 2024 share a bucket; use
/// [`compute_monthly_series_for_year`] to look at a single year.
pub fn compute_monthly_series(snapshot: &FleetSnapshot) -> Vec<MonthlyBucket> {
    fold_months(snapshot, |_| true)
}

pub fn compute_monthly_series_for_year(snapshot: &FleetSnapshot, year: i32) -> Vec<MonthlyBucket> {
    fold_months(snapshot, |date| date.year() == year)
}

fn fold_months(snapshot: &FleetSnapshot, keep: impl Fn(NaiveDate) -> bool) -> Vec<MonthlyBucket> {
    // Keyed by month0 so iteration order is calendar order, not name order
    let mut months: BTreeMap<u32, MonthTotals> = BTreeMap::new();

    for income in &snapshot.incomes {
        if keep(income.due_date) {
            months.entry(income.due_date.month0()).or_default().revenue += income.amount;
        }
    }

    let costs = snapshot
        .expenses
        .iter()
        .map(|e| (e.date.date_naive(), e.amount))
        .chain(snapshot.fuel_records.iter().map(|f| (f.date.date_naive(), f.cost)))
        .chain(
            snapshot
                .maintenance_records
                .iter()
                .map(|m| (m.date.date_naive(), m.cost)),
        );
    for (date, amount) in costs {
        if keep(date) {
            months.entry(date.month0()).or_default().expenses += amount;
        }
    }

    tracing::debug!(buckets = months.len(), "Monthly series folded");

    months
        .into_iter()
        .map(|(month_index, totals)| MonthlyBucket {
            month: MONTH_NAMES[month_index as usize].to_string(),
            month_index,
            revenue: totals.revenue,
            expenses: totals.expenses,
            profit: totals.revenue - totals.expenses,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{compute_dashboard_stats, fixtures::*};
    use crate::models::{driver::DriverStatus, finance::PaymentStatus, trip::TripStatus, truck::TruckStatus};
    use rust_decimal_macros::dec;

    #[test]
    fn single_trip_in_march() {
        let t1 = truck("T1", TruckStatus::Active);
        let d1 = driver("Ali", DriverStatus::Available);
        let r1 = trip(t1.id, d1.id, TripStatus::Completed, at(2024, 3, 1));
        let snapshot = FleetSnapshot {
            incomes: vec![income(r1.id, dec!(1000), PaymentStatus::Pending, day(2024, 3, 20))],
            expenses: vec![expense(r1.id, dec!(200), at(2024, 3, 5))],
            trucks: vec![t1],
            drivers: vec![d1],
            trips: vec![r1],
            ..FleetSnapshot::default()
        };

        let series = compute_monthly_series(&snapshot);
        assert_eq!(
            series,
            vec![MonthlyBucket {
                month: "March".to_string(),
                month_index: 2,
                revenue: dec!(1000),
                expenses: dec!(200),
                profit: dec!(800),
            }]
        );
    }

    #[test]
    fn series_is_sparse_and_chronological() {
        let trip_id = uuid::Uuid::new_v4();
        let truck_id = uuid::Uuid::new_v4();
        let snapshot = FleetSnapshot {
            // Alphabetical order would put December before February
            incomes: vec![
                income(trip_id, dec!(10), PaymentStatus::Paid, day(2024, 12, 1)),
                income(trip_id, dec!(20), PaymentStatus::Paid, day(2024, 2, 1)),
            ],
            fuel_records: vec![fuel(truck_id, dec!(5), at(2024, 8, 1))],
            ..FleetSnapshot::default()
        };

        let series = compute_monthly_series(&snapshot);
        let names: Vec<_> = series.iter().map(|b| b.month.as_str()).collect();
        assert_eq!(names, ["February", "August", "December"]);
        assert_eq!(series[1].profit, dec!(-5));
    }

    #[test]
    fn revenue_follows_due_date_not_paid_date() {
        let mut inc = income(uuid::Uuid::new_v4(), dec!(300), PaymentStatus::Paid, day(2024, 1, 31));
        inc.paid_date = Some(at(2024, 4, 2));
        let snapshot = FleetSnapshot { incomes: vec![inc], ..FleetSnapshot::default() };

        let series = compute_monthly_series(&snapshot);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].month_index, 0);
    }

    #[test]
    fn same_month_of_different_years_shares_a_bucket() {
        let trip_id = uuid::Uuid::new_v4();
        let snapshot = FleetSnapshot {
            incomes: vec![
                income(trip_id, dec!(100), PaymentStatus::Paid, day(2023, 5, 1)),
                income(trip_id, dec!(50), PaymentStatus::Paid, day(2024, 5, 1)),
            ],
            ..FleetSnapshot::default()
        };

        let all = compute_monthly_series(&snapshot);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].revenue, dec!(150));

        let only_2024 = compute_monthly_series_for_year(&snapshot, 2024);
        assert_eq!(only_2024[0].revenue, dec!(50));
        assert!(compute_monthly_series_for_year(&snapshot, 2022).is_empty());
    }

    #[test]
    fn bucket_revenue_matches_dashboard_total() {
        let truck_id = uuid::Uuid::new_v4();
        let trip_id = uuid::Uuid::new_v4();
        let snapshot = FleetSnapshot {
            incomes: vec![
                income(trip_id, dec!(1000), PaymentStatus::Pending, day(2024, 3, 20)),
                income(trip_id, dec!(333.33), PaymentStatus::Overdue, day(2024, 7, 2)),
                income(uuid::Uuid::new_v4(), dec!(12.5), PaymentStatus::Paid, day(2024, 11, 9)),
            ],
            expenses: vec![expense(trip_id, dec!(40), at(2024, 6, 1))],
            fuel_records: vec![fuel(truck_id, dec!(60), at(2024, 3, 1))],
            maintenance_records: vec![maintenance(truck_id, dec!(70), at(2024, 9, 1))],
            ..FleetSnapshot::default()
        };

        let series = compute_monthly_series(&snapshot);
        let stats = compute_dashboard_stats(&snapshot);

        let revenue: Decimal = series.iter().map(|b| b.revenue).sum();
        let expenses: Decimal = series.iter().map(|b| b.expenses).sum();
        assert_eq!(revenue, stats.total_revenue);
        assert_eq!(expenses, stats.total_expenses);
    }

    #[test]
    fn empty_snapshot_has_no_buckets() {
        assert!(compute_monthly_series(&FleetSnapshot::default()).is_empty());
    }

    #[test]
    fn repeated_calls_are_identical() {
        let snapshot = FleetSnapshot {
            incomes: vec![income(uuid::Uuid::new_v4(), dec!(1), PaymentStatus::Paid, day(2024, 1, 1))],
            ..FleetSnapshot::default()
        };
        assert_eq!(compute_monthly_series(&snapshot), compute_monthly_series(&snapshot));
    }
}
