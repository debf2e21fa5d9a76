//! Aggregation engine.
//!
//! Pure functions that turn a [`FleetSnapshot`] into dashboard and report
//! figures. Nothing here does I/O or keeps state between calls; referential
//! gaps (a record pointing at a trip or truck that is not in the snapshot)
//! contribute nothing to joined figures instead of failing.

pub mod monthly;
pub mod profitability;
pub mod summary;

pub use monthly::{compute_monthly_series, compute_monthly_series_for_year};
pub use profitability::compute_truck_profitability;
pub use summary::{
    compute_dashboard_stats, compute_fleet_status, compute_report_overview, recent_trips,
};

use rust_decimal::Decimal;

use crate::models::{
    driver::Driver,
    finance::{TripExpense, TripIncome},
    fuel::FuelRecord,
    maintenance::MaintenanceRecord,
    trip::Trip,
    truck::Truck,
};

/// Every entity collection at one point in time.
#[derive(Debug, Clone, Default)]
pub struct FleetSnapshot {
    pub trucks: Vec<Truck>,
    pub drivers: Vec<Driver>,
    pub trips: Vec<Trip>,
    pub incomes: Vec<TripIncome>,
    pub expenses: Vec<TripExpense>,
    pub fuel_records: Vec<FuelRecord>,
    pub maintenance_records: Vec<MaintenanceRecord>,
}

/// `profit / income` as a percentage with one decimal; 0 when there is no income.
pub fn margin_percent(profit: Decimal, income: Decimal) -> Decimal {
    if income.is_zero() {
        return Decimal::ZERO;
    }
    profit
        .checked_div(income)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .map(|pct| pct.round_dp(1))
        .unwrap_or(Decimal::ZERO)
}
