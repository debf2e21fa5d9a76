// src/analytics/profitability.rs

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::{margin_percent, FleetSnapshot};
use crate::models::reports::TruckProfitRow;

#[derive(Debug, Default, Clone, Copy)]
struct TruckTotals {
    income: Decimal,
    expenses: Decimal,
    trips: u64,
}

/// One row per truck, in input order.
///
/// Incomes and trip expenses are attributed through trip -> truck; fuel and
/// maintenance through their own `truck_id`. Records whose trip or truck is
/// not in the snapshot end up in no row.
pub fn compute_truck_profitability(snapshot: &FleetSnapshot) -> Vec<TruckProfitRow> {
    let truck_of_trip: HashMap<Uuid, Uuid> = snapshot
        .trips
        .iter()
        .map(|trip| (trip.id, trip.truck_id))
        .collect();

    let mut totals: HashMap<Uuid, TruckTotals> = HashMap::with_capacity(snapshot.trucks.len());

    for trip in &snapshot.trips {
        totals.entry(trip.truck_id).or_default().trips += 1;
    }

    for income in &snapshot.incomes {
        if let Some(truck_id) = truck_of_trip.get(&income.trip_id) {
            totals.entry(*truck_id).or_default().income += income.amount;
        }
    }

    for expense in &snapshot.expenses {
        if let Some(truck_id) = truck_of_trip.get(&expense.trip_id) {
            totals.entry(*truck_id).or_default().expenses += expense.amount;
        }
    }

    let direct_costs = snapshot
        .fuel_records
        .iter()
        .map(|f| (f.truck_id, f.cost))
        .chain(snapshot.maintenance_records.iter().map(|m| (m.truck_id, m.cost)));
    for (truck_id, cost) in direct_costs {
        totals.entry(truck_id).or_default().expenses += cost;
    }

    snapshot
        .trucks
        .iter()
        .map(|truck| {
            let t = totals.get(&truck.id).copied().unwrap_or_default();
            let profit = t.income - t.expenses;
            TruckProfitRow {
                id: truck.id,
                name: truck.plate_number.clone(),
                model: truck.model.clone(),
                income: t.income,
                expenses: t.expenses,
                profit,
                trips: t.trips,
                margin: margin_percent(profit, t.income),
            }
        })
        .collect()
}
