// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(title = "Fleet Backend", description = "Trucks, drivers, trips, costs and trip income"),
    paths(
        handlers::dashboard::health,

        // --- Dashboard ---
        handlers::dashboard::get_stats,
        handlers::dashboard::get_fleet_status,
        handlers::dashboard::get_recent_trips,

        // --- Reports ---
        handlers::reports::get_monthly,
        handlers::reports::export_monthly,
        handlers::reports::get_truck_profitability,
        handlers::reports::get_overview,

        // --- Fleet ---
        handlers::trucks::list_trucks,
        handlers::trucks::get_truck,
        handlers::trucks::create_truck,
        handlers::trucks::update_truck,
        handlers::trucks::delete_truck,
        handlers::drivers::list_drivers,
        handlers::drivers::get_driver,
        handlers::drivers::create_driver,
        handlers::drivers::update_driver,
        handlers::drivers::delete_driver,
        handlers::trips::list_trips,
        handlers::trips::get_trip,
        handlers::trips::create_trip,
        handlers::trips::update_trip,
        handlers::trips::update_trip_status,
        handlers::trips::delete_trip,

        // --- Costs ---
        handlers::costs::list_fuel_records,
        handlers::costs::create_fuel_record,
        handlers::costs::update_fuel_record,
        handlers::costs::delete_fuel_record,
        handlers::costs::list_maintenance_records,
        handlers::costs::create_maintenance_record,
        handlers::costs::update_maintenance_record,
        handlers::costs::delete_maintenance_record,
        handlers::costs::list_trip_expenses,
        handlers::costs::list_trip_expenses_by_trip,
        handlers::costs::create_trip_expense,
        handlers::costs::update_trip_expense,
        handlers::costs::delete_trip_expense,

        // --- Income ---
        handlers::incomes::list_trip_incomes,
        handlers::incomes::list_trip_incomes_by_trip,
        handlers::incomes::get_trip_ledger,
        handlers::incomes::create_trip_income,
        handlers::incomes::update_trip_income,
        handlers::incomes::delete_trip_income,
    ),
    components(
        schemas(
            // --- Fleet ---
            models::truck::TruckStatus,
            models::truck::Truck,
            models::truck::TruckPayload,
            models::driver::DriverStatus,
            models::driver::Driver,
            models::driver::DriverPayload,
            models::trip::TripStatus,
            models::trip::Trip,
            models::trip::TripPayload,

            // --- Costs ---
            models::fuel::FuelRecord,
            models::fuel::FuelRecordPayload,
            models::maintenance::MaintenanceType,
            models::maintenance::MaintenanceRecord,
            models::maintenance::MaintenanceRecordPayload,
            models::finance::ExpenseType,
            models::finance::TripExpense,
            models::finance::TripExpensePayload,

            // --- Income ---
            models::finance::PaymentStatus,
            models::finance::TripIncome,
            models::finance::CreateTripIncomePayload,
            models::finance::UpdateTripIncomePayload,
            models::finance::TripLedger,

            // --- Dashboard & reports ---
            models::dashboard::DashboardStats,
            models::dashboard::FleetStatusBreakdown,
            models::dashboard::RecentTripRow,
            models::reports::MonthlyBucket,
            models::reports::TruckProfitRow,
            models::reports::ReportOverview,
        )
    ),
    tags(
        (name = "Health", description = "Liveness check"),
        (name = "Dashboard", description = "Fleet-wide indicators"),
        (name = "Reports", description = "Monthly series, per-truck profitability and exports"),
        (name = "Trucks", description = "Truck registry"),
        (name = "Drivers", description = "Driver registry"),
        (name = "Trips", description = "Trip planning and status"),
        (name = "Fuel", description = "Fuel fill-ups"),
        (name = "Maintenance", description = "Maintenance jobs"),
        (name = "Trip expenses", description = "Costs incurred on a trip"),
        (name = "Trip incomes", description = "Receivables and payment status per trip")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_route_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/dashboard/stats",
            "/api/reports/monthly/export",
            "/api/trips/{id}/status",
            "/api/trip-incomes/trip/{trip_id}/ledger",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }

    #[test]
    fn cost_records_document_edits() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/fuel-records/{id}",
            "/api/maintenance-records/{id}",
            "/api/trip-expenses/{id}",
        ] {
            let item = &doc.paths.paths[path];
            assert!(item.put.is_some(), "{path} has no PUT");
            assert!(item.delete.is_some(), "{path} has no DELETE");
        }
    }
}
