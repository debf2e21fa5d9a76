// src/routes.rs

use axum::{
    routing::{get, patch, put},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers, middleware::cors::cors_layer};

pub fn build_router(app_state: AppState, cors_origins: &[String]) -> Router {
    let dashboard_routes = Router::new()
        .route("/api/dashboard/stats", get(handlers::dashboard::get_stats))
        .route("/api/dashboard/fleet-status", get(handlers::dashboard::get_fleet_status))
        .route("/api/dashboard/recent-trips", get(handlers::dashboard::get_recent_trips));

    let report_routes = Router::new()
        .route("/api/reports/monthly", get(handlers::reports::get_monthly))
        .route("/api/reports/monthly/export", get(handlers::reports::export_monthly))
        .route("/api/reports/trucks", get(handlers::reports::get_truck_profitability))
        .route("/api/reports/overview", get(handlers::reports::get_overview));

    let fleet_routes = Router::new()
        .route(
            "/api/trucks",
            get(handlers::trucks::list_trucks).post(handlers::trucks::create_truck),
        )
        .route(
            "/api/trucks/{id}",
            get(handlers::trucks::get_truck)
                .put(handlers::trucks::update_truck)
                .delete(handlers::trucks::delete_truck),
        )
        .route(
            "/api/drivers",
            get(handlers::drivers::list_drivers).post(handlers::drivers::create_driver),
        )
        .route(
            "/api/drivers/{id}",
            get(handlers::drivers::get_driver)
                .put(handlers::drivers::update_driver)
                .delete(handlers::drivers::delete_driver),
        )
        .route(
            "/api/trips",
            get(handlers::trips::list_trips).post(handlers::trips::create_trip),
        )
        .route(
            "/api/trips/{id}",
            get(handlers::trips::get_trip)
                .put(handlers::trips::update_trip)
                .delete(handlers::trips::delete_trip),
        )
        .route("/api/trips/{id}/status", patch(handlers::trips::update_trip_status));

    let cost_routes = Router::new()
        .route(
            "/api/fuel-records",
            get(handlers::costs::list_fuel_records).post(handlers::costs::create_fuel_record),
        )
        .route(
            "/api/fuel-records/{id}",
            put(handlers::costs::update_fuel_record).delete(handlers::costs::delete_fuel_record),
        )
        .route(
            "/api/maintenance-records",
            get(handlers::costs::list_maintenance_records)
                .post(handlers::costs::create_maintenance_record),
        )
        .route(
            "/api/maintenance-records/{id}",
            put(handlers::costs::update_maintenance_record)
                .delete(handlers::costs::delete_maintenance_record),
        )
        .route(
            "/api/trip-expenses",
            get(handlers::costs::list_trip_expenses).post(handlers::costs::create_trip_expense),
        )
        .route(
            "/api/trip-expenses/{id}",
            put(handlers::costs::update_trip_expense).delete(handlers::costs::delete_trip_expense),
        )
        .route(
            "/api/trip-expenses/trip/{trip_id}",
            get(handlers::costs::list_trip_expenses_by_trip),
        );

    let income_routes = Router::new()
        .route(
            "/api/trip-incomes",
            get(handlers::incomes::list_trip_incomes).post(handlers::incomes::create_trip_income),
        )
        .route(
            "/api/trip-incomes/{id}",
            put(handlers::incomes::update_trip_income).delete(handlers::incomes::delete_trip_income),
        )
        .route(
            "/api/trip-incomes/trip/{trip_id}",
            get(handlers::incomes::list_trip_incomes_by_trip),
        )
        .route(
            "/api/trip-incomes/trip/{trip_id}/ledger",
            get(handlers::incomes::get_trip_ledger),
        );

    Router::new()
        .route("/api/health", get(handlers::dashboard::health))
        .merge(dashboard_routes)
        .merge(report_routes)
        .merge(fleet_routes)
        .merge(cost_routes)
        .merge(income_routes)
        .with_state(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}
