//! Fleet management backend: truck, driver and trip registry, cost and
//! income bookkeeping, and the aggregation engine behind the dashboard and
//! report endpoints.

pub mod analytics;
pub mod common;
pub mod config;
pub mod db;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
