pub mod cost_repo;
pub mod driver_repo;
pub mod finance_repo;
pub mod memory_store;
pub mod pg_store;
pub mod store;
pub mod trip_repo;
pub mod truck_repo;

pub use memory_store::InMemoryFleetStore;
pub use pg_store::PgFleetStore;
pub use store::FleetStore;
