pub mod costs;
pub mod dashboard;
pub mod drivers;
pub mod incomes;
pub mod reports;
pub mod trips;
pub mod trucks;
