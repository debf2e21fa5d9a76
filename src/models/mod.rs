pub mod dashboard;
pub mod driver;
pub mod finance;
pub mod fuel;
pub mod maintenance;
pub mod reports;
pub mod trip;
pub mod truck;
