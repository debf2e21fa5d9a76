pub mod cost_service;
pub mod dashboard_service;
pub mod fleet_service;
pub mod income_service;
pub mod report_service;
