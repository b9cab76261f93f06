pub mod controllers;
pub mod models;
pub mod services;

pub use models::{PayrollSummary, RegisterRow};
pub use services::ReportService;
