pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{MonthlyRecord, Payslip, PayslipLine};
pub use repositories::MonthlyRecordRepository;
pub use services::PayslipAssembler;
