//! Vetan Payroll Back-Office Library
//!
//! This library provides the core functionality for the Vetan payroll back-office:
//! component master data, salary structure computation, bulk reconciliation,
//! payslip assembly and payroll reporting.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::components;
pub use modules::payslips;
pub use modules::reports;
pub use modules::structures;
