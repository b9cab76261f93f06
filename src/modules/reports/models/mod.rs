pub mod payroll_summary;

pub use payroll_summary::{PayrollSummary, RegisterRow};
