pub mod components;
pub mod employees;
pub mod payslips;
pub mod reports;
pub mod shifts;
pub mod structures;
