pub mod payslip_controller;

pub use payslip_controller::configure_payslip_routes;
