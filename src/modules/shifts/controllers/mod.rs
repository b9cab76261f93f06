pub mod shift_controller;

pub use shift_controller::configure_shift_routes;
