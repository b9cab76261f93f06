pub mod structure_controller;

pub use structure_controller::configure_structure_routes;
