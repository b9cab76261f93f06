pub mod component_controller;

pub use component_controller::configure_component_routes;
