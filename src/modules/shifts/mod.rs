pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::Shift;
pub use repositories::ShiftRepository;
pub use services::ShiftImporter;
