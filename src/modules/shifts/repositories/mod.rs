pub mod shift_repository;

pub use shift_repository::ShiftRepository;
