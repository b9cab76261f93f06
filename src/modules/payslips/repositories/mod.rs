pub mod monthly_record_repository;

pub use monthly_record_repository::MonthlyRecordRepository;
