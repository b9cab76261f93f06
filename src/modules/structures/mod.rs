pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{DeductionLine, EarningLine, EmployerLine, SalaryStructure, StructureBreakdown};
pub use repositories::StructureRepository;
pub use services::{BulkReconciler, StructureCalculator};
