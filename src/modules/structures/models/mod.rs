pub mod salary_structure;

pub use salary_structure::{
    DeductionLine, EarningLine, EmployerLine, SalaryStructure, StructureBreakdown,
};
