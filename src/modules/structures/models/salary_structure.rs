use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An itemized earnings line. Name and amount are copied from the component
/// master at computation time; `component_id` is a weak reference back to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningLine {
    pub component_id: String,
    pub name: String,
    pub amount: Decimal,
}

/// An itemized deduction line (reduces net pay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionLine {
    pub component_id: String,
    pub name: String,
    pub amount: Decimal,
}

/// An employer-side contribution line. Adds to CTC only; never reduces net.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerLine {
    pub component_id: String,
    pub name: String,
    pub amount: Decimal,
}

/// The full result of one structure computation. Pure data; every amount is
/// already rounded to whole rupees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureBreakdown {
    pub monthly_gross: Decimal,
    pub basic_salary: Decimal,
    pub earnings: Vec<EarningLine>,
    pub deductions: Vec<DeductionLine>,
    pub employer_additions: Vec<EmployerLine>,
    pub total_earnings: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
    pub ctc: Decimal,
}

/// A persisted salary structure: one row per employee, keyed uniquely by
/// employee code. Re-assignment replaces the row wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStructure {
    pub employee_code: String,
    pub monthly_gross: Decimal,
    pub basic_salary: Decimal,
    pub earnings: Vec<EarningLine>,
    pub deductions: Vec<DeductionLine>,
    pub employer_additions: Vec<EmployerLine>,
    pub total_earnings: Decimal,
    pub total_deductions: Decimal,
    pub net_salary: Decimal,
    pub ctc: Decimal,
}

impl SalaryStructure {
    pub fn from_breakdown(employee_code: String, breakdown: StructureBreakdown) -> Self {
        SalaryStructure {
            employee_code,
            monthly_gross: breakdown.monthly_gross,
            basic_salary: breakdown.basic_salary,
            earnings: breakdown.earnings,
            deductions: breakdown.deductions,
            employer_additions: breakdown.employer_additions,
            total_earnings: breakdown.total_earnings,
            total_deductions: breakdown.total_deductions,
            net_salary: breakdown.net_salary,
            ctc: breakdown.ctc,
        }
    }
}
