use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Dashboard totals plus per-component statutory rollups over one month's
/// assembled payslips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollSummary {
    pub employee_count: usize,
    pub total_earnings: Decimal,
    pub total_deductions: Decimal,
    pub total_net_pay: Decimal,

    /// Employee-side provident fund, read from deduction lines
    pub employee_pf: Decimal,
    /// Employee-side ESI, read from deduction lines
    pub employee_esi: Decimal,
    /// Employer-side provident fund, derived from the employee figure via
    /// the configured rate split
    pub employer_pf: Decimal,
    /// Employer-side ESI, derived — not read — via the report rate split;
    /// a documented approximation when custom ESI percentages are in play
    pub employer_esi: Decimal,
    /// Salary advances recovered this month
    pub advances: Decimal,
}

/// One row of the flat payroll register export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRow {
    pub employee_code: String,
    pub employee_name: String,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub paid_days: Decimal,
    pub total_earnings: Decimal,
    pub total_deductions: Decimal,
    pub net_pay: Decimal,
    pub ctc: Decimal,
    pub bank_name: Option<String>,
    pub account_no: Option<String>,
    pub ifsc_code: Option<String>,
}
