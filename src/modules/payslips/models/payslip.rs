use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One rendered payslip line, name and whole-rupee amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayslipLine {
    pub name: String,
    pub amount: Decimal,
}

/// A presentation-ready payslip, assembled fresh per request from a locked
/// monthly record plus employee master fields. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payslip {
    pub employee_code: String,
    pub employee_name: String,
    pub designation: Option<String>,
    pub department: Option<String>,

    pub pay_period_start: NaiveDate,
    pub pay_period_end: NaiveDate,

    pub earnings: Vec<PayslipLine>,
    pub deductions: Vec<PayslipLine>,

    pub total_earnings: Decimal,
    pub total_deductions: Decimal,
    pub net_pay: Decimal,
    pub net_pay_in_words: String,

    pub paid_days: Decimal,
    pub working_days: Decimal,
    pub lop_days: Decimal,
}
