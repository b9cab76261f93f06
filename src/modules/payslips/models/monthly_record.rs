use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Status sentinel a monthly record must carry before payslips are built
/// from it. Anything else (including a malformed or absent status) means
/// "not ready", not an error.
pub const LOCKED_STATUS: &str = "Locked";

/// One attendance-prorated breakdown item on a finalized monthly record.
/// `earned` is the amount after proration, not the structure's full amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedItem {
    pub name: String,
    pub earned: Decimal,
}

/// A finalized (locked) monthly payroll row, keyed by
/// (employee_code, month, year). Persisted by the payroll-run collaborator;
/// this service only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub employee_code: String,
    /// Calendar month name, e.g. "January"
    pub month: String,
    pub year: i32,
    pub status: String,

    pub paid_days: Decimal,
    pub working_days: Decimal,

    /// Structured breakdowns; older records carry only the legacy fields
    pub earnings_breakdown: Option<Vec<EarnedItem>>,
    pub deductions_breakdown: Option<Vec<EarnedItem>>,

    /// Legacy flat fields, used when no structured breakdown exists
    pub basic: Decimal,
    pub hra: Decimal,
    pub special_allowance: Decimal,

    /// Manual adjustments applied at lock time
    pub arrears: Decimal,
    pub advance: Decimal,
    pub tds: Decimal,
    pub other_deduction: Decimal,
}

impl MonthlyRecord {
    pub fn is_locked(&self) -> bool {
        self.status.trim() == LOCKED_STATUS
    }
}
