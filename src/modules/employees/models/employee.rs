use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Employee master record, supplied by the external directory service.
///
/// Read-only from this service's perspective; `employee_code` is the sole
/// join key between the directory, salary structures and monthly payroll.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub employee_code: String,
    pub first_name: String,
    pub last_name: String,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub date_of_joining: Option<NaiveDate>,
    pub bank_name: Option<String>,
    pub account_no: Option<String>,
    pub ifsc_code: Option<String>,
    pub uan_no: Option<String>,
    pub esic_no: Option<String>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.last_name);
        name.trim().to_string()
    }
}
