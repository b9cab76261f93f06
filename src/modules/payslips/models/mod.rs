pub mod monthly_record;
pub mod payslip;

pub use monthly_record::{EarnedItem, MonthlyRecord};
pub use payslip::{Payslip, PayslipLine};
