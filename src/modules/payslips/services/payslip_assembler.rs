use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::core::money::round_rupees;
use crate::core::words::amount_in_words;
use crate::core::{AppError, Result};
use crate::modules::employees::models::Employee;
use crate::modules::payslips::models::{MonthlyRecord, Payslip, PayslipLine};

/// Explicit month-name table. Lookup is case-insensitive and accepts the
/// common three-letter abbreviations.
const MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Resolve a month name to its 1-based calendar index.
pub fn month_index(name: &str) -> Option<u32> {
    let lowered = name.trim().to_lowercase();
    if lowered.is_empty() {
        return None;
    }
    MONTHS
        .iter()
        .position(|month| **month == lowered || (lowered.len() == 3 && month.starts_with(&lowered)))
        .map(|index| index as u32 + 1)
}

/// Maps a locked monthly record plus employee master fields into a
/// presentation-ready payslip.
pub struct PayslipAssembler;

impl PayslipAssembler {
    /// Assemble a payslip. Line ordering is significant: structure-derived
    /// (or legacy) items come first, ad-hoc adjustments are appended after,
    /// so the rendered slip lists statutory/base items before adjustments.
    pub fn assemble(record: &MonthlyRecord, employee: &Employee) -> Result<Payslip> {
        let (pay_period_start, pay_period_end) = Self::pay_period(&record.month, record.year)?;

        let mut earnings: Vec<PayslipLine> = match &record.earnings_breakdown {
            Some(items) if !items.is_empty() => items
                .iter()
                .map(|item| PayslipLine {
                    name: item.name.clone(),
                    amount: round_rupees(item.earned),
                })
                .collect(),
            // Legacy records carry only the three flat fields
            _ => vec![
                PayslipLine {
                    name: "Basic".to_string(),
                    amount: round_rupees(record.basic),
                },
                PayslipLine {
                    name: "HRA".to_string(),
                    amount: round_rupees(record.hra),
                },
                PayslipLine {
                    name: "Special Allowance".to_string(),
                    amount: round_rupees(record.special_allowance),
                },
            ],
        };

        if record.arrears > Decimal::ZERO
            && !earnings
                .iter()
                .any(|line| line.name.eq_ignore_ascii_case("arrears"))
        {
            earnings.push(PayslipLine {
                name: "Arrears".to_string(),
                amount: round_rupees(record.arrears),
            });
        }

        let mut deductions: Vec<PayslipLine> = match &record.deductions_breakdown {
            Some(items) => items
                .iter()
                .map(|item| PayslipLine {
                    name: item.name.clone(),
                    amount: round_rupees(item.earned),
                })
                .collect(),
            None => Vec::new(),
        };

        if record.other_deduction > Decimal::ZERO {
            deductions.push(PayslipLine {
                name: "Other Deduction".to_string(),
                amount: round_rupees(record.other_deduction),
            });
        }
        if record.tds > Decimal::ZERO {
            deductions.push(PayslipLine {
                name: "TDS".to_string(),
                amount: round_rupees(record.tds),
            });
        }
        if record.advance > Decimal::ZERO {
            deductions.push(PayslipLine {
                name: "Advance".to_string(),
                amount: round_rupees(record.advance),
            });
        }

        let total_earnings: Decimal = earnings.iter().map(|line| line.amount).sum();
        let total_deductions: Decimal = deductions.iter().map(|line| line.amount).sum();
        let net_pay = total_earnings - total_deductions;

        let words_amount = net_pay.max(Decimal::ZERO).to_u64().unwrap_or(0);

        Ok(Payslip {
            employee_code: employee.employee_code.clone(),
            employee_name: employee.full_name(),
            designation: employee.designation.clone(),
            department: employee.department.clone(),
            pay_period_start,
            pay_period_end,
            earnings,
            deductions,
            total_earnings,
            total_deductions,
            net_pay,
            net_pay_in_words: amount_in_words(words_amount),
            paid_days: record.paid_days,
            working_days: record.working_days,
            lop_days: record.working_days - record.paid_days,
        })
    }

    /// First and last calendar day of the record's declared month/year.
    fn pay_period(month: &str, year: i32) -> Result<(NaiveDate, NaiveDate)> {
        let month_number = month_index(month)
            .ok_or_else(|| AppError::validation(format!("Unknown month name '{}'", month)))?;

        let start = NaiveDate::from_ymd_opt(year, month_number, 1)
            .ok_or_else(|| AppError::validation(format!("Invalid period {} {}", month, year)))?;

        let end = if month_number == 12 {
            NaiveDate::from_ymd_opt(year, 12, 31)
        } else {
            NaiveDate::from_ymd_opt(year, month_number + 1, 1)
                .and_then(|first_of_next| first_of_next.pred_opt())
        }
        .ok_or_else(|| AppError::validation(format!("Invalid period {} {}", month, year)))?;

        Ok((start, end))
    }
}
