use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::modules::employees::models::Employee;
use crate::modules::payslips::models::Payslip;
use crate::modules::reports::models::{PayrollSummary, RegisterRow};
use crate::modules::structures::models::SalaryStructure;

/// Rolls a set of assembled payslips up into dashboard totals, statutory
/// rollups and the flat register export.
pub struct ReportService;

impl ReportService {
    /// Aggregate one month's payslips.
    ///
    /// Statutory rollups are name-based lookups into each payslip's
    /// deduction list; an employee with no matching line contributes zero
    /// and still counts toward `employee_count`. Employer figures are
    /// derived from the employee figures via the configured rate splits
    /// rather than read from anywhere — a documented approximation when a
    /// registry carries custom percentages.
    pub fn summarize(payslips: &[Payslip], rates: &StatutoryRates) -> PayrollSummary {
        let mut summary = PayrollSummary {
            employee_count: payslips.len(),
            total_earnings: Decimal::ZERO,
            total_deductions: Decimal::ZERO,
            total_net_pay: Decimal::ZERO,
            employee_pf: Decimal::ZERO,
            employee_esi: Decimal::ZERO,
            employer_pf: Decimal::ZERO,
            employer_esi: Decimal::ZERO,
            advances: Decimal::ZERO,
        };

        for payslip in payslips {
            summary.total_earnings += payslip.total_earnings;
            summary.total_deductions += payslip.total_deductions;
            summary.total_net_pay += payslip.net_pay;

            // Voluntary PF is a generic deduction, not the statutory one
            summary.employee_pf += Self::deduction_total(payslip, |name| {
                (name.contains("pf") || name.contains("provident")) && !name.contains("vol")
            });
            summary.employee_esi += Self::deduction_total(payslip, |name| name.contains("esi"));
            summary.advances += Self::deduction_total(payslip, |name| name.contains("advance"));
        }

        if rates.pf_employee_percent > Decimal::ZERO {
            summary.employer_pf =
                summary.employee_pf * rates.pf_employer_percent / rates.pf_employee_percent;
        }
        if rates.esi_employee_percent > Decimal::ZERO {
            summary.employer_esi = summary.employee_esi * rates.esi_employer_report_percent
                / rates.esi_employee_percent;
        }

        summary
    }

    /// Build the flat register export: one row per payslip, enriched with
    /// bank details from the employee master and CTC from the persisted
    /// structure (zero when no structure is assigned).
    pub fn build_register(
        payslips: &[Payslip],
        employees: &HashMap<String, Employee>,
        structures: &HashMap<String, SalaryStructure>,
    ) -> Vec<RegisterRow> {
        payslips
            .iter()
            .map(|payslip| {
                let employee = employees.get(&payslip.employee_code);
                let ctc = structures
                    .get(&payslip.employee_code)
                    .map(|structure| structure.ctc)
                    .unwrap_or(Decimal::ZERO);

                RegisterRow {
                    employee_code: payslip.employee_code.clone(),
                    employee_name: payslip.employee_name.clone(),
                    department: payslip.department.clone(),
                    designation: payslip.designation.clone(),
                    paid_days: payslip.paid_days,
                    total_earnings: payslip.total_earnings,
                    total_deductions: payslip.total_deductions,
                    net_pay: payslip.net_pay,
                    ctc,
                    bank_name: employee.and_then(|e| e.bank_name.clone()),
                    account_no: employee.and_then(|e| e.account_no.clone()),
                    ifsc_code: employee.and_then(|e| e.ifsc_code.clone()),
                }
            })
            .collect()
    }

    fn deduction_total(payslip: &Payslip, matches: impl Fn(&str) -> bool) -> Decimal {
        payslip
            .deductions
            .iter()
            .filter(|line| matches(&line.name.to_lowercase()))
            .map(|line| line.amount)
            .sum()
    }
}
