use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use vetan::modules::employees::models::Employee;
use vetan::modules::payslips::models::{EarnedItem, MonthlyRecord};
use vetan::modules::payslips::services::PayslipAssembler;

fn employee() -> Employee {
    Employee {
        employee_code: "EMP001".to_string(),
        first_name: "Asha".to_string(),
        last_name: "Nair".to_string(),
        department: Some("Engineering".to_string()),
        designation: Some("Developer".to_string()),
        date_of_joining: None,
        bank_name: Some("State Bank".to_string()),
        account_no: Some("1234567890".to_string()),
        ifsc_code: Some("SBIN0000001".to_string()),
        uan_no: None,
        esic_no: None,
    }
}

fn locked_record() -> MonthlyRecord {
    MonthlyRecord {
        employee_code: "EMP001".to_string(),
        month: "March".to_string(),
        year: 2025,
        status: "Locked".to_string(),
        paid_days: dec!(28),
        working_days: dec!(30),
        earnings_breakdown: None,
        deductions_breakdown: None,
        basic: dec!(16000),
        hra: dec!(6400),
        special_allowance: dec!(9600),
        arrears: dec!(0),
        advance: dec!(0),
        tds: dec!(0),
        other_deduction: dec!(0),
    }
}

fn item(name: &str, earned: Decimal) -> EarnedItem {
    EarnedItem {
        name: name.to_string(),
        earned,
    }
}

#[test]
fn test_structured_breakdown_drives_the_lines() {
    let mut record = locked_record();
    record.earnings_breakdown = Some(vec![
        item("Basic Salary", dec!(16000)),
        item("HRA", dec!(6400)),
        item("Special Allowance", dec!(9600)),
    ]);
    record.deductions_breakdown = Some(vec![item("PF", dec!(1920))]);
    record.tds = dec!(200);
    record.advance = dec!(1000);

    let payslip = PayslipAssembler::assemble(&record, &employee()).expect("assemble");

    let earning_names: Vec<&str> = payslip.earnings.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(earning_names, vec!["Basic Salary", "HRA", "Special Allowance"]);
    assert_eq!(payslip.total_earnings, dec!(32000));

    // ad-hoc adjustments follow the structure-derived deductions
    let deduction_names: Vec<&str> = payslip.deductions.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(deduction_names, vec!["PF", "TDS", "Advance"]);
    assert_eq!(payslip.total_deductions, dec!(3120));
    assert_eq!(payslip.net_pay, dec!(28880));
}

/// Records predating structured breakdowns fall back to the flat fields
#[test]
fn test_legacy_record_falls_back_to_flat_fields() {
    let payslip = PayslipAssembler::assemble(&locked_record(), &employee()).expect("assemble");

    let names: Vec<&str> = payslip.earnings.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["Basic", "HRA", "Special Allowance"]);
    assert_eq!(payslip.total_earnings, dec!(32000));
    assert!(payslip.deductions.is_empty());
    assert_eq!(payslip.net_pay, dec!(32000));
}

#[test]
fn test_arrears_appended_once() {
    let mut record = locked_record();
    record.arrears = dec!(500);

    let payslip = PayslipAssembler::assemble(&record, &employee()).expect("assemble");
    assert_eq!(payslip.earnings.last().map(|l| l.name.as_str()), Some("Arrears"));
    assert_eq!(payslip.total_earnings, dec!(32500));

    // a breakdown already carrying arrears must not get a second line
    record.earnings_breakdown = Some(vec![
        item("Basic Salary", dec!(16000)),
        item("ARREARS", dec!(500)),
    ]);
    let payslip = PayslipAssembler::assemble(&record, &employee()).expect("assemble");
    let arrears_lines = payslip
        .earnings
        .iter()
        .filter(|l| l.name.eq_ignore_ascii_case("arrears"))
        .count();
    assert_eq!(arrears_lines, 1);
}

/// Zero-valued adjustments never produce lines
#[test]
fn test_zero_adjustments_are_omitted() {
    let mut record = locked_record();
    record.tds = dec!(0);
    record.advance = dec!(0);
    record.other_deduction = dec!(0);

    let payslip = PayslipAssembler::assemble(&record, &employee()).expect("assemble");
    assert!(payslip.deductions.is_empty());
}

#[test]
fn test_pay_period_and_lop_days() {
    let payslip = PayslipAssembler::assemble(&locked_record(), &employee()).expect("assemble");

    assert_eq!(
        payslip.pay_period_start,
        NaiveDate::from_ymd_opt(2025, 3, 1).expect("date")
    );
    assert_eq!(
        payslip.pay_period_end,
        NaiveDate::from_ymd_opt(2025, 3, 31).expect("date")
    );
    assert_eq!(payslip.lop_days, dec!(2));
}

/// Month names are matched case-insensitively, abbreviations included
#[test]
fn test_month_name_variants() {
    let mut record = locked_record();
    record.month = "feb".to_string();
    record.year = 2024;

    let payslip = PayslipAssembler::assemble(&record, &employee()).expect("assemble");
    assert_eq!(
        payslip.pay_period_end,
        NaiveDate::from_ymd_opt(2024, 2, 29).expect("date")
    );
}

#[test]
fn test_unknown_month_is_an_error() {
    let mut record = locked_record();
    record.month = "Smarch".to_string();

    let error = PayslipAssembler::assemble(&record, &employee()).expect_err("bad month");
    assert!(error.to_string().contains("Smarch"));
}

#[test]
fn test_net_pay_in_words() {
    let payslip = PayslipAssembler::assemble(&locked_record(), &employee()).expect("assemble");
    assert_eq!(
        payslip.net_pay_in_words,
        "Thirty Two Thousand Only"
    );
}

/// A net driven negative by adjustments renders a zero words line
#[test]
fn test_negative_net_words_clamp_to_zero() {
    let mut record = locked_record();
    record.advance = dec!(50000);

    let payslip = PayslipAssembler::assemble(&record, &employee()).expect("assemble");
    assert_eq!(payslip.net_pay, dec!(-18000));
    assert_eq!(payslip.net_pay_in_words, "Only");
}

#[test]
fn test_employee_master_fields_carry_over() {
    let payslip = PayslipAssembler::assemble(&locked_record(), &employee()).expect("assemble");
    assert_eq!(payslip.employee_name, "Asha Nair");
    assert_eq!(payslip.department.as_deref(), Some("Engineering"));
    assert_eq!(payslip.designation.as_deref(), Some("Developer"));
}
