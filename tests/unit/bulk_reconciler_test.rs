use std::collections::HashSet;

use rust_decimal_macros::dec;
use serde_json::{json, Map, Value};

use vetan::config::StatutoryRates;
use vetan::modules::components::models::{
    CalculationBasis, ComponentDefinition, ComponentKind, ComponentRegistry,
};
use vetan::modules::structures::services::{BulkReconciler, GrossImportRow, RejectReason};

fn registry() -> ComponentRegistry {
    let basic = ComponentDefinition::new(
        ComponentKind::Earning,
        "Basic Salary".to_string(),
        CalculationBasis::Gross,
        dec!(50),
        dec!(0),
    )
    .expect("valid component");
    let pf = ComponentDefinition::new(
        ComponentKind::Deduction,
        "PF".to_string(),
        CalculationBasis::Basic,
        dec!(0),
        dec!(0),
    )
    .expect("valid component");
    ComponentRegistry::new(&[basic], &[pf], &[])
}

fn known_codes(codes: &[&str]) -> HashSet<String> {
    codes.iter().map(|code| code.to_string()).collect()
}

fn row(code: &str, gross: &str) -> GrossImportRow {
    GrossImportRow {
        employee_code: code.to_string(),
        gross: gross.to_string(),
    }
}

fn sheet_row(value: Value) -> Map<String, Value> {
    value.as_object().expect("object row").clone()
}

#[test]
fn test_accepted_row_carries_computed_structure() {
    let rows = vec![row("EMP001", "30000")];
    let outcome = BulkReconciler::reconcile(
        &rows,
        &known_codes(&["EMP001"]),
        &registry(),
        &StatutoryRates::default(),
    );

    assert_eq!(outcome.accepted.len(), 1);
    assert!(outcome.rejected.is_empty());

    let structure = &outcome.accepted[0];
    assert_eq!(structure.employee_code, "EMP001");
    assert_eq!(structure.monthly_gross, dec!(30000));
    assert_eq!(structure.basic_salary, dec!(15000));
    // PF default 12% of basic
    assert_eq!(structure.deductions[0].amount, dec!(1800));
}

/// Rejections never stop the rest of the batch
#[test]
fn test_full_batch_error_reporting() {
    let rows = vec![
        row("GHOST", "30000"),
        row("EMP001", "not a number"),
        row("EMP002", "-5"),
        row("EMP002", "45,000"),
    ];
    let outcome = BulkReconciler::reconcile(
        &rows,
        &known_codes(&["EMP001", "EMP002"]),
        &registry(),
        &StatutoryRates::default(),
    );

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].employee_code, "EMP002");
    // comma separators are tolerated in amounts
    assert_eq!(outcome.accepted[0].monthly_gross, dec!(45000));

    assert_eq!(outcome.rejected.len(), 3);
    assert_eq!(outcome.rejected[0].employee_code, "GHOST");
    assert_eq!(outcome.rejected[0].reason, RejectReason::NotFound);
    assert_eq!(outcome.rejected[1].reason, RejectReason::InvalidAmount);
    assert_eq!(outcome.rejected[2].reason, RejectReason::InvalidAmount);
}

#[test]
fn test_zero_gross_is_invalid() {
    let rows = vec![row("EMP001", "0")];
    let outcome = BulkReconciler::reconcile(
        &rows,
        &known_codes(&["EMP001"]),
        &registry(),
        &StatutoryRates::default(),
    );

    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.rejected[0].reason, RejectReason::InvalidAmount);
}

/// A duplicate code in one batch collapses to its last row, matching what
/// the keyed upsert would do anyway
#[test]
fn test_duplicate_code_last_row_wins() {
    let rows = vec![row("EMP001", "30000"), row("EMP001", "40000")];
    let outcome = BulkReconciler::reconcile(
        &rows,
        &known_codes(&["EMP001"]),
        &registry(),
        &StatutoryRates::default(),
    );

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].monthly_gross, dec!(40000));
    assert!(outcome.rejected.is_empty());
}

#[test]
fn test_rows_from_sheet_reads_headers_case_insensitively() {
    let sheet = vec![sheet_row(json!({
        " employee code ": "EMP001",
        "MONTHLY GROSS SALARY": 30000,
    }))];

    let rows = BulkReconciler::rows_from_sheet(&sheet);
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_code, "EMP001");
    // numeric cells are stringified, validation happens later per row
    assert_eq!(rows[0].gross, "30000");
}

/// Rows lacking a required cell are rejected individually; the rest of the
/// batch still goes through
#[test]
fn test_missing_cells_reject_per_row() {
    let sheet = vec![
        sheet_row(json!({ "Employee Code": "EMP001" })),
        sheet_row(json!({ "Monthly Gross Salary": "30000" })),
        sheet_row(json!({
            "Employee Code": "EMP002",
            "Monthly Gross Salary": "45000",
        })),
    ];

    let rows = BulkReconciler::rows_from_sheet(&sheet);
    let outcome = BulkReconciler::reconcile(
        &rows,
        &known_codes(&["EMP001", "EMP002"]),
        &registry(),
        &StatutoryRates::default(),
    );

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].employee_code, "EMP002");

    assert_eq!(outcome.rejected.len(), 2);
    assert_eq!(outcome.rejected[0].employee_code, "EMP001");
    assert_eq!(outcome.rejected[0].reason, RejectReason::MissingAmount);
    assert_eq!(outcome.rejected[1].employee_code, "");
    assert_eq!(outcome.rejected[1].reason, RejectReason::MissingCode);
}

#[test]
fn test_empty_sheet_reconciles_to_nothing() {
    let rows = BulkReconciler::rows_from_sheet(&[]);
    let outcome = BulkReconciler::reconcile(
        &rows,
        &known_codes(&["EMP001"]),
        &registry(),
        &StatutoryRates::default(),
    );

    assert!(outcome.accepted.is_empty());
    assert!(outcome.rejected.is_empty());
}

/// Whitespace around codes in the sheet must not defeat the directory match
#[test]
fn test_employee_code_is_trimmed() {
    let sheet = vec![sheet_row(json!({
        "Employee Code": "  EMP001  ",
        "Monthly Gross Salary": "30000",
    }))];

    let rows = BulkReconciler::rows_from_sheet(&sheet);
    assert_eq!(rows[0].employee_code, "EMP001");

    let outcome = BulkReconciler::reconcile(
        &rows,
        &known_codes(&["EMP001"]),
        &registry(),
        &StatutoryRates::default(),
    );
    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].employee_code, "EMP001");
}
