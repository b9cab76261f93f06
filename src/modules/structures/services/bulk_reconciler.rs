use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::config::StatutoryRates;
use crate::core::money::parse_positive_amount;
use crate::modules::components::models::ComponentRegistry;
use crate::modules::structures::models::SalaryStructure;
use crate::modules::structures::services::StructureCalculator;

/// Required spreadsheet columns for the gross-salary bulk upload.
/// Extra columns are ignored.
const COLUMN_EMPLOYEE_CODE: &str = "Employee Code";
const COLUMN_MONTHLY_GROSS: &str = "Monthly Gross Salary";

/// One import row, as lifted from the spreadsheet. The gross cell is kept
/// raw so amount validation is reported per row, not at parse time.
#[derive(Debug, Clone, Deserialize)]
pub struct GrossImportRow {
    pub employee_code: String,
    pub gross: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    #[serde(rename = "not found")]
    NotFound,
    #[serde(rename = "invalid amount")]
    InvalidAmount,
    #[serde(rename = "missing employee code")]
    MissingCode,
    #[serde(rename = "missing amount")]
    MissingAmount,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NotFound => write!(f, "not found"),
            RejectReason::InvalidAmount => write!(f, "invalid amount"),
            RejectReason::MissingCode => write!(f, "missing employee code"),
            RejectReason::MissingAmount => write!(f, "missing amount"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RejectedRow {
    pub employee_code: String,
    pub reason: RejectReason,
}

/// Result of reconciling one import batch. Always complete: every row lands
/// in exactly one of the two lists, so the caller can report the full error
/// list alongside the accepted count.
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileOutcome {
    pub accepted: Vec<SalaryStructure>,
    pub rejected: Vec<RejectedRow>,
}

/// Validates a batch of (employee code, gross) rows against the known
/// employee set, runs the structure calculator per accepted row, and stages
/// an upsert batch keyed by employee code.
pub struct BulkReconciler;

impl BulkReconciler {
    /// Lift import rows out of parsed spreadsheet rows (objects keyed by
    /// column header). A missing cell lifts to an empty value and is
    /// rejected per row during reconciliation, so a sparse or misheadered
    /// sheet still yields a complete error list.
    pub fn rows_from_sheet(sheet: &[serde_json::Map<String, Value>]) -> Vec<GrossImportRow> {
        sheet
            .iter()
            .map(|raw| GrossImportRow {
                employee_code: Self::cell(raw, COLUMN_EMPLOYEE_CODE)
                    .unwrap_or_default()
                    .trim()
                    .to_string(),
                gross: Self::cell(raw, COLUMN_MONTHLY_GROSS).unwrap_or_default(),
            })
            .collect()
    }

    /// Reconcile the full batch. No short-circuit: rejected rows are
    /// collected while the rest of the batch proceeds. A duplicate employee
    /// code within the batch collapses to its last row, mirroring the
    /// upsert's last-writer-wins behavior.
    pub fn reconcile(
        rows: &[GrossImportRow],
        known_codes: &HashSet<String>,
        registry: &ComponentRegistry,
        rates: &StatutoryRates,
    ) -> ReconcileOutcome {
        let calculator = StructureCalculator::new(registry, rates);

        let mut accepted: Vec<SalaryStructure> = Vec::new();
        let mut staged: HashMap<String, usize> = HashMap::new();
        let mut rejected: Vec<RejectedRow> = Vec::new();

        for row in rows {
            if row.employee_code.is_empty() {
                rejected.push(RejectedRow {
                    employee_code: String::new(),
                    reason: RejectReason::MissingCode,
                });
                continue;
            }

            if !known_codes.contains(&row.employee_code) {
                rejected.push(RejectedRow {
                    employee_code: row.employee_code.clone(),
                    reason: RejectReason::NotFound,
                });
                continue;
            }

            if row.gross.trim().is_empty() {
                rejected.push(RejectedRow {
                    employee_code: row.employee_code.clone(),
                    reason: RejectReason::MissingAmount,
                });
                continue;
            }

            let gross = match parse_positive_amount(&row.gross) {
                Some(gross) => gross,
                None => {
                    rejected.push(RejectedRow {
                        employee_code: row.employee_code.clone(),
                        reason: RejectReason::InvalidAmount,
                    });
                    continue;
                }
            };

            let structure = SalaryStructure::from_breakdown(
                row.employee_code.clone(),
                calculator.compute(gross),
            );

            match staged.get(&row.employee_code) {
                Some(&index) => accepted[index] = structure,
                None => {
                    staged.insert(row.employee_code.clone(), accepted.len());
                    accepted.push(structure);
                }
            }
        }

        info!(
            "Reconciled salary import: {} accepted, {} rejected",
            accepted.len(),
            rejected.len()
        );

        ReconcileOutcome { accepted, rejected }
    }

    /// Read one cell by header name; header match is trimmed and
    /// case-insensitive, numeric cells are stringified.
    fn cell(row: &serde_json::Map<String, Value>, column: &str) -> Option<String> {
        let wanted = column.to_lowercase();
        row.iter()
            .find(|(header, _)| header.trim().to_lowercase() == wanted)
            .map(|(_, value)| match value {
                Value::String(text) => text.clone(),
                Value::Number(number) => number.to_string(),
                _ => String::new(),
            })
    }
}
