use std::collections::HashSet;

use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::modules::shifts::models::shift::normalized_name;
use crate::modules::shifts::models::Shift;

/// Shift upload columns. The name column accepts either header; the rest
/// are optional and extra columns are ignored.
const NAME_COLUMNS: [&str; 2] = ["Shift Name", "Name"];
const COLUMN_START_TIME: &str = "Start Time";
const COLUMN_END_TIME: &str = "End Time";
const COLUMN_STATUS: &str = "Status";
const COLUMN_IN_GRACE: &str = "In Grace";
const COLUMN_OUT_GRACE: &str = "Out Grace";
const COLUMN_START_REMINDER: &str = "Start Reminder";
const COLUMN_END_REMINDER: &str = "End Reminder";

#[derive(Debug, Clone, Serialize)]
pub struct ShiftRejectedRow {
    /// 1-based position in the uploaded sheet
    pub row: usize,
    pub reason: String,
}

/// Result of one shift import: rows to insert, rows skipped as duplicates
/// (counted separately from hard rejections), and per-row rejections.
#[derive(Debug, Serialize)]
pub struct ShiftImportOutcome {
    pub accepted: Vec<Shift>,
    pub skipped: Vec<String>,
    pub rejected: Vec<ShiftRejectedRow>,
}

/// The shift flavor of the import reconciliation pattern: validate required
/// fields per row, skip duplicates against both the persisted shifts and
/// earlier rows of the same batch, and stage the rest for one batch insert.
pub struct ShiftImporter;

impl ShiftImporter {
    pub fn reconcile(
        sheet: &[serde_json::Map<String, Value>],
        existing_names: &HashSet<String>,
    ) -> ShiftImportOutcome {
        let mut accepted: Vec<Shift> = Vec::new();
        let mut skipped: Vec<String> = Vec::new();
        let mut rejected: Vec<ShiftRejectedRow> = Vec::new();
        let mut seen: HashSet<String> = existing_names.clone();

        for (index, raw) in sheet.iter().enumerate() {
            let row_number = index + 1;

            // An empty cell under one name header must not shadow the other
            let name = NAME_COLUMNS.iter().find_map(|column| {
                Self::cell(raw, column).filter(|value| !value.trim().is_empty())
            });
            let start_time = Self::cell(raw, COLUMN_START_TIME);
            let end_time = Self::cell(raw, COLUMN_END_TIME);

            let (name, start_time, end_time) = match (name, start_time, end_time) {
                (Some(name), Some(start), Some(end))
                    if !name.trim().is_empty()
                        && !start.trim().is_empty()
                        && !end.trim().is_empty() =>
                {
                    (name, start, end)
                }
                _ => {
                    rejected.push(ShiftRejectedRow {
                        row: row_number,
                        reason: "missing name, start time or end time".to_string(),
                    });
                    continue;
                }
            };

            let key = normalized_name(&name);
            if seen.contains(&key) {
                // Existing shift stays untouched; the row is only counted
                skipped.push(name.trim().to_string());
                continue;
            }
            seen.insert(key);

            let mut shift = Shift::new(name, start_time, end_time);
            if let Some(status) = Self::cell(raw, COLUMN_STATUS) {
                if !status.trim().is_empty() {
                    shift.status = status.trim().to_string();
                }
            }
            shift.in_grace_minutes = Self::cell(raw, COLUMN_IN_GRACE)
                .and_then(|value| value.trim().parse::<i64>().ok());
            shift.out_grace_minutes = Self::cell(raw, COLUMN_OUT_GRACE)
                .and_then(|value| value.trim().parse::<i64>().ok());
            shift.start_reminder = Self::cell(raw, COLUMN_START_REMINDER)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty());
            shift.end_reminder = Self::cell(raw, COLUMN_END_REMINDER)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty());

            accepted.push(shift);
        }

        info!(
            "Reconciled shift import: {} to insert, {} skipped, {} rejected",
            accepted.len(),
            skipped.len(),
            rejected.len()
        );

        ShiftImportOutcome {
            accepted,
            skipped,
            rejected,
        }
    }

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
