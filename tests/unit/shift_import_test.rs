use std::collections::HashSet;

use serde_json::{json, Map, Value};

use vetan::modules::shifts::services::ShiftImporter;

fn sheet_row(value: Value) -> Map<String, Value> {
    value.as_object().expect("object row").clone()
}

fn existing(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| name.to_lowercase()).collect()
}

#[test]
fn test_valid_rows_are_accepted() {
    let sheet = vec![
        sheet_row(json!({
            "Shift Name": "Morning",
            "Start Time": "09:00",
            "End Time": "17:00",
        })),
        sheet_row(json!({
            "Name": "Night",
            "Start Time": "22:00",
            "End Time": "06:00",
            "Status": "Inactive",
            "In Grace": "15",
            "Out Grace": 10,
        })),
    ];

    let outcome = ShiftImporter::reconcile(&sheet, &HashSet::new());

    assert_eq!(outcome.accepted.len(), 2);
    assert!(outcome.skipped.is_empty());
    assert!(outcome.rejected.is_empty());

    let morning = &outcome.accepted[0];
    assert_eq!(morning.name, "Morning");
    assert_eq!(morning.status, "Active");
    assert!(morning.in_grace_minutes.is_none());

    let night = &outcome.accepted[1];
    assert_eq!(night.status, "Inactive");
    assert_eq!(night.in_grace_minutes, Some(15));
    assert_eq!(night.out_grace_minutes, Some(10));
}

/// Name, start time and end time are all required
#[test]
fn test_missing_required_fields_reject_the_row() {
    let sheet = vec![
        sheet_row(json!({ "Shift Name": "Evening", "Start Time": "14:00" })),
        sheet_row(json!({ "Shift Name": "  ", "Start Time": "09:00", "End Time": "17:00" })),
        sheet_row(json!({ "Start Time": "09:00", "End Time": "17:00" })),
    ];

    let outcome = ShiftImporter::reconcile(&sheet, &HashSet::new());

    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.rejected.len(), 3);
    // row numbers are 1-based sheet positions
    assert_eq!(outcome.rejected[0].row, 1);
    assert_eq!(outcome.rejected[2].row, 3);
}

/// A name colliding with a persisted shift is skipped, never updated
#[test]
fn test_duplicate_against_existing_is_skipped() {
    let sheet = vec![sheet_row(json!({
        "Shift Name": "  MORNING ",
        "Start Time": "08:00",
        "End Time": "16:00",
    }))];

    let outcome = ShiftImporter::reconcile(&sheet, &existing(&["Morning"]));

    assert!(outcome.accepted.is_empty());
    assert_eq!(outcome.skipped, vec!["MORNING".to_string()]);
    assert!(outcome.rejected.is_empty());
}

/// The second occurrence within one batch is also a duplicate
#[test]
fn test_duplicate_within_batch_is_skipped() {
    let sheet = vec![
        sheet_row(json!({
            "Shift Name": "General",
            "Start Time": "09:00",
            "End Time": "18:00",
        })),
        sheet_row(json!({
            "Shift Name": "general",
            "Start Time": "10:00",
            "End Time": "19:00",
        })),
    ];

    let outcome = ShiftImporter::reconcile(&sheet, &HashSet::new());

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].start_time, "09:00");
    assert_eq!(outcome.skipped.len(), 1);
}

/// Skips, rejections and inserts coexist in one batch
#[test]
fn test_mixed_batch_counts() {
    let sheet = vec![
        sheet_row(json!({
            "Shift Name": "Morning",
            "Start Time": "09:00",
            "End Time": "17:00",
        })),
        sheet_row(json!({
            "Shift Name": "Night",
            "Start Time": "22:00",
            "End Time": "06:00",
        })),
        sheet_row(json!({ "Shift Name": "Broken" })),
    ];

    let outcome = ShiftImporter::reconcile(&sheet, &existing(&["night"]));

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].name, "Morning");
    assert_eq!(outcome.skipped, vec!["Night".to_string()]);
    assert_eq!(outcome.rejected.len(), 1);
    assert_eq!(outcome.rejected[0].row, 3);
}

/// An empty "Shift Name" cell falls through to a populated "Name" column
#[test]
fn test_empty_name_cell_falls_through_to_alternate_header() {
    let sheet = vec![sheet_row(json!({
        "Shift Name": "",
        "Name": "Evening",
        "Start Time": "14:00",
        "End Time": "22:00",
    }))];

    let outcome = ShiftImporter::reconcile(&sheet, &HashSet::new());

    assert_eq!(outcome.accepted.len(), 1);
    assert_eq!(outcome.accepted[0].name, "Evening");
    assert!(outcome.rejected.is_empty());
}

/// Unparseable optional numerics degrade to absent, not rejection
#[test]
fn test_bad_optional_values_are_dropped() {
    let sheet = vec![sheet_row(json!({
        "Shift Name": "Flexible",
        "Start Time": "10:00",
        "End Time": "18:00",
        "In Grace": "soon",
        "Start Reminder": "   ",
    }))];

    let outcome = ShiftImporter::reconcile(&sheet, &HashSet::new());

    assert_eq!(outcome.accepted.len(), 1);
    assert!(outcome.accepted[0].in_grace_minutes.is_none());
    assert!(outcome.accepted[0].start_reminder.is_none());
}
