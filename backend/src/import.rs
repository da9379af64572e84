//! Bulk import of candidate students.
//!
//! Candidates arrive either as JSON objects (`POST /students/import`) or as CSV rows
//! (`POST /students/import/csv`). Each one is checked against the live store, which
//! already contains the candidates added earlier in the same batch, so duplicates inside
//! a batch are skipped too. A failure to insert one candidate is reported and the batch
//! carries on.

use crate::store::StudentStore;
use common::model::student::NewStudent;
use common::responses::{ImportFailure, ImportReport};
use log::{info, warn};
use serde_json::Value;

/// Reads a candidate out of an arbitrary JSON value.
///
/// Object fields go through the same scalar-to-text coercion as `POST /students`, so a
/// numeric `rollNumber` is fine. `null` is an error. Any other non-object (a number, a
/// string, an array) has no fields at all and so ends up skipped as incomplete.
pub fn candidate_from_value(item: &Value) -> Result<NewStudent, String> {
    match item {
        Value::Null => Err("student entry is null".to_string()),
        Value::Object(_) => serde_json::from_value(item.clone()).map_err(|e| e.to_string()),
        _ => Ok(NewStudent::default()),
    }
}

/// Imports raw JSON items. Items that cannot be read as a candidate are reported in
/// `errors` ahead of any insert failures.
pub fn import_values(store: &mut StudentStore, items: Vec<Value>) -> ImportReport {
    let mut rejected = Vec::new();
    let mut candidates = Vec::with_capacity(items.len());
    for item in items {
        match candidate_from_value(&item) {
            Ok(candidate) => candidates.push(candidate),
            Err(error) => {
                warn!("rejected import item: {}", error);
                rejected.push(ImportFailure { item, error });
            }
        }
    }

    let mut report = bulk_import(store, candidates);
    report.errors.splice(0..0, rejected);
    report
}

/// Inserts every acceptable candidate, in order.
///
/// A candidate is skipped when a required field is blank or when its roll number or email
/// is already taken (case-insensitive).
pub fn bulk_import(store: &mut StudentStore, candidates: Vec<NewStudent>) -> ImportReport {
    let mut report = ImportReport::default();

    for candidate in candidates {
        let candidate = candidate.trimmed();
        if candidate.missing_required().is_some() {
            report.skipped += 1;
            continue;
        }

        let roll_number = candidate.roll_number.as_deref().unwrap_or_default();
        let email = candidate.email.as_deref().unwrap_or_default();
        if store.find_by_roll_number(roll_number).is_some() || store.find_by_email(email).is_some()
        {
            report.skipped += 1;
            continue;
        }

        match store.insert(candidate.clone()) {
            Ok(_) => report.added += 1,
            Err(e) => {
                warn!("import of {} failed: {}", roll_number, e);
                report.errors.push(ImportFailure {
                    item: serde_json::to_value(&candidate).unwrap_or_default(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "import finished: {} added, {} skipped, {} failed",
        report.added,
        report.skipped,
        report.errors.len()
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::age::Age;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, StudentStore) {
        let dir = TempDir::new().unwrap();
        let store = StudentStore::open(dir.path().join("students.json"));
        (dir, store)
    }

    #[test]
    fn duplicate_inside_batch_is_skipped() {
        let (_dir, mut store) = setup_store();
        let candidates = vec![
            NewStudent::with_required("R1", "Ada", "ada@x.com", "Math"),
            NewStudent::with_required("R2", "Bob", "ADA@x.com", "Math"),
            NewStudent::with_required("R3", "Cy", "cy@x.com", "Art"),
        ];

        let report = bulk_import(&mut store, candidates);

        assert_eq!(
            report,
            ImportReport {
                added: 2,
                skipped: 1,
                errors: vec![]
            }
        );
        assert_eq!(store.len(), 2);
        assert!(store.find_by_roll_number("R2").is_none());
    }

    #[test]
    fn existing_records_and_blank_fields_are_skipped() {
        let (_dir, mut store) = setup_store();
        store
            .insert(NewStudent::with_required("R1", "Ada", "ada@x.com", "Math"))
            .unwrap();

        let candidates = vec![
            NewStudent::with_required("r1", "Other", "other@x.com", "Math"),
            NewStudent::with_required("R5", "  ", "five@x.com", "Math"),
            NewStudent {
                course: None,
                ..NewStudent::with_required("R6", "Six", "six@x.com", "")
            },
            NewStudent::with_required(" R7 ", "Seven", "seven@x.com", "Math"),
        ];
        let report = bulk_import(&mut store, candidates);

        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 3);
        assert_eq!(
            store.find_by_roll_number("R7").map(|s| s.roll_number.as_str()),
            Some("R7")
        );
    }

    #[test]
    fn insert_failures_are_reported_and_batch_continues() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let mut store = StudentStore::open(blocker.join("students.json"));

        let report = bulk_import(
            &mut store,
            vec![
                NewStudent::with_required("R1", "Ada", "ada@x.com", "Math"),
                NewStudent::with_required("R2", "Bob", "bob@x.com", "Math"),
            ],
        );

        assert_eq!(report.added, 0);
        assert_eq!(report.errors.len(), 2);
        assert_eq!(report.errors[1].item["rollNumber"], "R2");
        assert!(store.is_empty());
    }

    #[test]
    fn json_candidates_are_coerced() {
        let candidate = candidate_from_value(&json!({
            "rollNumber": 1001,
            "name": "Ada",
            "email": "ada@x.com",
            "course": "Math",
            "age": 20,
            "phone": null,
            "extra": "ignored"
        }))
        .unwrap();
        assert_eq!(candidate.roll_number.as_deref(), Some("1001"));
        assert_eq!(candidate.age, Some(Age::from(20)));
        assert_eq!(candidate.phone, None);
        assert_eq!(candidate.missing_required(), None);

        assert_eq!(candidate_from_value(&json!(42)), Ok(NewStudent::default()));
        assert!(candidate_from_value(&json!(null)).is_err());
    }

    #[test]
    fn null_items_are_errors_and_scalars_are_skipped() {
        let (_dir, mut store) = setup_store();
        let items = vec![
            json!({"rollNumber": "R1", "name": "Ada", "email": "ada@x.com", "course": "Math"}),
            json!(null),
            json!("R2"),
        ];

        let report = import_values(&mut store, items);

        assert_eq!(report.added, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].item, Value::Null);
        assert_eq!(store.len(), 1);
    }
}
