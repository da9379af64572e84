//! The student record store.
//!
//! `StudentStore` owns the collection and is the only code that mutates it. Every
//! mutation is flushed to the [`Snapshot`] before it returns; if the flush fails the
//! in-memory change is undone so memory and disk never disagree. Uniqueness of roll
//! numbers and emails is the caller's job (see `services::students` and `import`),
//! checked through `find_by_roll_number` / `find_by_email` under the same write lock as
//! the mutation.

mod snapshot;

pub use snapshot::Snapshot;

use crate::error::StoreError;
use chrono::Utc;
use common::model::student::{
    NewStudent, StudentPatch, StudentRecord, DEFAULT_GENDER, DEFAULT_STATUS,
};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Debug)]
pub struct StudentStore {
    /// Insertion order, oldest first.
    records: Vec<StudentRecord>,
    snapshot: Snapshot,
}

impl StudentStore {
    /// Loads the snapshot at `path`, or starts empty if it is missing or unreadable.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let snapshot = Snapshot::new(path);
        let records = snapshot.load();
        StudentStore { records, snapshot }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// A copy of every record, most recently inserted first.
    pub fn list(&self) -> Vec<StudentRecord> {
        self.records.iter().rev().cloned().collect()
    }

    pub fn get(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|s| s.id == id)
    }

    /// Case-insensitive lookup by roll number.
    pub fn find_by_roll_number(&self, roll_number: &str) -> Option<&StudentRecord> {
        let wanted = roll_number.to_lowercase();
        self.records
            .iter()
            .find(|s| s.roll_number.to_lowercase() == wanted)
    }

    /// Case-insensitive lookup by email.
    pub fn find_by_email(&self, email: &str) -> Option<&StudentRecord> {
        let wanted = email.to_lowercase();
        self.records.iter().find(|s| s.email.to_lowercase() == wanted)
    }

    /// Creates a record from `payload`, filling defaults for everything not supplied.
    pub fn insert(&mut self, payload: NewStudent) -> Result<StudentRecord, StoreError> {
        let now = Utc::now();
        let student = StudentRecord {
            id: Uuid::new_v4().to_string(),
            roll_number: payload.roll_number.unwrap_or_default(),
            name: payload.name.unwrap_or_default(),
            email: payload.email.unwrap_or_default(),
            phone: payload.phone.unwrap_or_default(),
            age: payload.age.unwrap_or_default(),
            course: payload.course.unwrap_or_default(),
            address: payload.address.unwrap_or_default(),
            admission_date: or_default(payload.admission_date, || now.to_rfc3339()),
            gender: or_default(payload.gender, || DEFAULT_GENDER.to_string()),
            status: or_default(payload.status, || DEFAULT_STATUS.to_string()),
            avatar_url: payload.avatar_url.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        };

        self.records.push(student.clone());
        if let Err(e) = self.flush() {
            self.records.pop();
            return Err(e);
        }
        Ok(student)
    }

    /// Applies `patch` to the record with `id`. `Ok(None)` when no such record exists.
    pub fn update(
        &mut self,
        id: &str,
        patch: StudentPatch,
    ) -> Result<Option<StudentRecord>, StoreError> {
        let Some(idx) = self.records.iter().position(|s| s.id == id) else {
            return Ok(None);
        };

        let previous = self.records[idx].clone();
        let student = &mut self.records[idx];
        student.apply(patch);
        // Never move backwards, even if the wall clock does.
        student.updated_at = Utc::now().max(previous.updated_at);
        let updated = student.clone();

        if let Err(e) = self.flush() {
            self.records[idx] = previous;
            return Err(e);
        }
        Ok(Some(updated))
    }

    /// Removes the record with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(idx) = self.records.iter().position(|s| s.id == id) else {
            return Ok(false);
        };

        let removed = self.records.remove(idx);
        if let Err(e) = self.flush() {
            self.records.insert(idx, removed);
            return Err(e);
        }
        Ok(true)
    }

    fn flush(&self) -> Result<(), StoreError> {
        self.snapshot.save(&self.records)
    }
}

fn or_default(value: Option<String>, default: impl FnOnce() -> String) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::age::Age;
    use tempfile::TempDir;

    fn setup_store() -> (TempDir, StudentStore) {
        let dir = TempDir::new().unwrap();
        let store = StudentStore::open(dir.path().join("students.json"));
        (dir, store)
    }

    fn student(roll: &str, email: &str) -> NewStudent {
        NewStudent::with_required(roll, "Student", email, "Math")
    }

    #[test]
    fn insert_fills_defaults() {
        let (_dir, mut store) = setup_store();

        let rec = store.insert(student("R1", "a@x.com")).unwrap();

        assert!(!rec.id.is_empty());
        assert_eq!(rec.gender, "Other");
        assert_eq!(rec.status, "Active");
        assert_eq!(rec.phone, "");
        assert!(rec.age.is_empty());
        assert!(!rec.admission_date.is_empty());
        assert_eq!(rec.created_at, rec.updated_at);
    }

    #[test]
    fn insert_keeps_supplied_values() {
        let (_dir, mut store) = setup_store();
        let payload = NewStudent {
            gender: Some("Female".to_string()),
            status: Some("Inactive".to_string()),
            age: Some(Age::from(19)),
            admission_date: Some("2023-09-01".to_string()),
            ..student("R1", "a@x.com")
        };

        let rec = store.insert(payload).unwrap();

        assert_eq!(rec.gender, "Female");
        assert_eq!(rec.status, "Inactive");
        assert_eq!(rec.age, Age::from(19));
        assert_eq!(rec.admission_date, "2023-09-01");
    }

    #[test]
    fn ids_are_unique() {
        let (_dir, mut store) = setup_store();
        let a = store.insert(student("R1", "a@x.com")).unwrap();
        let b = store.insert(student("R2", "b@x.com")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn list_is_newest_first_snapshot() {
        let (_dir, mut store) = setup_store();
        store.insert(student("R1", "a@x.com")).unwrap();
        store.insert(student("R2", "b@x.com")).unwrap();
        store.insert(student("R3", "c@x.com")).unwrap();

        let mut listed = store.list();
        let rolls: Vec<_> = listed.iter().map(|s| s.roll_number.as_str()).collect();
        assert_eq!(rolls, ["R3", "R2", "R1"]);

        listed.clear();
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn lookups_ignore_case() {
        let (_dir, mut store) = setup_store();
        let rec = store.insert(student("R1", "Ada@X.com")).unwrap();

        assert_eq!(store.find_by_roll_number("r1").map(|s| &s.id), Some(&rec.id));
        assert_eq!(store.find_by_email("ada@x.COM").map(|s| &s.id), Some(&rec.id));
        assert!(store.find_by_roll_number("R2").is_none());
        assert!(store.get(&rec.id).is_some());
        assert!(store.get("R1").is_none());
    }

    #[test]
    fn update_applies_patch_and_refreshes_timestamp() {
        let (_dir, mut store) = setup_store();
        let rec = store.insert(student("R1", "a@x.com")).unwrap();

        let patch = StudentPatch {
            name: Some("Renamed".to_string()),
            address: Some(String::new()),
            ..Default::default()
        };
        let updated = store.update(&rec.id, patch).unwrap().unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.id, rec.id);
        assert_eq!(updated.created_at, rec.created_at);
        assert!(updated.updated_at >= rec.updated_at);
        assert_eq!(store.get(&rec.id), Some(&updated));
    }

    #[test]
    fn empty_patch_only_moves_updated_at() {
        let (_dir, mut store) = setup_store();
        let rec = store.insert(student("R1", "a@x.com")).unwrap();

        let updated = store
            .update(&rec.id, StudentPatch::default())
            .unwrap()
            .unwrap();

        assert!(updated.updated_at >= rec.updated_at);
        let mut normalized = updated.clone();
        normalized.updated_at = rec.updated_at;
        assert_eq!(normalized, rec);
    }

    #[test]
    fn update_unknown_id_is_none() {
        let (_dir, mut store) = setup_store();
        assert_eq!(store.update("nope", StudentPatch::default()).unwrap(), None);
    }

    #[test]
    fn delete_reports_removal() {
        let (_dir, mut store) = setup_store();
        let rec = store.insert(student("R1", "a@x.com")).unwrap();

        assert!(store.delete(&rec.id).unwrap());
        assert!(!store.delete(&rec.id).unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn every_mutation_is_on_disk() {
        let (dir, mut store) = setup_store();
        let path = dir.path().join("students.json");

        let a = store.insert(student("R1", "a@x.com")).unwrap();
        let b = store.insert(student("R2", "b@x.com")).unwrap();
        store
            .update(
                &a.id,
                StudentPatch {
                    course: Some("Art".to_string()),
                    ..Default::default()
                },
            )
            .unwrap();
        store.delete(&b.id).unwrap();

        let reopened = StudentStore::open(&path);
        assert_eq!(reopened.list(), store.list());
        assert_eq!(reopened.get(&a.id).map(|s| s.course.as_str()), Some("Art"));
    }

    #[test]
    fn failed_flush_rolls_back() {
        let dir = TempDir::new().unwrap();
        // The snapshot's parent is a regular file, so every flush fails.
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();
        let mut store = StudentStore::open(blocker.join("students.json"));

        assert!(store.insert(student("R1", "a@x.com")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn records_with_nulls_survive_the_next_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("students.json");
        std::fs::write(
            &path,
            r#"[{"id":"a","rollNumber":"R1","name":"Ada","email":"a@x.com","phone":null,
                 "course":"Math","createdAt":"2024-01-01T00:00:00Z","updatedAt":"2024-01-01T00:00:00Z"},
                {"id":"b","rollNumber":"R2","name":"Bo","email":"b@x.com","course":"Art",
                 "createdAt":"2024-01-02T00:00:00Z","updatedAt":"2024-01-02T00:00:00Z"}]"#,
        )
        .unwrap();

        let mut store = StudentStore::open(&path);
        assert_eq!(store.len(), 2);
        store.insert(student("R3", "c@x.com")).unwrap();

        let reopened = StudentStore::open(&path);
        assert_eq!(reopened.len(), 3);
        assert_eq!(reopened.get("a").map(|s| s.phone.as_str()), Some(""));
    }
}
