use crate::model::age::Age;
use crate::model::student::{NewStudent, StudentRecord};
use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

/// Column order of exported CSV files. Import maps columns by name, so any order
/// (and any subset) is accepted there.
pub const CSV_HEADERS: [&str; 14] = [
    "id",
    "rollNumber",
    "name",
    "email",
    "phone",
    "age",
    "course",
    "address",
    "admissionDate",
    "gender",
    "status",
    "avatarUrl",
    "createdAt",
    "updatedAt",
];

/// One CSV row keyed by header name, every value as text.
///
/// Columns missing from the file stay empty and unknown columns are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StudentRow {
    pub id: String,
    pub roll_number: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: String,
    pub course: String,
    pub address: String,
    pub admission_date: String,
    pub gender: String,
    pub status: String,
    pub avatar_url: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Header spellings read on import for each field, in [`CSV_HEADERS`] order. For a field
/// with several spellings the first non-empty value in this order wins, wherever the
/// columns sit in the file.
const COLUMN_NAMES: [&[&str]; 14] = [
    &["id"],
    &["rollNumber", "RollNumber", "roll"],
    &["name", "Name"],
    &["email", "Email"],
    &["phone"],
    &["age"],
    &["course"],
    &["address"],
    &["admissionDate"],
    &["gender"],
    &["status"],
    &["avatarUrl"],
    &["createdAt"],
    &["updatedAt"],
];

impl StudentRow {
    /// Builds a row from `(header, value)` pairs. Unknown headers are ignored.
    pub fn from_columns<'a>(columns: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let columns: Vec<(&str, &str)> = columns.into_iter().collect();
        let pick = |names: &[&str]| -> String {
            names
                .iter()
                .filter_map(|name| {
                    columns
                        .iter()
                        .find(|(header, _)| header == name)
                        .map(|(_, value)| *value)
                })
                .find(|value| !value.is_empty())
                .unwrap_or_default()
                .to_string()
        };

        let [
            id,
            roll_number,
            name,
            email,
            phone,
            age,
            course,
            address,
            admission_date,
            gender,
            status,
            avatar_url,
            created_at,
            updated_at,
        ] = COLUMN_NAMES.map(pick);

        StudentRow {
            id,
            roll_number,
            name,
            email,
            phone,
            age,
            course,
            address,
            admission_date,
            gender,
            status,
            avatar_url,
            created_at,
            updated_at,
        }
    }

    /// Values in [`CSV_HEADERS`] order.
    pub fn fields(&self) -> [&str; 14] {
        [
            &self.id,
            &self.roll_number,
            &self.name,
            &self.email,
            &self.phone,
            &self.age,
            &self.course,
            &self.address,
            &self.admission_date,
            &self.gender,
            &self.status,
            &self.avatar_url,
            &self.created_at,
            &self.updated_at,
        ]
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("{field} is not a valid timestamp: {value:?}")]
    InvalidTimestamp { field: &'static str, value: String },
}

fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, RowError> {
    DateTime::parse_from_rfc3339(value)
        .map(|ts| ts.with_timezone(&Utc))
        .map_err(|_| RowError::InvalidTimestamp {
            field,
            value: value.to_string(),
        })
}

impl From<&StudentRecord> for StudentRow {
    fn from(rec: &StudentRecord) -> Self {
        StudentRow {
            id: rec.id.clone(),
            roll_number: rec.roll_number.clone(),
            name: rec.name.clone(),
            email: rec.email.clone(),
            phone: rec.phone.clone(),
            age: rec.age.to_string(),
            course: rec.course.clone(),
            address: rec.address.clone(),
            admission_date: rec.admission_date.clone(),
            gender: rec.gender.clone(),
            status: rec.status.clone(),
            avatar_url: rec.avatar_url.clone(),
            created_at: format_timestamp(&rec.created_at),
            updated_at: format_timestamp(&rec.updated_at),
        }
    }
}

/// Rebuilds a full record from an exported row. Fails only on unparsable timestamps.
impl TryFrom<StudentRow> for StudentRecord {
    type Error = RowError;

    fn try_from(row: StudentRow) -> Result<Self, Self::Error> {
        Ok(StudentRecord {
            created_at: parse_timestamp("createdAt", &row.created_at)?,
            updated_at: parse_timestamp("updatedAt", &row.updated_at)?,
            id: row.id,
            roll_number: row.roll_number,
            name: row.name,
            email: row.email,
            phone: row.phone,
            age: Age::new(row.age),
            course: row.course,
            address: row.address,
            admission_date: row.admission_date,
            gender: row.gender,
            status: row.status,
            avatar_url: row.avatar_url,
        })
    }
}

fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// A row turned into an import candidate. `id` and the timestamps are dropped since the
/// store assigns its own.
impl From<StudentRow> for NewStudent {
    fn from(row: StudentRow) -> Self {
        NewStudent {
            roll_number: non_empty(row.roll_number),
            name: non_empty(row.name),
            email: non_empty(row.email),
            phone: non_empty(row.phone),
            age: non_empty(row.age).map(Age::new),
            course: non_empty(row.course),
            address: non_empty(row.address),
            admission_date: non_empty(row.admission_date),
            gender: non_empty(row.gender),
            status: non_empty(row.status),
            avatar_url: non_empty(row.avatar_url),
        }
    }
}
