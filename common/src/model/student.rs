use crate::model::age::Age;
use crate::model::text;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields that must be present and non-blank before a student can be created.
pub const REQUIRED_FIELDS: [&str; 4] = ["rollNumber", "name", "email", "course"];

pub const DEFAULT_GENDER: &str = "Other";
pub const DEFAULT_STATUS: &str = "Active";

/// A stored student.
///
/// `id`, `created_at` and `updated_at` are owned by the server: they are assigned on insert
/// and never accepted from clients. `roll_number` and `email` are unique across the
/// collection, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    #[serde(deserialize_with = "text::lenient")]
    pub id: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub roll_number: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub email: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub phone: String,
    #[serde(default)]
    pub age: Age,
    #[serde(default, deserialize_with = "text::lenient")]
    pub course: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub address: String,
    /// Kept as entered (an RFC 3339 timestamp or a plain `YYYY-MM-DD` date).
    #[serde(default, deserialize_with = "text::lenient")]
    pub admission_date: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub gender: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub status: String,
    #[serde(default, deserialize_with = "text::lenient")]
    pub avatar_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Overwrites every field the patch carries; absent fields are left alone.
    ///
    /// `updated_at` is not touched here, the store refreshes it.
    pub fn apply(&mut self, patch: StudentPatch) {
        let StudentPatch {
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
        } = patch;

        overwrite(&mut self.roll_number, roll_number);
        overwrite(&mut self.name, name);
        overwrite(&mut self.email, email);
        overwrite(&mut self.phone, phone);
        overwrite(&mut self.age, age);
        overwrite(&mut self.course, course);
        overwrite(&mut self.address, address);
        overwrite(&mut self.admission_date, admission_date);
        overwrite(&mut self.gender, gender);
        overwrite(&mut self.status, status);
        overwrite(&mut self.avatar_url, avatar_url);
    }

    pub fn is_active(&self) -> bool {
        self.status == DEFAULT_STATUS
    }
}

fn overwrite<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Payload for creating a student. Anything not supplied gets a default on insert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub roll_number: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub email: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Age>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub course: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub address: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub admission_date: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub gender: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "text::lenient_opt",
        skip_serializing_if = "Option::is_none"
    )]
    pub avatar_url: Option<String>,
}

impl NewStudent {
    /// Shorthand used by tests and fixtures: the four required fields only.
    pub fn with_required(roll_number: &str, name: &str, email: &str, course: &str) -> Self {
        NewStudent {
            roll_number: Some(roll_number.to_string()),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            course: Some(course.to_string()),
            ..Default::default()
        }
    }

    /// The first required field that is missing or blank, by its wire name.
    pub fn missing_required(&self) -> Option<&'static str> {
        let values = [&self.roll_number, &self.name, &self.email, &self.course];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .find(|(_, value)| is_blank(value.as_deref()))
            .map(|(field, _)| *field)
    }

    /// Strips surrounding whitespace from the required fields.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.roll_number,
            &mut self.name,
            &mut self.email,
            &mut self.course,
        ] {
            if let Some(value) = field.as_mut() {
                *value = value.trim().to_string();
            }
        }
        self
    }
}

/// A partial update.
///
/// `None` means "leave the field alone"; `Some(String::new())` is a real overwrite with an
/// empty value. JSON `null` is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPatch {
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub roll_number: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub phone: Option<String>,
    #[serde(default)]
    pub age: Option<Age>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub course: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub admission_date: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "text::lenient_opt")]
    pub avatar_url: Option<String>,
}

impl StudentPatch {
    /// Strips surrounding whitespace from the required fields it carries.
    pub fn trimmed(mut self) -> Self {
        for field in [
            &mut self.roll_number,
            &mut self.name,
            &mut self.email,
            &mut self.course,
        ] {
            if let Some(value) = field.as_mut() {
                *value = value.trim().to_string();
            }
        }
        self
    }

    /// The first required field the patch would blank out, by its wire name.
    pub fn blanked_required(&self) -> Option<&'static str> {
        let values = [&self.roll_number, &self.name, &self.email, &self.course];
        REQUIRED_FIELDS
            .iter()
            .zip(values)
            .find(|(_, value)| matches!(value.as_deref(), Some(v) if v.trim().is_empty()))
            .map(|(field, _)| *field)
    }
}

pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}
