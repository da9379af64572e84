use chrono::{DateTime, NaiveDate, Utc};
use common::model::student::StudentRecord;
use std::cmp::Ordering;

/// Fields a listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    RollNumber,
    Email,
    Course,
    Gender,
    Status,
    Phone,
    Address,
    Age,
    AdmissionDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// How a key's values are compared.
enum Comparator {
    /// Case-insensitive string comparison.
    Text(fn(&StudentRecord) -> &str),
    /// Numeric; values that are not numbers sort lowest.
    Numeric(fn(&StudentRecord) -> Option<f64>),
    /// Chronological; missing or unparsable times sort earliest.
    Time(fn(&StudentRecord) -> Option<DateTime<Utc>>),
}

impl SortKey {
    /// Parses a wire name such as `rollNumber`. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Some(match name.trim() {
            "name" => SortKey::Name,
            "rollNumber" => SortKey::RollNumber,
            "email" => SortKey::Email,
            "course" => SortKey::Course,
            "gender" => SortKey::Gender,
            "status" => SortKey::Status,
            "phone" => SortKey::Phone,
            "address" => SortKey::Address,
            "age" => SortKey::Age,
            "admissionDate" => SortKey::AdmissionDate,
            "createdAt" => SortKey::CreatedAt,
            "updatedAt" => SortKey::UpdatedAt,
            _ => return None,
        })
    }

    fn comparator(self) -> Comparator {
        match self {
            SortKey::Name => Comparator::Text(|s| s.name.as_str()),
            SortKey::RollNumber => Comparator::Text(|s| s.roll_number.as_str()),
            SortKey::Email => Comparator::Text(|s| s.email.as_str()),
            SortKey::Course => Comparator::Text(|s| s.course.as_str()),
            SortKey::Gender => Comparator::Text(|s| s.gender.as_str()),
            SortKey::Status => Comparator::Text(|s| s.status.as_str()),
            SortKey::Phone => Comparator::Text(|s| s.phone.as_str()),
            SortKey::Address => Comparator::Text(|s| s.address.as_str()),
            SortKey::Age => Comparator::Numeric(|s| s.age.years()),
            SortKey::AdmissionDate => Comparator::Time(|s| parse_date(&s.admission_date)),
            SortKey::CreatedAt => Comparator::Time(|s| Some(s.created_at)),
            SortKey::UpdatedAt => Comparator::Time(|s| Some(s.updated_at)),
        }
    }

    /// Ascending comparison of two records on this key.
    pub fn compare(self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self.comparator() {
            Comparator::Text(field) => field(a).to_lowercase().cmp(&field(b).to_lowercase()),
            Comparator::Numeric(field) => match (field(a), field(b)) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (x, y) => x.is_some().cmp(&y.is_some()),
            },
            Comparator::Time(field) => field(a).cmp(&field(b)),
        }
    }
}

impl SortOrder {
    /// `desc` (any case) is descending, everything else ascending.
    pub fn parse(order: &str) -> Self {
        if order.trim().eq_ignore_ascii_case("desc") {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Stable in-place sort; records that compare equal keep their relative order.
pub fn sort_records(records: &mut [StudentRecord], key: SortKey, order: SortOrder) {
    records.sort_by(|a, b| {
        let ord = key.compare(a, b);
        match order {
            SortOrder::Asc => ord,
            SortOrder::Desc => ord.reverse(),
        }
    });
}
