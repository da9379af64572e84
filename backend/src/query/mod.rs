//! Read-side operations over a snapshot of the student collection.
//!
//! Nothing here touches the store: callers hand in a `Vec` obtained from
//! `StudentStore::list` and get back derived data.
//!
//! - `query`: free-text and course filters, stable sort, clamped pagination.
//! - `stats`: totals, average age, active count and per-course counts.
//! - `codec`: CSV export and import.

pub mod codec;
pub mod sort;
pub mod stats;

pub use sort::{SortKey, SortOrder};
pub use stats::compute_stats;

use common::model::student::StudentRecord;
use common::requests::ListQuery;
use common::responses::StudentPage;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 8;

/// Typed listing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParams {
    /// Lower-cased, trimmed search text; empty means no text filter.
    pub q: String,
    /// Exact course to keep; empty means every course.
    pub course: String,
    pub sort: SortKey,
    pub order: SortOrder,
    /// 1-based; clamped into range when the query runs.
    pub page: usize,
    /// Always at least 1.
    pub limit: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        QueryParams {
            q: String::new(),
            course: String::new(),
            sort: SortKey::default(),
            order: SortOrder::default(),
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Integer query parameter; anything unparsable falls back to `fallback`.
fn parse_int(raw: Option<&str>, fallback: i64) -> i64 {
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .unwrap_or(fallback)
}

impl From<&ListQuery> for QueryParams {
    fn from(query: &ListQuery) -> Self {
        let page = parse_int(query.page.as_deref(), DEFAULT_PAGE as i64).max(1);
        let limit = parse_int(query.limit.as_deref(), DEFAULT_LIMIT as i64).max(1);

        QueryParams {
            q: query
                .q
                .as_deref()
                .unwrap_or_default()
                .trim()
                .to_lowercase(),
            course: query.course.as_deref().unwrap_or_default().trim().to_string(),
            sort: query
                .sort
                .as_deref()
                .and_then(SortKey::parse)
                .unwrap_or_default(),
            order: query
                .order
                .as_deref()
                .map(SortOrder::parse)
                .unwrap_or_default(),
            page: usize::try_from(page).unwrap_or(usize::MAX),
            limit: usize::try_from(limit).unwrap_or(usize::MAX),
        }
    }
}

fn matches_text(student: &StudentRecord, needle: &str) -> bool {
    [
        &student.name,
        &student.roll_number,
        &student.email,
        &student.course,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Filters, sorts and paginates `records`.
///
/// The text filter runs before the course filter and both must match. A page past the
/// end is clamped to the last page; an empty result still reports one page.
pub fn query(mut records: Vec<StudentRecord>, params: &QueryParams) -> StudentPage {
    if !params.q.is_empty() {
        records.retain(|s| matches_text(s, &params.q));
    }
    if !params.course.is_empty() {
        records.retain(|s| s.course == params.course);
    }

    sort::sort_records(&mut records, params.sort, params.order);

    let total = records.len();
    let limit = params.limit.max(1);
    let total_pages = total.div_ceil(limit).max(1);
    let page = params.page.clamp(1, total_pages);
    let start = (page - 1) * limit;

    let data = records.into_iter().skip(start).take(limit).collect();

    StudentPage {
        data,
        total,
        page,
        limit,
        total_pages,
    }
}
