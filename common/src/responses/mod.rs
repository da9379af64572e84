use crate::model::student::StudentRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One page of a filtered, sorted listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentPage {
    pub data: Vec<StudentRecord>,
    /// Matches after filtering, across all pages.
    pub total: usize,
    /// The page actually served, after clamping.
    pub page: usize,
    pub limit: usize,
    pub total_pages: usize,
}

/// Aggregate figures over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStats {
    pub total: usize,
    /// Rounded mean of all positive numeric ages; `None` when there are none.
    pub average_age: Option<u64>,
    pub active_count: usize,
    /// Students per course, ordered by course name. Blank courses count as `"Other"`.
    pub counts_by_course: BTreeMap<String, usize>,
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
    pub errors: Vec<ImportFailure>,
}

/// A candidate that could not be imported, with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportFailure {
    pub item: serde_json::Value,
    pub error: String,
}
