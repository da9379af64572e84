use serde::Deserialize;

/// Query string of `GET /students`.
///
/// Every parameter is optional. `page` and `limit` stay as raw text so that garbage
/// values fall back to defaults instead of failing the whole request.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ListQuery {
    pub q: Option<String>,
    pub course: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Deserialize, Debug)]
/// Request payload for the bulk import endpoint.
/// `students` is validated by hand so a non-array value gets a readable error.
pub struct ImportRequest {
    #[serde(default)]
    pub students: Option<serde_json::Value>,
}
