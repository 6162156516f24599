use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;

#[derive(Debug, Deserialize)]
pub struct CreateAssignmentRequest {
    pub title: String,
    pub description: Option<String>,
    /// Due timestamp, required
    pub due_at: chrono::DateTime<chrono::Utc>,
    pub course_id: i64,
    pub promotion_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Assignment list query parameters (from HTTP request)
#[derive(Debug, Deserialize)]
pub struct AssignmentQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub promotion_id: Option<i64>,
    pub author_id: Option<i64>,
    pub search: Option<String>,
}

// Assignment list query (storage layer)
#[derive(Debug, Clone)]
pub struct AssignmentListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub promotion_id: Option<i64>,
    pub author_id: Option<i64>,
    pub search: Option<String>,
}
