use serde::{Deserialize, Serialize};

// Assignment (travail): a graded work item tied to a course and a promotion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_at: chrono::DateTime<chrono::Utc>,
    pub published_at: chrono::DateTime<chrono::Utc>,
    pub course_id: i64,
    pub promotion_id: i64,
    // Authoring professor profile; null once the professor is removed
    pub author_id: Option<i64>,
}
