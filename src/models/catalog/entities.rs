use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faculty {
    pub id: i64,
    pub name: String,
    pub code: String,
}

// Student cohort, tied to a faculty. Gates assignment visibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub code: String,
    pub faculty_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub promotion_id: Option<i64>,
}
