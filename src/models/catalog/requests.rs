use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateFacultyRequest {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatePromotionRequest {
    pub name: String,
    pub code: String,
    pub faculty_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub title: String,
    pub code: String,
    pub description: Option<String>,
    pub promotion_id: Option<i64>,
    // Professor profile ids to associate with the course
    #[serde(default)]
    pub professor_ids: Vec<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PromotionQueryParams {
    pub faculty_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct CourseQueryParams {
    pub promotion_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub promotion_id: Option<i64>,
    pub professor_ids: Option<Vec<i64>>,
}
