use serde::Serialize;

use crate::models::catalog::entities::{Course, Faculty, Promotion};
use crate::models::users::entities::ProfessorProfile;

#[derive(Debug, Serialize)]
pub struct FacultyListResponse {
    pub items: Vec<Faculty>,
}

#[derive(Debug, Serialize)]
pub struct PromotionListResponse {
    pub items: Vec<Promotion>,
}

#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub items: Vec<Course>,
}

// Course with its professor associations resolved
#[derive(Debug, Serialize)]
pub struct CourseDetailResponse {
    pub course: Course,
    pub professors: Vec<ProfessorProfile>,
}
