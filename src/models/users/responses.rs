use serde::Serialize;

use crate::models::PaginationInfo;
use crate::models::users::entities::{ProfessorProfile, StudentProfile, User};

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub items: Vec<User>,
    pub pagination: PaginationInfo,
}

// Account plus whichever role profile it carries
#[derive(Debug, Serialize)]
pub struct UserDetailResponse {
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub student_profile: Option<StudentProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor_profile: Option<ProfessorProfile>,
}

// Roster entry: student profile with the account's display fields
#[derive(Debug, Serialize)]
pub struct RosterEntry {
    pub student_id: i64,
    pub matricule: String,
    pub first_name: String,
    pub last_name: String,
    pub promotion_id: Option<i64>,
}
