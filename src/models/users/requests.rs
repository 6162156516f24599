use serde::Deserialize;

use crate::models::common::pagination::PaginationQuery;
use crate::models::users::entities::{UserRole, UserStatus};

// Registration / admin user creation request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
}

// Admin user update request
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub status: Option<UserStatus>,
}

// Student profile update (promotion/faculty attachment)
#[derive(Debug, Deserialize)]
pub struct UpdateStudentProfileRequest {
    pub promotion_id: Option<i64>,
    pub faculty_id: Option<i64>,
}

// User list query parameters (from HTTP request)
#[derive(Debug, Deserialize)]
pub struct UserQueryParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}

// User list query (storage layer)
#[derive(Debug, Clone)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<UserRole>,
    pub search: Option<String>,
}
