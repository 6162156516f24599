use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::users::requests::{UpdateStudentProfileRequest, UpdateUserRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_person_name;

use super::UserService;

pub async fn handle_update_user(
    service: &UserService,
    user_id: i64,
    update_request: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    for name in [&update_request.first_name, &update_request.last_name]
        .into_iter()
        .flatten()
    {
        if let Err(msg) = validate_person_name(name) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::InvalidParameter, msg)));
        }
    }

    let storage = service.get_storage(request);

    match storage.update_user(user_id, update_request).await {
        Ok(Some(user)) => Ok(HttpResponse::Ok().json(ApiResponse::success(user, "User updated"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => {
            error!("Failed to update user {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserUpdateFailed,
                    "Failed to update user",
                )),
            )
        }
    }
}

// Attaches or moves a student between promotion/faculty. Only valid
// for accounts that carry a student profile.
pub async fn handle_update_student_profile(
    service: &UserService,
    user_id: i64,
    update_request: UpdateStudentProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_student_profile(user_id, update_request).await {
        Ok(Some(profile)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            profile,
            "Student profile updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProfileNotProvisioned,
            "No student profile for this account",
        ))),
        Err(e) => {
            error!("Failed to update student profile {}: {}", user_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::UserUpdateFailed,
                    "Failed to update student profile",
                )),
            )
        }
    }
}
