use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::ForumError;
use crate::middlewares::RequireJWT;
use crate::models::groups::requests::AddMemberRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

fn join_error_response(e: ForumError, group_id: i64) -> HttpResponse {
    match e {
        ForumError::NotFound(_) => HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        )),
        ForumError::Capacity(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::GroupFull, msg))
        }
        ForumError::Duplicate(msg) => HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::GroupAlreadyJoined,
            msg,
        )),
        e => {
            error!("Failed to seat student in group {}: {}", group_id, e);
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::GroupJoinFailed,
                "Failed to join group",
            ))
        }
    }
}

pub async fn handle_join_group(
    service: &GroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "Unauthorized: missing user id",
        )));
    };

    let profile = match service.resolve_student_profile(user_id, request).await {
        Ok(Some(profile)) => profile,
        Ok(None) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ProfileNotProvisioned,
                "No student profile for this account",
            )));
        }
        Err(e) => {
            error!("Failed to resolve student profile: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::GroupJoinFailed,
                    "Failed to join group",
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    match storage.join_group(profile.id, group_id).await {
        Ok(membership) => {
            tracing::info!("Student {} joined group {}", profile.id, group_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(membership, "Joined group")))
        }
        Err(e) => Ok(join_error_response(e, group_id)),
    }
}

pub async fn handle_add_member(
    service: &GroupService,
    group_id: i64,
    member_request: AddMemberRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.add_group_member(group_id, member_request).await {
        Ok(membership) => Ok(HttpResponse::Ok().json(ApiResponse::success(membership, "Member added"))),
        Err(e) => Ok(join_error_response(e, group_id)),
    }
}
