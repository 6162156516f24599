use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::ForumError;
use crate::models::groups::requests::CreateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn handle_create_group(
    service: &GroupService,
    create_request: CreateGroupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_request.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Group name is required",
        )));
    }

    if let Some(capacity) = create_request.capacity
        && capacity < 1
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Group capacity must be at least 1",
        )));
    }

    let storage = service.get_storage(request);

    // The group must hang off an existing assignment
    match storage.get_assignment_by_id(create_request.assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "Assignment not found",
            )));
        }
        Err(e) => {
            error!("Failed to check assignment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create group",
                )),
            );
        }
    }

    match storage.create_group(create_request).await {
        Ok(group) => Ok(HttpResponse::Ok().json(ApiResponse::success(group, "Group created"))),
        Err(ForumError::Duplicate(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::GroupNameAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to create group: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create group",
                )),
            )
        }
    }
}
