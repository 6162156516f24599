use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::ForumError;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn handle_list_groups(
    service: &GroupService,
    assignment_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
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
                    "Failed to list groups",
                )),
            );
        }
    }

    match storage.list_groups_for_assignment(assignment_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "Groups retrieved"))),
        Err(e) => {
            error!("Failed to list groups: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list groups",
                )),
            )
        }
    }
}

pub async fn handle_list_members(
    service: &GroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_group_members(group_id).await {
        Ok(roster) => Ok(HttpResponse::Ok().json(ApiResponse::success(roster, "Members retrieved"))),
        Err(ForumError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::GroupNotFound, "Group not found"),
        )),
        Err(e) => {
            error!("Failed to list members of group {}: {}", group_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list members",
                )),
            )
        }
    }
}
