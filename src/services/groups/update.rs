use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::groups::requests::UpdateGroupRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn handle_update_group(
    service: &GroupService,
    group_id: i64,
    update_request: UpdateGroupRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(name) = &update_request.name
        && name.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Group name cannot be empty",
        )));
    }

    if let Some(capacity) = update_request.capacity
        && capacity < 1
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Group capacity must be at least 1",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_group(group_id, update_request).await {
        Ok(Some(group)) => Ok(HttpResponse::Ok().json(ApiResponse::success(group, "Group updated"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::GroupNotFound,
            "Group not found",
        ))),
        Err(e) => {
            error!("Failed to update group {}: {}", group_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update group",
                )),
            )
        }
    }
}
