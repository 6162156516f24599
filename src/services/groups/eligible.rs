use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::errors::ForumError;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn handle_list_eligible_students(
    service: &GroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_eligible_students(group_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Eligible students retrieved",
        ))),
        Err(ForumError::NotFound(_)) => Ok(HttpResponse::NotFound().json(
            ApiResponse::error_empty(ErrorCode::GroupNotFound, "Group not found"),
        )),
        Err(e) => {
            tracing::error!("Failed to list eligible students for {}: {}", group_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list eligible students",
                )),
            )
        }
    }
}
