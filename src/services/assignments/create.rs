use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

pub async fn handle_create_assignment(
    service: &AssignmentService,
    create_request: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_request.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Assignment title is required",
        )));
    }

    if create_request.due_at <= chrono::Utc::now() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Due date must be in the future",
        )));
    }

    let author_id = RequireJWT::extract_user_id(request);

    let storage = service.get_storage(request);

    match storage.create_assignment(author_id, create_request).await {
        Ok(assignment) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment published",
        ))),
        Err(e) => {
            error!("Failed to create assignment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::AssignmentCreateFailed,
                    "Failed to publish assignment",
                )),
            )
        }
    }
}
