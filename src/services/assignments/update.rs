use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::assignments::requests::UpdateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::AssignmentService;

pub async fn handle_update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    update_request: UpdateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Some(title) = &update_request.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Assignment title cannot be empty",
        )));
    }

    let storage = service.get_storage(request);

    match storage.update_assignment(assignment_id, update_request).await {
        Ok(Some(assignment)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            assignment,
            "Assignment updated",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "Assignment not found",
        ))),
        Err(e) => {
            error!("Failed to update assignment {}: {}", assignment_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to update assignment",
                )),
            )
        }
    }
}
