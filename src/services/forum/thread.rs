use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{ApiResponse, ErrorCode};

use super::ForumService;

pub async fn handle_get_contribution_thread(
    service: &ForumService,
    contribution_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_contribution_thread(contribution_id).await {
        Ok(Some(thread)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            thread,
            "Contribution thread retrieved",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ContributionNotFound,
            "Contribution not found",
        ))),
        Err(e) => {
            tracing::error!("Failed to load contribution {}: {}", contribution_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load contribution",
                )),
            )
        }
    }
}
