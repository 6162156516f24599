use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};

use super::TopicService;

pub async fn handle_get_topic_detail(
    service: &TopicService,
    topic_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_topic_detail(topic_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            detail,
            "Topic retrieved",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TopicNotFound,
            "Topic not found",
        ))),
        Err(e) => {
            error!("Failed to load topic {}: {}", topic_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to load topic",
                )),
            )
        }
    }
}
