use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::{ApiResponse, ErrorCode};

use super::TopicService;

pub async fn handle_list_topics(
    service: &TopicService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_topics().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "Topics retrieved"))),
        Err(e) => {
            error!("Failed to list topics: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list topics",
                )),
            )
        }
    }
}
