use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::forum::entities::validate_topic;
use crate::models::forum::requests::CreateTopicRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::TopicService;

pub async fn handle_create_topic(
    service: &TopicService,
    create_request: CreateTopicRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_topic(&create_request.title, &create_request.description) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::TopicInvalid, msg)));
    }

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
                    ErrorCode::InternalServerError,
                    "Failed to create topic",
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    match storage.create_topic(profile.id, create_request).await {
        Ok(topic) => Ok(HttpResponse::Ok().json(ApiResponse::success(topic, "Topic created"))),
        Err(e) => {
            error!("Failed to create topic: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to create topic",
                )),
            )
        }
    }
}
