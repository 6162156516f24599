use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::models::forum::entities::ContributionScope;
use crate::models::{ApiResponse, ErrorCode};

use super::ForumService;

pub async fn handle_list_contributions(
    service: &ForumService,
    scope: ContributionScope,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match scope {
        ContributionScope::Assignment(assignment_id) => {
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
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Failed to list contributions",
                        ),
                    ));
                }
            }
        }
        ContributionScope::Topic(topic_id) => match storage.get_topic_by_id(topic_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::TopicNotFound,
                    "Topic not found",
                )));
            }
            Err(e) => {
                error!("Failed to check topic: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to list contributions",
                    )),
                );
            }
        },
    }

    match storage.list_contributions(scope).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            list,
            "Contributions retrieved",
        ))),
        Err(e) => {
            error!("Failed to list contributions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list contributions",
                )),
            )
        }
    }
}
