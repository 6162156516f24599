use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::forum::entities::{ContributionScope, validate_contribution};
use crate::models::forum::requests::CreateContributionRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ForumService;

pub async fn handle_create_contribution(
    service: &ForumService,
    scope: ContributionScope,
    create_request: CreateContributionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if let Err(msg) = validate_contribution(
        create_request.kind,
        create_request.content.as_deref(),
        create_request.file_token.as_deref(),
    ) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::ContributionInvalid, msg)));
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
                    "Failed to post contribution",
                )),
            );
        }
    };

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
                            "Failed to post contribution",
                        ),
                    ));
                }
            }

            // Only students seated in one of the assignment's groups may post
            match storage.is_assignment_member(profile.id, assignment_id).await {
                Ok(true) => {}
                Ok(false) => {
                    return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::NotGroupMember,
                        "Join a group of this assignment before posting",
                    )));
                }
                Err(e) => {
                    error!("Failed to check membership: {}", e);
                    return Ok(HttpResponse::InternalServerError().json(
                        ApiResponse::error_empty(
                            ErrorCode::InternalServerError,
                            "Failed to post contribution",
                        ),
                    ));
                }
            }
        }
        // Topic threads have no group gate; any provisioned student may post
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
                        "Failed to post contribution",
                    )),
                );
            }
        },
    }

    match storage
        .create_contribution(profile.id, scope, create_request)
        .await
    {
        Ok(contribution) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            contribution,
            "Contribution posted",
        ))),
        Err(e) => {
            error!("Failed to create contribution: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to post contribution",
                )),
            )
        }
    }
}
