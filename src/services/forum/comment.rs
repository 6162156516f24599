use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::forum::requests::CreateCommentRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::ForumService;

pub async fn handle_create_comment(
    service: &ForumService,
    contribution_id: i64,
    create_request: CreateCommentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_request.content.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::CommentInvalid,
            "Comment content cannot be empty",
        )));
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
                    "Failed to post comment",
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    let contribution = match storage.get_contribution_by_id(contribution_id).await {
        Ok(Some(contribution)) => contribution,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ContributionNotFound,
                "Contribution not found",
            )));
        }
        Err(e) => {
            error!("Failed to load contribution: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to post comment",
                )),
            );
        }
    };

    // Assignment threads are membership gated; topic threads are open
    // to any provisioned student
    if let Some(assignment_id) = contribution.assignment_id {
        match storage.is_assignment_member(profile.id, assignment_id).await {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::NotGroupMember,
                    "Join a group of this assignment before commenting",
                )));
            }
            Err(e) => {
                error!("Failed to check membership: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to post comment",
                    )),
                );
            }
        }
    }

    match storage
        .create_comment(profile.id, contribution_id, create_request.content.trim())
        .await
    {
        Ok(comment) => Ok(HttpResponse::Ok().json(ApiResponse::success(comment, "Comment posted"))),
        Err(e) => {
            error!("Failed to create comment: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to post comment",
                )),
            )
        }
    }
}
