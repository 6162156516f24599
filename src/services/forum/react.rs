use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::ForumError;
use crate::middlewares::RequireJWT;
use crate::models::forum::requests::ReactRequest;
use crate::models::forum::responses::ReactionToggleResponse;
use crate::models::{ApiResponse, ErrorCode};

use super::ForumService;

// A unique-key violation means a concurrent toggle won the race; that is
// a conflict, not a server fault
fn toggle_error_response(e: ForumError, contribution_id: i64) -> HttpResponse {
    match e {
        ForumError::Duplicate(msg) => {
            HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::ReactionConflict, msg))
        }
        e => {
            error!(
                "Failed to toggle reaction on contribution {}: {}",
                contribution_id, e
            );
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                "Failed to apply reaction",
            ))
        }
    }
}

pub async fn handle_toggle_reaction(
    service: &ForumService,
    contribution_id: i64,
    react_request: ReactRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
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
                    "Failed to apply reaction",
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
                    "Failed to apply reaction",
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
                    "Join a group of this assignment before reacting",
                )));
            }
            Err(e) => {
                error!("Failed to check membership: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        "Failed to apply reaction",
                    )),
                );
            }
        }
    }

    match storage
        .toggle_reaction(profile.id, contribution_id, react_request.kind)
        .await
    {
        Ok(reaction) => {
            let message = if reaction.is_some() {
                "Reaction applied"
            } else {
                "Reaction removed"
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                ReactionToggleResponse { reaction },
                message,
            )))
        }
        Err(e) => Ok(toggle_error_response(e, contribution_id)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::StatusCode;

    #[test]
    fn test_lost_toggle_race_maps_to_conflict() {
        let response = toggle_error_response(
            ForumError::duplicate("Reaction already recorded for this contribution"),
            1,
        );
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_database_failure_maps_to_server_error() {
        let response = toggle_error_response(ForumError::database_operation("boom"), 1);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
