use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::middlewares::RequireJWT;
use crate::models::groups::requests::SubmitReportRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::GroupService;

pub async fn handle_submit_report(
    service: &GroupService,
    group_id: i64,
    report_request: SubmitReportRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let file_token = report_request.file_token.trim();
    if file_token.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "A report requires an uploaded file token",
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
                    "Failed to submit report",
                )),
            );
        }
    };

    let storage = service.get_storage(request);

    match storage.get_group_by_id(group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                "Group not found",
            )));
        }
        Err(e) => {
            error!("Failed to check group: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit report",
                )),
            );
        }
    }

    // Only members of the group may hand in its report
    match storage.is_group_member(profile.id, group_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::NotGroupMember,
                "Only group members can submit the report",
            )));
        }
        Err(e) => {
            error!("Failed to check membership: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit report",
                )),
            );
        }
    }

    // The token must point at a real upload
    match storage.get_file_by_token(file_token).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::FileNotFound,
                "No uploaded file matches this token",
            )));
        }
        Err(e) => {
            error!("Failed to check file token: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit report",
                )),
            );
        }
    }

    match storage
        .submit_group_report(group_id, profile.id, file_token)
        .await
    {
        Ok(report) => Ok(HttpResponse::Ok().json(ApiResponse::success(report, "Report submitted"))),
        Err(e) => {
            error!("Failed to submit report: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to submit report",
                )),
            )
        }
    }
}

pub async fn handle_list_reports(
    service: &GroupService,
    group_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_group_by_id(group_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::GroupNotFound,
                "Group not found",
            )));
        }
        Err(e) => {
            error!("Failed to check group: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list reports",
                )),
            );
        }
    }

    match storage.list_group_reports(group_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "Reports retrieved"))),
        Err(e) => {
            error!("Failed to list reports: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "Failed to list reports",
                )),
            )
        }
    }
}
