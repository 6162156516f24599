use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::ForumError;
use crate::models::catalog::requests::CreateFacultyRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::CatalogService;

pub async fn handle_create_faculty(
    service: &CatalogService,
    create_request: CreateFacultyRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_request.name.trim().is_empty() || create_request.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Faculty name and code are required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_faculty(create_request).await {
        Ok(faculty) => Ok(HttpResponse::Ok().json(ApiResponse::success(faculty, "Faculty created"))),
        Err(ForumError::Duplicate(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::CatalogCodeAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to create faculty: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to create faculty",
                )),
            )
        }
    }
}

pub async fn handle_list_faculties(
    service: &CatalogService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_faculties().await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "Faculties retrieved"))),
        Err(e) => {
            error!("Failed to list faculties: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to list faculties",
                )),
            )
        }
    }
}
