use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::ForumError;
use crate::models::catalog::requests::CreatePromotionRequest;
use crate::models::{ApiResponse, ErrorCode};

use super::CatalogService;

pub async fn handle_create_promotion(
    service: &CatalogService,
    create_request: CreatePromotionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_request.name.trim().is_empty() || create_request.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Promotion name and code are required",
        )));
    }

    let storage = service.get_storage(request);

    // The faculty must exist before a promotion can attach to it
    match storage.list_faculties().await {
        Ok(list) => {
            if !list.items.iter().any(|f| f.id == create_request.faculty_id) {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FacultyNotFound,
                    "Faculty not found",
                )));
            }
        }
        Err(e) => {
            error!("Failed to check faculty: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to create promotion",
                )),
            );
        }
    }

    match storage.create_promotion(create_request).await {
        Ok(promotion) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(promotion, "Promotion created")))
        }
        Err(ForumError::Duplicate(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::CatalogCodeAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to create promotion: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to create promotion",
                )),
            )
        }
    }
}

pub async fn handle_list_promotions(
    service: &CatalogService,
    faculty_id: Option<i64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_promotions(faculty_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "Promotions retrieved"))),
        Err(e) => {
            error!("Failed to list promotions: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to list promotions",
                )),
            )
        }
    }
}
