use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use crate::errors::ForumError;
use crate::models::catalog::requests::{CreateCourseRequest, UpdateCourseRequest};
use crate::models::{ApiResponse, ErrorCode};

use super::CatalogService;

pub async fn handle_create_course(
    service: &CatalogService,
    create_request: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if create_request.title.trim().is_empty() || create_request.code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::InvalidParameter,
            "Course title and code are required",
        )));
    }

    let storage = service.get_storage(request);

    match storage.create_course(create_request).await {
        Ok(detail) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Course created"))),
        Err(ForumError::Duplicate(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::CatalogCodeAlreadyExists, msg),
        )),
        Err(e) => {
            error!("Failed to create course: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to create course",
                )),
            )
        }
    }
}

pub async fn handle_get_course(
    service: &CatalogService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_detail(course_id).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Course found"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to load course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to load course",
                )),
            )
        }
    }
}

pub async fn handle_list_courses(
    service: &CatalogService,
    promotion_id: Option<i64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_courses(promotion_id).await {
        Ok(list) => Ok(HttpResponse::Ok().json(ApiResponse::success(list, "Courses retrieved"))),
        Err(e) => {
            error!("Failed to list courses: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to list courses",
                )),
            )
        }
    }
}

pub async fn handle_update_course(
    service: &CatalogService,
    course_id: i64,
    update_request: UpdateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_course(course_id, update_request).await {
        Ok(Some(detail)) => Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Course updated"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to update course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to update course",
                )),
            )
        }
    }
}

pub async fn handle_delete_course(
    service: &CatalogService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_course(course_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_empty("Course deleted"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CourseNotFound,
            "Course not found",
        ))),
        Err(e) => {
            error!("Failed to delete course {}: {}", course_id, e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::CatalogOperationFailed,
                    "Failed to delete course",
                )),
            )
        }
    }
}
