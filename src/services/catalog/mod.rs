use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::catalog::requests::{
    CreateCourseRequest, CreateFacultyRequest, CreatePromotionRequest, UpdateCourseRequest,
};
use crate::storage::Storage;

pub mod courses;
pub mod faculties;
pub mod promotions;

/// Faculty / promotion / course catalog management.
pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_faculty(
        &self,
        create_request: CreateFacultyRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        faculties::handle_create_faculty(self, create_request, request).await
    }

    pub async fn list_faculties(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        faculties::handle_list_faculties(self, request).await
    }

    pub async fn create_promotion(
        &self,
        create_request: CreatePromotionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        promotions::handle_create_promotion(self, create_request, request).await
    }

    pub async fn list_promotions(
        &self,
        faculty_id: Option<i64>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        promotions::handle_list_promotions(self, faculty_id, request).await
    }

    pub async fn create_course(
        &self,
        create_request: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::handle_create_course(self, create_request, request).await
    }

    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::handle_get_course(self, course_id, request).await
    }

    pub async fn list_courses(
        &self,
        promotion_id: Option<i64>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::handle_list_courses(self, promotion_id, request).await
    }

    pub async fn update_course(
        &self,
        course_id: i64,
        update_request: UpdateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::handle_update_course(self, course_id, update_request, request).await
    }

    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        courses::handle_delete_course(self, course_id, request).await
    }
}
