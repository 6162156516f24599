use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::models::users::requests::{
    CreateUserRequest, UpdateStudentProfileRequest, UpdateUserRequest, UserListQuery,
};
use crate::storage::Storage;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

/// Administrative account management.
pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    pub async fn create_user(
        &self,
        create_request: CreateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_user(self, create_request, request).await
    }

    pub async fn get_user(&self, user_id: i64, request: &HttpRequest) -> ActixResult<HttpResponse> {
        get::handle_get_user(self, user_id, request).await
    }

    pub async fn list_users(
        &self,
        query: UserListQuery,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_users(self, query, request).await
    }

    pub async fn update_user(
        &self,
        user_id: i64,
        update_request: UpdateUserRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_user(self, user_id, update_request, request).await
    }

    pub async fn update_student_profile(
        &self,
        user_id: i64,
        update_request: UpdateStudentProfileRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_student_profile(self, user_id, update_request, request).await
    }

    pub async fn delete_user(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_user(self, user_id, request).await
    }
}
