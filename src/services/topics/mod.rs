use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::errors::Result;
use crate::models::forum::requests::CreateTopicRequest;
use crate::models::users::entities::StudentProfile;
use crate::storage::Storage;

pub mod create;
pub mod detail;
pub mod list;

/// Student-opened discussion topics and their threads.
pub struct TopicService {
    storage: Option<Arc<dyn Storage>>,
}

impl TopicService {
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

    // Topics are authored by the student profile, not the account
    async fn resolve_student_profile(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> Result<Option<StudentProfile>> {
        self.get_storage(request)
            .get_student_profile_by_user_id(user_id)
            .await
    }

    pub async fn create_topic(
        &self,
        create_request: CreateTopicRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_topic(self, create_request, request).await
    }

    pub async fn list_topics(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::handle_list_topics(self, request).await
    }

    pub async fn get_topic_detail(
        &self,
        topic_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::handle_get_topic_detail(self, topic_id, request).await
    }
}
