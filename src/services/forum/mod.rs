use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::errors::Result;
use crate::models::forum::entities::ContributionScope;
use crate::models::forum::requests::{
    CreateCommentRequest, CreateContributionRequest, ReactRequest, UpdatesQueryParams,
};
use crate::models::users::entities::StudentProfile;
use crate::storage::Storage;

pub mod comment;
pub mod contribute;
pub mod list;
pub mod react;
pub mod thread;
pub mod updates;

/// Per-assignment discussion: contributions, comments, reactions and
/// the polling feed.
pub struct ForumService {
    storage: Option<Arc<dyn Storage>>,
}

impl ForumService {
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

    // Forum writes are authored by the student profile, not the account
    async fn resolve_student_profile(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> Result<Option<StudentProfile>> {
        self.get_storage(request)
            .get_student_profile_by_user_id(user_id)
            .await
    }

    pub async fn create_contribution(
        &self,
        scope: ContributionScope,
        create_request: CreateContributionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        contribute::handle_create_contribution(self, scope, create_request, request).await
    }

    pub async fn list_contributions(
        &self,
        scope: ContributionScope,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::handle_list_contributions(self, scope, request).await
    }

    pub async fn get_contribution_thread(
        &self,
        contribution_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        thread::handle_get_contribution_thread(self, contribution_id, request).await
    }

    pub async fn create_comment(
        &self,
        contribution_id: i64,
        create_request: CreateCommentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        comment::handle_create_comment(self, contribution_id, create_request, request).await
    }

    pub async fn toggle_reaction(
        &self,
        contribution_id: i64,
        react_request: ReactRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        react::handle_toggle_reaction(self, contribution_id, react_request, request).await
    }

    pub async fn get_updates(
        &self,
        assignment_id: i64,
        params: UpdatesQueryParams,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        updates::handle_get_updates(self, assignment_id, params, request).await
    }
}
