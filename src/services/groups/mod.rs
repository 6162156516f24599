use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};

use crate::errors::Result;
use crate::models::groups::requests::{
    AddMemberRequest, CreateGroupRequest, SubmitReportRequest, UpdateGroupRequest,
};
use crate::models::users::entities::StudentProfile;
use crate::storage::Storage;

pub mod create;
pub mod delete;
pub mod eligible;
pub mod join;
pub mod leave;
pub mod members;
pub mod report;
pub mod update;

/// Work group management: creation, membership and rosters.
pub struct GroupService {
    storage: Option<Arc<dyn Storage>>,
}

impl GroupService {
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

    // Membership operations act on the student profile, not the account
    async fn resolve_student_profile(
        &self,
        user_id: i64,
        request: &HttpRequest,
    ) -> Result<Option<StudentProfile>> {
        self.get_storage(request)
            .get_student_profile_by_user_id(user_id)
            .await
    }

    pub async fn create_group(
        &self,
        create_request: CreateGroupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::handle_create_group(self, create_request, request).await
    }

    pub async fn list_groups(
        &self,
        assignment_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::handle_list_groups(self, assignment_id, request).await
    }

    pub async fn join_group(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        join::handle_join_group(self, group_id, request).await
    }

    pub async fn leave_group(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        leave::handle_leave_group(self, group_id, request).await
    }

    pub async fn add_member(
        &self,
        group_id: i64,
        member_request: AddMemberRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        join::handle_add_member(self, group_id, member_request, request).await
    }

    pub async fn list_members(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        members::handle_list_members(self, group_id, request).await
    }

    pub async fn list_eligible_students(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        eligible::handle_list_eligible_students(self, group_id, request).await
    }

    pub async fn submit_report(
        &self,
        group_id: i64,
        report_request: SubmitReportRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::handle_submit_report(self, group_id, report_request, request).await
    }

    pub async fn list_reports(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        report::handle_list_reports(self, group_id, request).await
    }

    pub async fn update_group(
        &self,
        group_id: i64,
        update_request: UpdateGroupRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::handle_update_group(self, group_id, update_request, request).await
    }

    pub async fn delete_group(
        &self,
        group_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::handle_delete_group(self, group_id, request).await
    }
}
