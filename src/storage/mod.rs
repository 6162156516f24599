use std::sync::Arc;

use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentDetailResponse, AssignmentListResponse},
    },
    catalog::{
        entities::{Faculty, Promotion},
        requests::{
            CreateCourseRequest, CreateFacultyRequest, CreatePromotionRequest, UpdateCourseRequest,
        },
        responses::{
            CourseDetailResponse, CourseListResponse, FacultyListResponse, PromotionListResponse,
        },
    },
    files::entities::File,
    forum::{
        entities::{
            Comment, Contribution, ContributionScope, DiscussionTopic, Reaction, ReactionKind,
        },
        requests::{CreateContributionRequest, CreateTopicRequest},
        responses::{
            ContributionListResponse, ContributionThreadResponse, TopicDetailResponse,
            TopicListResponse, UpdatesResponse,
        },
    },
    groups::{
        entities::{GroupReport, Membership, WorkGroup},
        requests::{AddMemberRequest, CreateGroupRequest, UpdateGroupRequest},
        responses::{
            AvailableGroupsResponse, EligibleStudentsResponse, GroupMembersResponse,
            GroupReportsResponse,
        },
    },
    users::{
        entities::{StudentProfile, User},
        requests::{
            CreateUserRequest, UpdateStudentProfileRequest, UpdateUserRequest, UserListQuery,
        },
        responses::{UserDetailResponse, UserListResponse},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// User management.
    // Creates the account and provisions the matching role profile in
    // the same transaction.
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserDetailResponse>;
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // Account plus its role profile
    async fn get_user_detail(&self, id: i64) -> Result<Option<UserDetailResponse>>;
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    async fn update_student_profile(
        &self,
        user_id: i64,
        update: UpdateStudentProfileRequest,
    ) -> Result<Option<StudentProfile>>;
    async fn delete_user(&self, id: i64) -> Result<bool>;
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // Used by startup to decide whether to seed the first admin
    async fn count_users(&self) -> Result<u64>;
    // Student profile for an account, if the account is a student
    async fn get_student_profile_by_user_id(&self, user_id: i64)
    -> Result<Option<StudentProfile>>;

    /// Catalog management.
    async fn create_faculty(&self, faculty: CreateFacultyRequest) -> Result<Faculty>;
    async fn list_faculties(&self) -> Result<FacultyListResponse>;
    async fn create_promotion(&self, promotion: CreatePromotionRequest) -> Result<Promotion>;
    async fn list_promotions(&self, faculty_id: Option<i64>) -> Result<PromotionListResponse>;
    async fn create_course(&self, course: CreateCourseRequest) -> Result<CourseDetailResponse>;
    async fn get_course_detail(&self, course_id: i64) -> Result<Option<CourseDetailResponse>>;
    async fn list_courses(&self, promotion_id: Option<i64>) -> Result<CourseListResponse>;
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<CourseDetailResponse>>;
    async fn delete_course(&self, course_id: i64) -> Result<bool>;

    /// Assignment management.
    async fn create_assignment(
        &self,
        author_id: Option<i64>,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>>;
    async fn get_assignment_detail(&self, id: i64) -> Result<Option<AssignmentDetailResponse>>;
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, id: i64) -> Result<bool>;

    /// Work group management.
    async fn create_group(&self, group: CreateGroupRequest) -> Result<WorkGroup>;
    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<WorkGroup>>;
    // Groups of one assignment with live member counts
    async fn list_groups_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<AvailableGroupsResponse>;
    // Seats a student if the group has room and they are not already a
    // member; both checks run inside one transaction.
    async fn join_group(&self, student_id: i64, group_id: i64) -> Result<Membership>;
    async fn leave_group(&self, student_id: i64, group_id: i64) -> Result<bool>;
    async fn add_group_member(
        &self,
        group_id: i64,
        member: AddMemberRequest,
    ) -> Result<Membership>;
    async fn list_group_members(&self, group_id: i64) -> Result<GroupMembersResponse>;
    // Students of the assignment's promotion not yet in any of its groups
    async fn list_eligible_students(&self, group_id: i64) -> Result<EligibleStudentsResponse>;
    async fn update_group(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<WorkGroup>>;
    async fn delete_group(&self, group_id: i64) -> Result<bool>;
    async fn is_group_member(&self, student_id: i64, group_id: i64) -> Result<bool>;
    // Membership in any group under the assignment; forum precondition
    async fn is_assignment_member(&self, student_id: i64, assignment_id: i64) -> Result<bool>;
    // Report hand-ins; a group may submit several revisions
    async fn submit_group_report(
        &self,
        group_id: i64,
        student_id: i64,
        file_token: &str,
    ) -> Result<GroupReport>;
    async fn list_group_reports(&self, group_id: i64) -> Result<GroupReportsResponse>;

    /// Forum operations.
    async fn create_contribution(
        &self,
        author_id: i64,
        scope: ContributionScope,
        contribution: CreateContributionRequest,
    ) -> Result<Contribution>;
    async fn get_contribution_by_id(&self, id: i64) -> Result<Option<Contribution>>;
    async fn list_contributions(&self, scope: ContributionScope)
    -> Result<ContributionListResponse>;
    async fn get_contribution_thread(&self, id: i64) -> Result<Option<ContributionThreadResponse>>;
    async fn create_comment(
        &self,
        author_id: i64,
        contribution_id: i64,
        content: &str,
    ) -> Result<Comment>;
    // Toggle semantics: no reaction inserts, same kind removes, the
    // other kind switches. Returns the surviving reaction.
    async fn toggle_reaction(
        &self,
        student_id: i64,
        contribution_id: i64,
        kind: ReactionKind,
    ) -> Result<Option<Reaction>>;
    // Everything posted after `since`, plus the full reaction set
    async fn get_updates(
        &self,
        assignment_id: i64,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<UpdatesResponse>;

    /// Discussion topics.
    async fn create_topic(&self, author_id: i64, topic: CreateTopicRequest)
    -> Result<DiscussionTopic>;
    async fn get_topic_by_id(&self, id: i64) -> Result<Option<DiscussionTopic>>;
    async fn list_topics(&self) -> Result<TopicListResponse>;
    // Topic plus its contribution thread
    async fn get_topic_detail(&self, id: i64) -> Result<Option<TopicDetailResponse>>;

    /// File management.
    async fn upload_file(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: &i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File>;
    async fn get_file_by_token(&self, file_token: &str) -> Result<Option<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
