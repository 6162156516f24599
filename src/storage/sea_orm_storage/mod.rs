//! SeaORM storage implementation.
//!
//! Single database layer supporting SQLite, PostgreSQL and MySQL.

mod assignments;
mod catalog;
mod files;
mod forum;
mod groups;
mod topics;
mod users;

use crate::config::AppConfig;
use crate::errors::{ForumError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| ForumError::database_operation(format!("Database migration failed: {e}")))?;

        info!("SeaORM storage initialized, database: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite connection with WAL and pragma tuning.
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ForumError::database_config(format!("Invalid SQLite URL: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ForumError::database_connection(format!("SQLite connection failed: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Generic connection for PostgreSQL, MySQL and friends.
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ForumError::database_connection(format!("Cannot connect to database: {e}")))
    }

    /// Infers the backend from the URL and normalizes bare file paths.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ForumError::database_config(format!(
                "Cannot infer database type from URL: {url}. Supported: sqlite://, postgres://, mysql://, or a .db/.sqlite file path"
            )))
        }
    }
}

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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Users
    async fn create_user(&self, user: CreateUserRequest) -> Result<UserDetailResponse> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_detail(&self, id: i64) -> Result<Option<UserDetailResponse>> {
        self.get_user_detail_impl(id).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_student_profile(
        &self,
        user_id: i64,
        update: UpdateStudentProfileRequest,
    ) -> Result<Option<StudentProfile>> {
        self.update_student_profile_impl(user_id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn get_student_profile_by_user_id(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>> {
        self.get_student_profile_by_user_id_impl(user_id).await
    }

    // Catalog
    async fn create_faculty(&self, faculty: CreateFacultyRequest) -> Result<Faculty> {
        self.create_faculty_impl(faculty).await
    }

    async fn list_faculties(&self) -> Result<FacultyListResponse> {
        self.list_faculties_impl().await
    }

    async fn create_promotion(&self, promotion: CreatePromotionRequest) -> Result<Promotion> {
        self.create_promotion_impl(promotion).await
    }

    async fn list_promotions(&self, faculty_id: Option<i64>) -> Result<PromotionListResponse> {
        self.list_promotions_impl(faculty_id).await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<CourseDetailResponse> {
        self.create_course_impl(course).await
    }

    async fn get_course_detail(&self, course_id: i64) -> Result<Option<CourseDetailResponse>> {
        self.get_course_detail_impl(course_id).await
    }

    async fn list_courses(&self, promotion_id: Option<i64>) -> Result<CourseListResponse> {
        self.list_courses_impl(promotion_id).await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<CourseDetailResponse>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    // Assignments
    async fn create_assignment(
        &self,
        author_id: Option<i64>,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(author_id, assignment).await
    }

    async fn get_assignment_by_id(&self, id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(id).await
    }

    async fn get_assignment_detail(&self, id: i64) -> Result<Option<AssignmentDetailResponse>> {
        self.get_assignment_detail_impl(id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(id, update).await
    }

    async fn delete_assignment(&self, id: i64) -> Result<bool> {
        self.delete_assignment_impl(id).await
    }

    // Groups
    async fn create_group(&self, group: CreateGroupRequest) -> Result<WorkGroup> {
        self.create_group_impl(group).await
    }

    async fn get_group_by_id(&self, group_id: i64) -> Result<Option<WorkGroup>> {
        self.get_group_by_id_impl(group_id).await
    }

    async fn list_groups_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<AvailableGroupsResponse> {
        self.list_groups_for_assignment_impl(assignment_id).await
    }

    async fn join_group(&self, student_id: i64, group_id: i64) -> Result<Membership> {
        self.join_group_impl(student_id, group_id).await
    }

    async fn leave_group(&self, student_id: i64, group_id: i64) -> Result<bool> {
        self.leave_group_impl(student_id, group_id).await
    }

    async fn add_group_member(
        &self,
        group_id: i64,
        member: AddMemberRequest,
    ) -> Result<Membership> {
        self.add_group_member_impl(group_id, member).await
    }

    async fn list_group_members(&self, group_id: i64) -> Result<GroupMembersResponse> {
        self.list_group_members_impl(group_id).await
    }

    async fn list_eligible_students(&self, group_id: i64) -> Result<EligibleStudentsResponse> {
        self.list_eligible_students_impl(group_id).await
    }

    async fn update_group(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<WorkGroup>> {
        self.update_group_impl(group_id, update).await
    }

    async fn delete_group(&self, group_id: i64) -> Result<bool> {
        self.delete_group_impl(group_id).await
    }

    async fn is_group_member(&self, student_id: i64, group_id: i64) -> Result<bool> {
        self.is_group_member_impl(student_id, group_id).await
    }

    async fn is_assignment_member(&self, student_id: i64, assignment_id: i64) -> Result<bool> {
        self.is_assignment_member_impl(student_id, assignment_id)
            .await
    }

    async fn submit_group_report(
        &self,
        group_id: i64,
        student_id: i64,
        file_token: &str,
    ) -> Result<GroupReport> {
        self.submit_group_report_impl(group_id, student_id, file_token)
            .await
    }

    async fn list_group_reports(&self, group_id: i64) -> Result<GroupReportsResponse> {
        self.list_group_reports_impl(group_id).await
    }

    // Forum
    async fn create_contribution(
        &self,
        author_id: i64,
        scope: ContributionScope,
        contribution: CreateContributionRequest,
    ) -> Result<Contribution> {
        self.create_contribution_impl(author_id, scope, contribution)
            .await
    }

    async fn get_contribution_by_id(&self, id: i64) -> Result<Option<Contribution>> {
        self.get_contribution_by_id_impl(id).await
    }

    async fn list_contributions(
        &self,
        scope: ContributionScope,
    ) -> Result<ContributionListResponse> {
        self.list_contributions_impl(scope).await
    }

    async fn get_contribution_thread(
        &self,
        id: i64,
    ) -> Result<Option<ContributionThreadResponse>> {
        self.get_contribution_thread_impl(id).await
    }

    async fn create_comment(
        &self,
        author_id: i64,
        contribution_id: i64,
        content: &str,
    ) -> Result<Comment> {
        self.create_comment_impl(author_id, contribution_id, content)
            .await
    }

    async fn toggle_reaction(
        &self,
        student_id: i64,
        contribution_id: i64,
        kind: ReactionKind,
    ) -> Result<Option<Reaction>> {
        self.toggle_reaction_impl(student_id, contribution_id, kind)
            .await
    }

    async fn get_updates(
        &self,
        assignment_id: i64,
        since: chrono::DateTime<chrono::Utc>,
    ) -> Result<UpdatesResponse> {
        self.get_updates_impl(assignment_id, since).await
    }

    // Discussion topics
    async fn create_topic(
        &self,
        author_id: i64,
        topic: CreateTopicRequest,
    ) -> Result<DiscussionTopic> {
        self.create_topic_impl(author_id, topic).await
    }

    async fn get_topic_by_id(&self, id: i64) -> Result<Option<DiscussionTopic>> {
        self.get_topic_by_id_impl(id).await
    }

    async fn list_topics(&self) -> Result<TopicListResponse> {
        self.list_topics_impl().await
    }

    async fn get_topic_detail(&self, id: i64) -> Result<Option<TopicDetailResponse>> {
        self.get_topic_detail_impl(id).await
    }

    // Files
    async fn upload_file(
        &self,
        original_name: &str,
        stored_name: &str,
        file_size: &i64,
        file_type: &str,
        user_id: i64,
    ) -> Result<File> {
        self.upload_file_impl(original_name, stored_name, file_size, file_type, user_id)
            .await
    }

    async fn get_file_by_token(&self, file_token: &str) -> Result<Option<File>> {
        self.get_file_by_token_impl(file_token).await
    }
}
