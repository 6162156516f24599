//! User and profile storage operations.

use std::collections::HashSet;

use super::SeaOrmStorage;
use crate::config::AppConfig;
use crate::entity::prelude::*;
use crate::entity::student_profiles::Column as StudentProfileColumn;
use crate::entity::users::{ActiveModel, Column};
use crate::errors::{ForumError, Result};
use crate::models::{
    PaginationInfo,
    users::{
        entities::{StudentProfile, User, UserRole, UserStatus},
        requests::{
            CreateUserRequest, UpdateStudentProfileRequest, UpdateUserRequest, UserListQuery,
        },
        responses::{UserDetailResponse, UserListResponse},
    },
};
use crate::utils::escape_like_pattern;
use crate::utils::matricule::generate_unique_matricule;
use chrono::Datelike;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// Creates the account and its role profile atomically. Students get
    /// a freshly generated matricule; professors get an empty profile.
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<UserDetailResponse> {
        let config = AppConfig::get();
        let now = chrono::Utc::now();

        let txn = self.db.begin().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let model = ActiveModel {
            email: Set(req.email),
            password_hash: Set(req.password),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            created_at: Set(now.timestamp()),
            updated_at: Set(now.timestamp()),
            ..Default::default()
        };

        let user = model
            .insert(&txn)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to create user: {e}")))?;

        let mut student_profile = None;
        let mut professor_profile = None;

        match req.role {
            UserRole::Student => {
                let code = &config.forum.matricule_university_code;
                let year = now.year();
                // One query for the year's taken serials; the unique
                // index backstops any race between two registrations.
                let prefix = format!("{:02}/{}/", year.rem_euclid(100), code);
                let taken: HashSet<String> = StudentProfiles::find()
                    .select_only()
                    .column(StudentProfileColumn::Matricule)
                    .filter(StudentProfileColumn::Matricule.starts_with(&prefix))
                    .into_tuple::<String>()
                    .all(&txn)
                    .await
                    .map_err(|e| {
                        ForumError::database_operation(format!(
                            "Failed to query existing matricules: {e}"
                        ))
                    })?
                    .into_iter()
                    .collect();

                let matricule = generate_unique_matricule(code, year, |m| taken.contains(m))
                    .ok_or_else(|| {
                        ForumError::database_operation(
                            "Matricule serial space exhausted for this year",
                        )
                    })?;

                let profile = StudentProfileActiveModel {
                    user_id: Set(user.id),
                    matricule: Set(matricule),
                    promotion_id: Set(None),
                    faculty_id: Set(None),
                    ..Default::default()
                };
                let inserted = profile.insert(&txn).await.map_err(|e| {
                    ForumError::database_operation(format!(
                        "Failed to provision student profile: {e}"
                    ))
                })?;
                student_profile = Some(inserted.into_student_profile());
            }
            UserRole::Professor => {
                let profile = crate::entity::professor_profiles::ActiveModel {
                    user_id: Set(user.id),
                    specialty: Set(String::new()),
                    status: Set("active".to_string()),
                    ..Default::default()
                };
                let inserted = profile.insert(&txn).await.map_err(|e| {
                    ForumError::database_operation(format!(
                        "Failed to provision professor profile: {e}"
                    ))
                })?;
                professor_profile = Some(inserted.into_professor_profile());
            }
            UserRole::Admin => {}
        }

        txn.commit().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to commit user creation: {e}"))
        })?;

        Ok(UserDetailResponse {
            user: user.into_user(),
            student_profile,
            professor_profile,
        })
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_email_impl(&self, email: &str) -> Result<Option<User>> {
        let result = Users::find()
            .filter(Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query user: {e}")))?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_detail_impl(&self, id: i64) -> Result<Option<UserDetailResponse>> {
        let Some(user) = self.get_user_by_id_impl(id).await? else {
            return Ok(None);
        };

        let student_profile = StudentProfiles::find()
            .filter(StudentProfileColumn::UserId.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query student profile: {e}"))
            })?
            .map(|m| m.into_student_profile());

        let professor_profile = ProfessorProfiles::find()
            .filter(crate::entity::professor_profiles::Column::UserId.eq(id))
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query professor profile: {e}"))
            })?
            .map(|m| m.into_professor_profile());

        Ok(Some(UserDetailResponse {
            user,
            student_profile,
            professor_profile,
        }))
    }

    pub async fn list_users_with_pagination_impl(
        &self,
        query: UserListQuery,
    ) -> Result<UserListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Users::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Email.contains(&escaped))
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to count users: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to count user pages: {e}"))
        })?;

        let users = paginator.fetch_page(page - 1).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to list users: {e}"))
        })?;

        Ok(UserListResponse {
            items: users.into_iter().map(|m| m.into_user()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Users::update_many()
            .col_expr(Column::LastLogin, sea_orm::sea_query::Expr::value(now))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to update last login: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }

    pub async fn update_user_impl(
        &self,
        id: i64,
        update: UpdateUserRequest,
    ) -> Result<Option<User>> {
        let existing = self.get_user_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to update user: {e}")))?;

        self.get_user_by_id_impl(id).await
    }

    pub async fn update_student_profile_impl(
        &self,
        user_id: i64,
        update: UpdateStudentProfileRequest,
    ) -> Result<Option<StudentProfile>> {
        let existing = StudentProfiles::find()
            .filter(StudentProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query student profile: {e}"))
            })?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model = StudentProfileActiveModel {
            id: Set(existing.id),
            ..Default::default()
        };

        if let Some(promotion_id) = update.promotion_id {
            model.promotion_id = Set(Some(promotion_id));
        }

        if let Some(faculty_id) = update.faculty_id {
            model.faculty_id = Set(Some(faculty_id));
        }

        let result = model.update(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to update student profile: {e}"))
        })?;

        Ok(Some(result.into_student_profile()))
    }

    pub async fn delete_user_impl(&self, id: i64) -> Result<bool> {
        let result = Users::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to delete user: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn get_student_profile_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<StudentProfile>> {
        let result = StudentProfiles::find()
            .filter(StudentProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query student profile: {e}"))
            })?;

        Ok(result.map(|m| m.into_student_profile()))
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        let count = Users::find()
            .count(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to count users: {e}")))?;

        Ok(count)
    }
}
