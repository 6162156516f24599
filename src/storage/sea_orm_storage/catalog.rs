//! Faculty, promotion and course storage operations.

use super::SeaOrmStorage;
use crate::entity::prelude::*;
use crate::errors::{ForumError, Result};
use crate::models::catalog::{
    entities::{Faculty, Promotion},
    requests::{
        CreateCourseRequest, CreateFacultyRequest, CreatePromotionRequest, UpdateCourseRequest,
    },
    responses::{
        CourseDetailResponse, CourseListResponse, FacultyListResponse, PromotionListResponse,
    },
};
use crate::models::users::entities::ProfessorProfile;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

// Codes are unique per catalog table
fn map_code_conflict(e: sea_orm::DbErr, what: &str) -> ForumError {
    let text = e.to_string();
    if text.to_lowercase().contains("unique") {
        ForumError::duplicate(format!("{what} code already in use"))
    } else {
        ForumError::database_operation(format!("Failed to create {what}: {e}"))
    }
}

impl SeaOrmStorage {
    pub async fn create_faculty_impl(&self, req: CreateFacultyRequest) -> Result<Faculty> {
        let model = FacultyActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_code_conflict(e, "faculty"))?;

        Ok(result.into_faculty())
    }

    pub async fn list_faculties_impl(&self) -> Result<FacultyListResponse> {
        let faculties = Faculties::find()
            .order_by_asc(crate::entity::faculties::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list faculties: {e}"))
            })?;

        Ok(FacultyListResponse {
            items: faculties.into_iter().map(|m| m.into_faculty()).collect(),
        })
    }

    pub async fn create_promotion_impl(&self, req: CreatePromotionRequest) -> Result<Promotion> {
        let model = PromotionActiveModel {
            name: Set(req.name),
            code: Set(req.code),
            faculty_id: Set(req.faculty_id),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| map_code_conflict(e, "promotion"))?;

        Ok(result.into_promotion())
    }

    pub async fn list_promotions_impl(
        &self,
        faculty_id: Option<i64>,
    ) -> Result<PromotionListResponse> {
        let mut select = Promotions::find();

        if let Some(faculty_id) = faculty_id {
            select = select.filter(crate::entity::promotions::Column::FacultyId.eq(faculty_id));
        }

        let promotions = select
            .order_by_asc(crate::entity::promotions::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list promotions: {e}"))
            })?;

        Ok(PromotionListResponse {
            items: promotions.into_iter().map(|m| m.into_promotion()).collect(),
        })
    }

    /// Creates the course and its professor associations atomically.
    pub async fn create_course_impl(
        &self,
        req: CreateCourseRequest,
    ) -> Result<CourseDetailResponse> {
        let txn = self.db.begin().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let model = CourseActiveModel {
            title: Set(req.title),
            code: Set(req.code),
            description: Set(req.description),
            promotion_id: Set(req.promotion_id),
            ..Default::default()
        };

        let course = model
            .insert(&txn)
            .await
            .map_err(|e| map_code_conflict(e, "course"))?;

        for professor_id in &req.professor_ids {
            let link = CourseProfessorActiveModel {
                course_id: Set(course.id),
                professor_id: Set(*professor_id),
                ..Default::default()
            };
            link.insert(&txn).await.map_err(|e| {
                ForumError::database_operation(format!(
                    "Failed to associate professor {professor_id}: {e}"
                ))
            })?;
        }

        txn.commit().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to commit course creation: {e}"))
        })?;

        let course_id = course.id;
        let professors = self.load_course_professors(course_id).await?;

        Ok(CourseDetailResponse {
            course: course.into_course(),
            professors,
        })
    }

    async fn load_course_professors(&self, course_id: i64) -> Result<Vec<ProfessorProfile>> {
        let links = CourseProfessors::find()
            .filter(crate::entity::course_professors::Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query course professors: {e}"))
            })?;

        let professor_ids: Vec<i64> = links.iter().map(|l| l.professor_id).collect();
        if professor_ids.is_empty() {
            return Ok(vec![]);
        }

        let professors = ProfessorProfiles::find()
            .filter(crate::entity::professor_profiles::Column::Id.is_in(professor_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query professors: {e}"))
            })?;

        Ok(professors
            .into_iter()
            .map(|m| m.into_professor_profile())
            .collect())
    }

    pub async fn get_course_detail_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<CourseDetailResponse>> {
        let course = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query course: {e}")))?;

        let Some(course) = course else {
            return Ok(None);
        };

        let professors = self.load_course_professors(course_id).await?;

        Ok(Some(CourseDetailResponse {
            course: course.into_course(),
            professors,
        }))
    }

    pub async fn list_courses_impl(&self, promotion_id: Option<i64>) -> Result<CourseListResponse> {
        let mut select = Courses::find();

        if let Some(promotion_id) = promotion_id {
            select = select.filter(crate::entity::courses::Column::PromotionId.eq(promotion_id));
        }

        let courses = select
            .order_by_asc(crate::entity::courses::Column::Title)
            .all(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to list courses: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
        })
    }

    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<CourseDetailResponse>> {
        let existing = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query course: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let txn = self.db.begin().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let mut model = CourseActiveModel {
            id: Set(course_id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(promotion_id) = update.promotion_id {
            model.promotion_id = Set(Some(promotion_id));
        }

        model.update(&txn).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to update course: {e}"))
        })?;

        // Replace the professor set when one was supplied
        if let Some(professor_ids) = update.professor_ids {
            CourseProfessors::delete_many()
                .filter(crate::entity::course_professors::Column::CourseId.eq(course_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    ForumError::database_operation(format!(
                        "Failed to clear course professors: {e}"
                    ))
                })?;

            for professor_id in professor_ids {
                let link = CourseProfessorActiveModel {
                    course_id: Set(course_id),
                    professor_id: Set(professor_id),
                    ..Default::default()
                };
                link.insert(&txn).await.map_err(|e| {
                    ForumError::database_operation(format!(
                        "Failed to associate professor {professor_id}: {e}"
                    ))
                })?;
            }
        }

        txn.commit().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to commit course update: {e}"))
        })?;

        self.get_course_detail_impl(course_id).await
    }

    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to delete course: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
