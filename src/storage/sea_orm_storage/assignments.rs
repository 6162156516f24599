//! Assignment storage operations.

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column};
use crate::entity::prelude::*;
use crate::errors::{ForumError, Result};
use crate::models::{
    PaginationInfo,
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentDetailResponse, AssignmentListResponse},
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    pub async fn create_assignment_impl(
        &self,
        author_id: Option<i64>,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            title: Set(req.title),
            description: Set(req.description),
            due_at: Set(req.due_at.timestamp()),
            published_at: Set(now),
            course_id: Set(req.course_id),
            promotion_id: Set(req.promotion_id),
            author_id: Set(author_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to create assignment: {e}"))
        })?;

        Ok(result.into_assignment())
    }

    pub async fn get_assignment_by_id_impl(&self, id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query assignment: {e}"))
            })?;

        Ok(result.map(|m| m.into_assignment()))
    }

    pub async fn get_assignment_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<AssignmentDetailResponse>> {
        let Some(assignment) = self.get_assignment_by_id_impl(id).await? else {
            return Ok(None);
        };

        let groups = WorkGroups::find()
            .filter(crate::entity::work_groups::Column::AssignmentId.eq(id))
            .order_by_asc(crate::entity::work_groups::Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query assignment groups: {e}"))
            })?;

        Ok(Some(AssignmentDetailResponse {
            assignment,
            groups: groups.into_iter().map(|m| m.into_work_group()).collect(),
        }))
    }

    pub async fn list_assignments_with_pagination_impl(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find();

        if let Some(promotion_id) = query.promotion_id {
            select = select.filter(Column::PromotionId.eq(promotion_id));
        }

        if let Some(author_id) = query.author_id {
            select = select.filter(Column::AuthorId.eq(author_id));
        }

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::PublishedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to count assignments: {e}"))
        })?;

        let pages = paginator.num_pages().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to count assignment pages: {e}"))
        })?;

        let assignments = paginator.fetch_page(page - 1).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to list assignments: {e}"))
        })?;

        Ok(AssignmentListResponse {
            items: assignments
                .into_iter()
                .map(|m| m.into_assignment())
                .collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    pub async fn update_assignment_impl(
        &self,
        id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = self.get_assignment_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(due_at) = update.due_at {
            model.due_at = Set(due_at.timestamp());
        }

        model.update(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to update assignment: {e}"))
        })?;

        self.get_assignment_by_id_impl(id).await
    }

    pub async fn delete_assignment_impl(&self, id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to delete assignment: {e}"))
            })?;

        Ok(result.rows_affected > 0)
    }
}
