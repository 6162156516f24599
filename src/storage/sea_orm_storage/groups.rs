//! Work group and membership storage operations.

use super::SeaOrmStorage;
use crate::config::AppConfig;
use crate::entity::group_members::Column as MemberColumn;
use crate::entity::group_reports::Column as ReportColumn;
use crate::entity::prelude::*;
use crate::entity::work_groups::Column as GroupColumn;
use crate::errors::{ForumError, Result};
use crate::models::groups::{
    entities::{GroupReport, GroupStatus, Membership, WorkGroup, has_free_seat},
    requests::{AddMemberRequest, CreateGroupRequest, UpdateGroupRequest},
    responses::{
        AvailableGroupsResponse, EligibleStudentsResponse, GroupMembersResponse,
        GroupReportsResponse, GroupWithCount, MemberWithStudent,
    },
};
use crate::models::users::responses::RosterEntry;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    pub async fn create_group_impl(&self, req: CreateGroupRequest) -> Result<WorkGroup> {
        let now = chrono::Utc::now().timestamp();
        let default_capacity = AppConfig::get().forum.default_group_capacity;

        let model = WorkGroupActiveModel {
            name: Set(req.name),
            status: Set(GroupStatus::Open.to_string()),
            capacity: Set(req.capacity.unwrap_or(default_capacity)),
            assignment_id: Set(req.assignment_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            let text = e.to_string();
            // Group names are unique within an assignment
            if text.to_lowercase().contains("unique") {
                ForumError::duplicate("A group with this name already exists for the assignment")
            } else {
                ForumError::database_operation(format!("Failed to create group: {e}"))
            }
        })?;

        Ok(result.into_work_group())
    }

    pub async fn get_group_by_id_impl(&self, group_id: i64) -> Result<Option<WorkGroup>> {
        let result = WorkGroups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query group: {e}")))?;

        Ok(result.map(|m| m.into_work_group()))
    }

    pub async fn list_groups_for_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<AvailableGroupsResponse> {
        let groups = WorkGroups::find()
            .filter(GroupColumn::AssignmentId.eq(assignment_id))
            .order_by_asc(GroupColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to list groups: {e}")))?;

        let mut items = Vec::with_capacity(groups.len());
        for group in groups {
            let member_count = GroupMembers::find()
                .filter(MemberColumn::GroupId.eq(group.id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    ForumError::database_operation(format!("Failed to count members: {e}"))
                })? as i64;

            items.push(GroupWithCount {
                group: group.into_work_group(),
                member_count,
            });
        }

        Ok(AvailableGroupsResponse { items })
    }

    /// Seats a student inside one transaction. The capacity check and
    /// the duplicate check both run against the transaction snapshot;
    /// the unique (student, group) index backstops concurrent joins.
    pub async fn join_group_impl(&self, student_id: i64, group_id: i64) -> Result<Membership> {
        let txn = self.db.begin().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let membership = Self::insert_member_txn(&txn, student_id, group_id, false).await?;

        txn.commit().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to commit group join: {e}"))
        })?;

        Ok(membership)
    }

    async fn insert_member_txn<C: ConnectionTrait>(
        txn: &C,
        student_id: i64,
        group_id: i64,
        is_leader: bool,
    ) -> Result<Membership> {
        let group = WorkGroups::find_by_id(group_id)
            .one(txn)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query group: {e}")))?
            .ok_or_else(|| ForumError::not_found(format!("Group {group_id} does not exist")))?;

        let member_count = GroupMembers::find()
            .filter(MemberColumn::GroupId.eq(group_id))
            .count(txn)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to count members: {e}"))
            })? as i64;

        if !has_free_seat(member_count, group.capacity) {
            return Err(ForumError::capacity(format!(
                "Group '{}' is full ({} seats)",
                group.name, group.capacity
            )));
        }

        let already_member = GroupMembers::find()
            .filter(MemberColumn::StudentId.eq(student_id))
            .filter(MemberColumn::GroupId.eq(group_id))
            .one(txn)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query membership: {e}"))
            })?
            .is_some();

        if already_member {
            return Err(ForumError::duplicate(
                "Student is already a member of this group",
            ));
        }

        let now = chrono::Utc::now().timestamp();
        let model = GroupMemberActiveModel {
            student_id: Set(student_id),
            group_id: Set(group_id),
            is_leader: Set(is_leader),
            joined_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(txn).await.map_err(|e| {
            let text = e.to_string();
            // Concurrent join that slipped past the select hits the
            // unique index instead
            if text.to_lowercase().contains("unique") {
                ForumError::duplicate("Student is already a member of this group")
            } else {
                ForumError::database_operation(format!("Failed to join group: {e}"))
            }
        })?;

        Ok(result.into_membership())
    }

    pub async fn leave_group_impl(&self, student_id: i64, group_id: i64) -> Result<bool> {
        let result = GroupMembers::delete_many()
            .filter(MemberColumn::StudentId.eq(student_id))
            .filter(MemberColumn::GroupId.eq(group_id))
            .exec(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to leave group: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// Professor-driven member add; same seat and duplicate rules as a
    /// student join.
    pub async fn add_group_member_impl(
        &self,
        group_id: i64,
        member: AddMemberRequest,
    ) -> Result<Membership> {
        let txn = self.db.begin().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to open transaction: {e}"))
        })?;

        let membership =
            Self::insert_member_txn(&txn, member.student_id, group_id, member.is_leader).await?;

        txn.commit().await.map_err(|e| {
            ForumError::database_operation(format!("Failed to commit member add: {e}"))
        })?;

        Ok(membership)
    }

    pub async fn list_group_members_impl(&self, group_id: i64) -> Result<GroupMembersResponse> {
        let group = self
            .get_group_by_id_impl(group_id)
            .await?
            .ok_or_else(|| ForumError::not_found(format!("Group {group_id} does not exist")))?;

        let members = GroupMembers::find()
            .filter(MemberColumn::GroupId.eq(group_id))
            .order_by_asc(MemberColumn::JoinedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list members: {e}"))
            })?;

        let mut resolved = Vec::with_capacity(members.len());
        for member in members {
            let student = self.load_roster_entry(member.student_id).await?;
            resolved.push(MemberWithStudent {
                membership: member.into_membership(),
                student,
            });
        }

        Ok(GroupMembersResponse {
            group,
            members: resolved,
        })
    }

    async fn load_roster_entry(&self, student_id: i64) -> Result<RosterEntry> {
        let profile = StudentProfiles::find_by_id(student_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query student profile: {e}"))
            })?
            .ok_or_else(|| {
                ForumError::not_found(format!("Student profile {student_id} does not exist"))
            })?;

        let user = Users::find_by_id(profile.user_id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query user: {e}")))?
            .ok_or_else(|| {
                ForumError::not_found(format!("Account for student {student_id} does not exist"))
            })?;

        Ok(RosterEntry {
            student_id: profile.id,
            matricule: profile.matricule,
            first_name: user.first_name,
            last_name: user.last_name,
            promotion_id: profile.promotion_id,
        })
    }

    /// Students of the assignment's promotion who are not in any of the
    /// assignment's groups yet.
    pub async fn list_eligible_students_impl(
        &self,
        group_id: i64,
    ) -> Result<EligibleStudentsResponse> {
        let group = WorkGroups::find_by_id(group_id)
            .one(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to query group: {e}")))?
            .ok_or_else(|| ForumError::not_found(format!("Group {group_id} does not exist")))?;

        let assignment = Assignments::find_by_id(group.assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query assignment: {e}"))
            })?
            .ok_or_else(|| {
                ForumError::not_found(format!("Assignment {} does not exist", group.assignment_id))
            })?;

        // Students already seated anywhere under this assignment
        let sibling_groups = WorkGroups::find()
            .filter(GroupColumn::AssignmentId.eq(assignment.id))
            .all(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to list groups: {e}")))?;
        let group_ids: Vec<i64> = sibling_groups.iter().map(|g| g.id).collect();

        let seated: Vec<i64> = GroupMembers::find()
            .filter(MemberColumn::GroupId.is_in(group_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list members: {e}"))
            })?
            .into_iter()
            .map(|m| m.student_id)
            .collect();

        let mut select = StudentProfiles::find().filter(
            crate::entity::student_profiles::Column::PromotionId.eq(assignment.promotion_id),
        );
        if !seated.is_empty() {
            select =
                select.filter(crate::entity::student_profiles::Column::Id.is_not_in(seated));
        }

        let profiles = select.all(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to list eligible students: {e}"))
        })?;

        let mut items = Vec::with_capacity(profiles.len());
        for profile in profiles {
            items.push(self.load_roster_entry(profile.id).await?);
        }

        Ok(EligibleStudentsResponse { items })
    }

    pub async fn update_group_impl(
        &self,
        group_id: i64,
        update: UpdateGroupRequest,
    ) -> Result<Option<WorkGroup>> {
        let existing = self.get_group_by_id_impl(group_id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let mut model = WorkGroupActiveModel {
            id: Set(group_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        if let Some(capacity) = update.capacity {
            model.capacity = Set(capacity);
        }

        model.update(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to update group: {e}"))
        })?;

        self.get_group_by_id_impl(group_id).await
    }

    pub async fn delete_group_impl(&self, group_id: i64) -> Result<bool> {
        let result = WorkGroups::delete_by_id(group_id)
            .exec(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to delete group: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn is_group_member_impl(&self, student_id: i64, group_id: i64) -> Result<bool> {
        let found = GroupMembers::find()
            .filter(MemberColumn::StudentId.eq(student_id))
            .filter(MemberColumn::GroupId.eq(group_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query membership: {e}"))
            })?;

        Ok(found.is_some())
    }

    pub async fn submit_group_report_impl(
        &self,
        group_id: i64,
        student_id: i64,
        file_token: &str,
    ) -> Result<GroupReport> {
        let now = chrono::Utc::now().timestamp();

        let model = GroupReportActiveModel {
            group_id: Set(group_id),
            file_token: Set(file_token.to_string()),
            submitted_by: Set(student_id),
            submitted_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            ForumError::database_operation(format!("Failed to record report: {e}"))
        })?;

        Ok(result.into_group_report())
    }

    pub async fn list_group_reports_impl(&self, group_id: i64) -> Result<GroupReportsResponse> {
        let group = self
            .get_group_by_id_impl(group_id)
            .await?
            .ok_or_else(|| ForumError::not_found(format!("Group {group_id} does not exist")))?;

        let reports = GroupReports::find()
            .filter(ReportColumn::GroupId.eq(group_id))
            .order_by_desc(ReportColumn::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to list reports: {e}"))
            })?;

        Ok(GroupReportsResponse {
            group,
            reports: reports.into_iter().map(|r| r.into_group_report()).collect(),
        })
    }

    pub async fn is_assignment_member_impl(
        &self,
        student_id: i64,
        assignment_id: i64,
    ) -> Result<bool> {
        let group_ids: Vec<i64> = WorkGroups::find()
            .filter(GroupColumn::AssignmentId.eq(assignment_id))
            .all(&self.db)
            .await
            .map_err(|e| ForumError::database_operation(format!("Failed to list groups: {e}")))?
            .into_iter()
            .map(|g| g.id)
            .collect();

        if group_ids.is_empty() {
            return Ok(false);
        }

        let found = GroupMembers::find()
            .filter(MemberColumn::StudentId.eq(student_id))
            .filter(MemberColumn::GroupId.is_in(group_ids))
            .one(&self.db)
            .await
            .map_err(|e| {
                ForumError::database_operation(format!("Failed to query membership: {e}"))
            })?;

        Ok(found.is_some())
    }
}
