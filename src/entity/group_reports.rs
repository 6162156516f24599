//! Group report entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "group_reports")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub group_id: i64,
    pub file_token: String,
    pub submitted_by: i64,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::work_groups::Entity",
        from = "Column::GroupId",
        to = "super::work_groups::Column::Id"
    )]
    Group,
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::SubmittedBy",
        to = "super::student_profiles::Column::Id"
    )]
    Submitter,
}

impl Related<super::work_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submitter.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_group_report(self) -> crate::models::groups::entities::GroupReport {
        use chrono::{DateTime, Utc};

        crate::models::groups::entities::GroupReport {
            id: self.id,
            group_id: self.group_id,
            file_token: self.file_token,
            submitted_by: self.submitted_by,
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
        }
    }
}
