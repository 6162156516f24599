//! Reaction entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "reactions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub contribution_id: i64,
    pub kind: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::StudentId",
        to = "super::student_profiles::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::contributions::Entity",
        from = "Column::ContributionId",
        to = "super::contributions::Column::Id"
    )]
    Contribution,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::contributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contribution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_reaction(self) -> crate::models::forum::entities::Reaction {
        use crate::models::forum::entities::{Reaction, ReactionKind};

        Reaction {
            id: self.id,
            student_id: self.student_id,
            contribution_id: self.contribution_id,
            kind: self
                .kind
                .parse::<ReactionKind>()
                .unwrap_or(ReactionKind::Like),
        }
    }
}
