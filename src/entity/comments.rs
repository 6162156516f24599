//! Comment entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author_id: i64,
    pub contribution_id: i64,
    pub content: String,
    pub posted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student_profiles::Entity",
        from = "Column::AuthorId",
        to = "super::student_profiles::Column::Id"
    )]
    Author,
    #[sea_orm(
        belongs_to = "super::contributions::Entity",
        from = "Column::ContributionId",
        to = "super::contributions::Column::Id"
    )]
    Contribution,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::contributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contribution.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_comment(self) -> crate::models::forum::entities::Comment {
        use chrono::{DateTime, Utc};

        crate::models::forum::entities::Comment {
            id: self.id,
            author_id: self.author_id,
            contribution_id: self.contribution_id,
            content: self.content,
            posted_at: DateTime::<Utc>::from_timestamp(self.posted_at, 0).unwrap_or_default(),
        }
    }
}
