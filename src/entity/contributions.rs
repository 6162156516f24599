//! Contribution entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contributions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub author_id: i64,
    pub kind: String,
    pub content: Option<String>,
    pub file_token: Option<String>,
    pub assignment_id: Option<i64>,
    pub topic_id: Option<i64>,
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
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(
        belongs_to = "super::discussion_topics::Entity",
        from = "Column::TopicId",
        to = "super::discussion_topics::Column::Id"
    )]
    Topic,
    #[sea_orm(has_many = "super::comments::Entity")]
    Comments,
    #[sea_orm(has_many = "super::reactions::Entity")]
    Reactions,
}

impl Related<super::student_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::discussion_topics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Topic.def()
    }
}

impl Related<super::comments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Comments.def()
    }
}

impl Related<super::reactions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reactions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_contribution(self) -> crate::models::forum::entities::Contribution {
        use crate::models::forum::entities::{Contribution, ContributionKind};
        use chrono::{DateTime, Utc};

        Contribution {
            id: self.id,
            author_id: self.author_id,
            kind: self
                .kind
                .parse::<ContributionKind>()
                .unwrap_or(ContributionKind::Text),
            content: self.content,
            file_token: self.file_token,
            assignment_id: self.assignment_id,
            topic_id: self.topic_id,
            posted_at: DateTime::<Utc>::from_timestamp(self.posted_at, 0).unwrap_or_default(),
        }
    }
}
