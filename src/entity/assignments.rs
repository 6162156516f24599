//! Assignment (travail) entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub due_at: i64,
    pub published_at: i64,
    pub course_id: i64,
    pub promotion_id: i64,
    pub author_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(
        belongs_to = "super::promotions::Entity",
        from = "Column::PromotionId",
        to = "super::promotions::Column::Id"
    )]
    Promotion,
    #[sea_orm(
        belongs_to = "super::professor_profiles::Entity",
        from = "Column::AuthorId",
        to = "super::professor_profiles::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::work_groups::Entity")]
    WorkGroups,
    #[sea_orm(has_many = "super::contributions::Entity")]
    Contributions,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::promotions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Promotion.def()
    }
}

impl Related<super::professor_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::work_groups::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkGroups.def()
    }
}

impl Related<super::contributions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contributions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        use chrono::{DateTime, Utc};

        crate::models::assignments::entities::Assignment {
            id: self.id,
            title: self.title,
            description: self.description,
            due_at: DateTime::<Utc>::from_timestamp(self.due_at, 0).unwrap_or_default(),
            published_at: DateTime::<Utc>::from_timestamp(self.published_at, 0).unwrap_or_default(),
            course_id: self.course_id,
            promotion_id: self.promotion_id,
            author_id: self.author_id,
        }
    }
}
