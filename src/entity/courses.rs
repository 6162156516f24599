//! Course entity

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(unique)]
    pub code: String,
    pub description: Option<String>,
    pub promotion_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::promotions::Entity",
        from = "Column::PromotionId",
        to = "super::promotions::Column::Id"
    )]
    Promotion,
    #[sea_orm(has_many = "super::course_professors::Entity")]
    CourseProfessors,
    #[sea_orm(has_many = "super::assignments::Entity")]
    Assignments,
}

impl Related<super::promotions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Promotion.def()
    }
}

impl Related<super::course_professors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseProfessors.def()
    }
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_course(self) -> crate::models::catalog::entities::Course {
        crate::models::catalog::entities::Course {
            id: self.id,
            title: self.title,
            code: self.code,
            description: self.description,
            promotion_id: self.promotion_id,
        }
    }
}
