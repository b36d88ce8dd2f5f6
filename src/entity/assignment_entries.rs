//! 评分分配实体
//!
//! 一行对应一个被评对象（队伍或个人）；member_ids 与 grader_ids
//! 为 JSON 编码的 i64 数组。某次考核的全部行构成其分配集。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assignment_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assessment_id: i64,
    pub target_id: i64,
    #[sea_orm(column_type = "Text")]
    pub member_ids: String,
    #[sea_orm(column_type = "Text")]
    pub grader_ids: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assessments::Entity",
        from = "Column::AssessmentId",
        to = "super::assessments::Column::Id"
    )]
    Assessment,
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
