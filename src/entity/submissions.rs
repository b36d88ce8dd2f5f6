//! 提交实体
//!
//! answers 列内嵌答案 JSON 数组；逻辑唯一键为
//! (assessment_id, grader_id, target_id)。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assessment_id: i64,
    pub grader_id: i64,
    pub target_id: i64,
    #[sea_orm(column_type = "Text")]
    pub answers: String,
    pub is_draft: bool,
    pub score: f64,
    pub adjusted_score: Option<f64>,
    pub submission_release_number: i32,
    pub created_at: i64,
    pub updated_at: i64,
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
