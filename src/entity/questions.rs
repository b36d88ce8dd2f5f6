//! 题目实体
//!
//! 变体专属的计分配置序列化为 JSON 存放在 config 列，
//! 由 models::questions::QuestionData 负责解析。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub assessment_id: i64,
    pub ordinal: i32,
    #[sea_orm(column_type = "Text")]
    pub prompt: String,
    pub is_required: bool,
    pub is_locked: bool,
    #[sea_orm(column_type = "Text", nullable)]
    pub custom_instruction: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub config: String,
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
