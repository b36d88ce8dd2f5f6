//! 考核存储操作

use super::SeaOrmStorage;
use crate::entity::assessments::{ActiveModel, Entity as Assessments, Model};
use crate::entity::questions::{Column as QuestionColumn, Entity as Questions};
use crate::errors::{EngineError, Result};
use crate::models::assessments::{entities::Assessment, requests::CreateAssessmentRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set, TransactionTrait,
};

pub(super) fn into_assessment(m: Model) -> Result<Assessment> {
    let granularity = m
        .granularity
        .parse()
        .map_err(EngineError::serialization)?;
    Ok(Assessment {
        id: m.id,
        course_id: m.course_id,
        title: m.title,
        description: m.description,
        granularity,
        is_released: m.is_released,
        current_release_number: m.current_release_number,
        created_at: chrono::DateTime::from_timestamp(m.created_at, 0).unwrap_or_default(),
        updated_at: chrono::DateTime::from_timestamp(m.updated_at, 0).unwrap_or_default(),
    })
}

impl SeaOrmStorage {
    /// 创建考核
    pub async fn create_assessment_impl(
        &self,
        req: CreateAssessmentRequest,
    ) -> Result<Assessment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(req.course_id),
            title: Set(req.title),
            description: Set(req.description),
            granularity: Set(req.granularity.to_string()),
            is_released: Set(false),
            current_release_number: Set(0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("创建考核失败: {e}")))?;

        into_assessment(result)
    }

    /// 通过 ID 获取考核
    pub async fn get_assessment_by_id_impl(&self, id: i64) -> Result<Option<Assessment>> {
        let result = Assessments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询考核失败: {e}")))?;

        result.map(into_assessment).transpose()
    }

    /// 发布考核
    ///
    /// 单事务完成：置位 is_released、递增发布纪元、锁定全部题目。
    /// 无题目的考核不可发布。
    pub async fn release_assessment_impl(&self, id: i64) -> Result<Assessment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EngineError::database_operation(format!("开启事务失败: {e}")))?;

        let assessment = Assessments::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询考核失败: {e}")))?
            .ok_or_else(|| EngineError::not_found(format!("考核不存在: {id}")))?;

        let question_count = Questions::find()
            .filter(QuestionColumn::AssessmentId.eq(id))
            .count(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询题目数量失败: {e}")))?;

        if question_count == 0 {
            return Err(EngineError::invalid_state(format!(
                "考核 {id} 没有任何题目，无法发布"
            )));
        }

        let release_number = assessment.current_release_number + 1;
        let now = chrono::Utc::now().timestamp();

        let mut active: ActiveModel = assessment.into();
        active.is_released = Set(true);
        active.current_release_number = Set(release_number);
        active.updated_at = Set(now);
        let updated = active
            .update(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("更新考核失败: {e}")))?;

        // 发布即锁定全部题目
        Questions::update_many()
            .col_expr(QuestionColumn::IsLocked, sea_orm::sea_query::Expr::value(true))
            .col_expr(
                QuestionColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(QuestionColumn::AssessmentId.eq(id))
            .exec(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("锁定题目失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EngineError::database_operation(format!("提交事务失败: {e}")))?;

        into_assessment(updated)
    }

    /// 撤回考核
    ///
    /// 仅清除 is_released；题目保持其自身的 is_locked 状态。
    pub async fn recall_assessment_impl(&self, id: i64) -> Result<Assessment> {
        let assessment = Assessments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询考核失败: {e}")))?
            .ok_or_else(|| EngineError::not_found(format!("考核不存在: {id}")))?;

        let mut active: ActiveModel = assessment.into();
        active.is_released = Set(false);
        active.updated_at = Set(chrono::Utc::now().timestamp());
        let updated = active
            .update(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("更新考核失败: {e}")))?;

        into_assessment(updated)
    }
}
