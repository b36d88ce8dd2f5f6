//! 提交存储操作
//!
//! 保存与删除都是以 (assessment_id, grader_id, target_id) 为键的
//! 单事务读改写，配合唯一索引避免并发草稿保存产生重复提交。

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions, Model};
use crate::errors::{EngineError, Result};
use crate::models::submissions::{entities::Submission, requests::SaveSubmissionRequest};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ModelTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

pub(super) fn into_submission(m: Model) -> Result<Submission> {
    let answers = serde_json::from_str(&m.answers)
        .map_err(|e| EngineError::serialization(format!("答案解析失败: {e}")))?;
    Ok(Submission {
        id: m.id,
        assessment_id: m.assessment_id,
        grader_id: m.grader_id,
        target_id: m.target_id,
        answers,
        is_draft: m.is_draft,
        score: m.score,
        adjusted_score: m.adjusted_score,
        submission_release_number: m.submission_release_number,
        created_at: chrono::DateTime::from_timestamp(m.created_at, 0).unwrap_or_default(),
        updated_at: chrono::DateTime::from_timestamp(m.updated_at, 0).unwrap_or_default(),
    })
}

impl SeaOrmStorage {
    /// 保存提交（创建或整体覆盖草稿）
    ///
    /// 不存在则创建；存在且为草稿则覆盖全部答案并重算分数；
    /// 已定稿则拒绝。整个读改写在一个事务内完成。
    pub async fn save_submission_impl(
        &self,
        grader_id: i64,
        req: SaveSubmissionRequest,
        score: f64,
        release_number: i32,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();
        let answers = serde_json::to_string(&req.answers)
            .map_err(|e| EngineError::serialization(format!("答案序列化失败: {e}")))?;

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EngineError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Submissions::find()
            .filter(Column::AssessmentId.eq(req.assessment_id))
            .filter(Column::GraderId.eq(grader_id))
            .filter(Column::TargetId.eq(req.target_id))
            .one(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询提交失败: {e}")))?;

        let saved = match existing {
            None => {
                let model = ActiveModel {
                    assessment_id: Set(req.assessment_id),
                    grader_id: Set(grader_id),
                    target_id: Set(req.target_id),
                    answers: Set(answers),
                    is_draft: Set(req.is_draft),
                    score: Set(score),
                    adjusted_score: Set(None),
                    submission_release_number: Set(release_number),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&txn)
                    .await
                    .map_err(|e| EngineError::database_operation(format!("创建提交失败: {e}")))?
            }
            Some(existing) if existing.is_draft => {
                // 草稿整体覆盖：不合并旧答案
                let mut active: ActiveModel = existing.into();
                active.answers = Set(answers);
                active.is_draft = Set(req.is_draft);
                active.score = Set(score);
                active.submission_release_number = Set(release_number);
                active.updated_at = Set(now);
                active
                    .update(&txn)
                    .await
                    .map_err(|e| EngineError::database_operation(format!("覆盖提交失败: {e}")))?
            }
            Some(existing) => {
                return Err(EngineError::already_finalized(format!(
                    "提交 {} 已定稿，不能通过保存路径修改",
                    existing.id
                )));
            }
        };

        txn.commit()
            .await
            .map_err(|e| EngineError::database_operation(format!("提交事务失败: {e}")))?;

        into_submission(saved)
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(&self, id: i64) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询提交失败: {e}")))?;

        result.map(into_submission).transpose()
    }

    /// 查找某评分人对某对象的提交
    pub async fn find_submission_impl(
        &self,
        assessment_id: i64,
        grader_id: i64,
        target_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssessmentId.eq(assessment_id))
            .filter(Column::GraderId.eq(grader_id))
            .filter(Column::TargetId.eq(target_id))
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询提交失败: {e}")))?;

        result.map(into_submission).transpose()
    }

    /// 列出某评分人在某考核下的全部提交
    pub async fn list_submissions_by_grader_impl(
        &self,
        assessment_id: i64,
        grader_id: i64,
    ) -> Result<Vec<Submission>> {
        let results = Submissions::find()
            .filter(Column::AssessmentId.eq(assessment_id))
            .filter(Column::GraderId.eq(grader_id))
            .order_by_asc(Column::TargetId)
            .all(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询提交列表失败: {e}")))?;

        results.into_iter().map(into_submission).collect()
    }

    /// 删除提交（仅草稿可删）
    pub async fn delete_submission_impl(&self, id: i64) -> Result<Submission> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EngineError::database_operation(format!("开启事务失败: {e}")))?;

        let existing = Submissions::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询提交失败: {e}")))?
            .ok_or_else(|| EngineError::not_found(format!("提交不存在: {id}")))?;

        if !existing.is_draft {
            return Err(EngineError::invalid_state(format!(
                "提交 {id} 已定稿，不能删除"
            )));
        }

        let snapshot = existing.clone();
        existing
            .delete(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("删除提交失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| EngineError::database_operation(format!("提交事务失败: {e}")))?;

        into_submission(snapshot)
    }

    /// 设置修正分（对定稿提交同样有效，不改变提交状态）
    pub async fn adjust_submission_score_impl(
        &self,
        id: i64,
        adjusted_score: f64,
    ) -> Result<Submission> {
        let existing = Submissions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询提交失败: {e}")))?
            .ok_or_else(|| EngineError::not_found(format!("提交不存在: {id}")))?;

        let mut active: ActiveModel = existing.into();
        active.adjusted_score = Set(Some(adjusted_score));
        active.updated_at = Set(chrono::Utc::now().timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("设置修正分失败: {e}")))?;

        into_submission(result)
    }
}
