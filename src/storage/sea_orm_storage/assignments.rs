//! 评分分配存储操作
//!
//! 分配集的再生成是整体替换：删除旧集与写入新集在同一事务内，
//! 读者不会观察到半新半旧的分配。

use super::SeaOrmStorage;
use crate::entity::assignment_entries::{ActiveModel, Column, Entity as AssignmentEntries, Model};
use crate::errors::{EngineError, Result};
use crate::models::assignments::entities::{AssessmentAssignmentSet, AssignmentEntry};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};

fn into_entry(m: Model) -> Result<AssignmentEntry> {
    let member_ids = serde_json::from_str(&m.member_ids)
        .map_err(|e| EngineError::serialization(format!("队员列表解析失败: {e}")))?;
    let grader_ids = serde_json::from_str(&m.grader_ids)
        .map_err(|e| EngineError::serialization(format!("评分人列表解析失败: {e}")))?;
    Ok(AssignmentEntry {
        target_id: m.target_id,
        member_ids,
        grader_ids,
    })
}

impl SeaOrmStorage {
    /// 整体替换分配集（全有或全无）
    pub async fn replace_assignment_set_impl(
        &self,
        assessment_id: i64,
        entries: Vec<AssignmentEntry>,
    ) -> Result<AssessmentAssignmentSet> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| EngineError::database_operation(format!("开启事务失败: {e}")))?;

        // 先删除旧集
        AssignmentEntries::delete_many()
            .filter(Column::AssessmentId.eq(assessment_id))
            .exec(&txn)
            .await
            .map_err(|e| EngineError::database_operation(format!("删除旧分配集失败: {e}")))?;

        for entry in &entries {
            let member_ids = serde_json::to_string(&entry.member_ids)
                .map_err(|e| EngineError::serialization(format!("队员列表序列化失败: {e}")))?;
            let grader_ids = serde_json::to_string(&entry.grader_ids)
                .map_err(|e| EngineError::serialization(format!("评分人列表序列化失败: {e}")))?;

            let model = ActiveModel {
                assessment_id: Set(assessment_id),
                target_id: Set(entry.target_id),
                member_ids: Set(member_ids),
                grader_ids: Set(grader_ids),
                created_at: Set(now),
                ..Default::default()
            };
            model
                .insert(&txn)
                .await
                .map_err(|e| EngineError::database_operation(format!("写入分配条目失败: {e}")))?;
        }

        txn.commit()
            .await
            .map_err(|e| EngineError::database_operation(format!("提交事务失败: {e}")))?;

        Ok(AssessmentAssignmentSet {
            assessment_id,
            entries,
        })
    }

    /// 获取分配集（不存在时条目为空）
    pub async fn get_assignment_set_impl(
        &self,
        assessment_id: i64,
    ) -> Result<AssessmentAssignmentSet> {
        let results = AssignmentEntries::find()
            .filter(Column::AssessmentId.eq(assessment_id))
            .order_by_asc(Column::TargetId)
            .all(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询分配集失败: {e}")))?;

        let entries = results
            .into_iter()
            .map(into_entry)
            .collect::<Result<Vec<_>>>()?;

        Ok(AssessmentAssignmentSet {
            assessment_id,
            entries,
        })
    }
}
