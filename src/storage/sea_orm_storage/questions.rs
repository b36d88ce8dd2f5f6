//! 题目存储操作

use super::SeaOrmStorage;
use crate::entity::questions::{ActiveModel, Column, Entity as Questions, Model};
use crate::errors::{EngineError, Result};
use crate::models::questions::{
    entities::Question,
    requests::{CreateQuestionRequest, UpdateQuestionRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};

pub(super) fn into_question(m: Model) -> Result<Question> {
    let data = serde_json::from_str(&m.config)
        .map_err(|e| EngineError::serialization(format!("题目配置解析失败: {e}")))?;
    Ok(Question {
        id: m.id,
        assessment_id: m.assessment_id,
        ordinal: m.ordinal,
        prompt: m.prompt,
        is_required: m.is_required,
        is_locked: m.is_locked,
        custom_instruction: m.custom_instruction,
        data,
        created_at: chrono::DateTime::from_timestamp(m.created_at, 0).unwrap_or_default(),
        updated_at: chrono::DateTime::from_timestamp(m.updated_at, 0).unwrap_or_default(),
    })
}

impl SeaOrmStorage {
    /// 创建题目（ordinal 缺省时追加到末尾）
    pub async fn create_question_impl(
        &self,
        assessment_id: i64,
        req: CreateQuestionRequest,
        force_locked: bool,
        force_required: bool,
    ) -> Result<Question> {
        let now = chrono::Utc::now().timestamp();

        let ordinal = match req.ordinal {
            Some(ordinal) => ordinal,
            None => {
                // 查询当前最大序号
                let max_ordinal = Questions::find()
                    .filter(Column::AssessmentId.eq(assessment_id))
                    .select_only()
                    .column_as(Column::Ordinal.max(), "max_ordinal")
                    .into_tuple::<Option<i32>>()
                    .one(&self.db)
                    .await
                    .map_err(|e| {
                        EngineError::database_operation(format!("查询最大序号失败: {e}"))
                    })?
                    .flatten()
                    .unwrap_or(0);
                max_ordinal + 1
            }
        };

        let config = serde_json::to_string(&req.data)
            .map_err(|e| EngineError::serialization(format!("题目配置序列化失败: {e}")))?;

        let model = ActiveModel {
            assessment_id: Set(assessment_id),
            ordinal: Set(ordinal),
            prompt: Set(req.prompt),
            is_required: Set(req.is_required || force_required),
            is_locked: Set(force_locked),
            custom_instruction: Set(req.custom_instruction),
            config: Set(config),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("创建题目失败: {e}")))?;

        into_question(result)
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询题目失败: {e}")))?;

        result.map(into_question).transpose()
    }

    /// 更新题目（锁定检查由服务层在调用前完成）
    pub async fn update_question_impl(
        &self,
        id: i64,
        update: UpdateQuestionRequest,
    ) -> Result<Option<Question>> {
        let existing = Questions::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询题目失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut active: ActiveModel = existing.into();
        if let Some(prompt) = update.prompt {
            active.prompt = Set(prompt);
        }
        if let Some(is_required) = update.is_required {
            active.is_required = Set(is_required);
        }
        if let Some(ordinal) = update.ordinal {
            active.ordinal = Set(ordinal);
        }
        if update.custom_instruction.is_some() {
            active.custom_instruction = Set(update.custom_instruction);
        }
        if let Some(data) = update.data {
            let config = serde_json::to_string(&data)
                .map_err(|e| EngineError::serialization(format!("题目配置序列化失败: {e}")))?;
            active.config = Set(config);
        }
        active.updated_at = Set(chrono::Utc::now().timestamp());

        let result = active
            .update(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("更新题目失败: {e}")))?;

        into_question(result).map(Some)
    }

    /// 删除题目
    pub async fn delete_question_impl(&self, id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出考核的全部题目（按 ordinal 升序）
    pub async fn list_questions_impl(&self, assessment_id: i64) -> Result<Vec<Question>> {
        let results = Questions::find()
            .filter(Column::AssessmentId.eq(assessment_id))
            .order_by_asc(Column::Ordinal)
            .all(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询题目列表失败: {e}")))?;

        results.into_iter().map(into_question).collect()
    }
}
