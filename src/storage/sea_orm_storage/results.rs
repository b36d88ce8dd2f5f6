//! 考核结果存储操作

use super::SeaOrmStorage;
use crate::entity::assessment_results::{ActiveModel, Column, Entity as AssessmentResults, Model};
use crate::errors::{EngineError, Result};
use crate::models::common::{PaginationInfo, PaginationQuery};
use crate::models::results::entities::{AssessmentResult, MarkEntry};
use crate::models::results::responses::ResultListResponse;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

fn into_result(m: Model) -> Result<AssessmentResult> {
    let entries = serde_json::from_str(&m.entries)
        .map_err(|e| EngineError::serialization(format!("结果条目解析失败: {e}")))?;
    Ok(AssessmentResult {
        assessment_id: m.assessment_id,
        student_id: m.student_id,
        entries,
        average_score: m.average_score,
        updated_at: chrono::DateTime::from_timestamp(m.updated_at, 0).unwrap_or_default(),
    })
}

impl SeaOrmStorage {
    /// 写入或更新某学生的结果（每个学生唯一一条，不产生重复）
    pub async fn upsert_result_impl(
        &self,
        assessment_id: i64,
        student_id: i64,
        entries: Vec<MarkEntry>,
        average_score: f64,
    ) -> Result<AssessmentResult> {
        let now = chrono::Utc::now().timestamp();
        let entries_json = serde_json::to_string(&entries)
            .map_err(|e| EngineError::serialization(format!("结果条目序列化失败: {e}")))?;

        let existing = AssessmentResults::find()
            .filter(Column::AssessmentId.eq(assessment_id))
            .filter(Column::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询结果失败: {e}")))?;

        let saved = match existing {
            Some(existing) => {
                let mut active: ActiveModel = existing.into();
                active.entries = Set(entries_json);
                active.average_score = Set(average_score);
                active.updated_at = Set(now);
                active
                    .update(&self.db)
                    .await
                    .map_err(|e| EngineError::database_operation(format!("更新结果失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    assessment_id: Set(assessment_id),
                    student_id: Set(student_id),
                    entries: Set(entries_json),
                    average_score: Set(average_score),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| EngineError::database_operation(format!("创建结果失败: {e}")))?
            }
        };

        into_result(saved)
    }

    /// 列出考核的结果（分页，按学生 ID 升序）
    pub async fn list_results_with_pagination_impl(
        &self,
        assessment_id: i64,
        query: PaginationQuery,
    ) -> Result<ResultListResponse> {
        let page = query.page.max(1) as u64;
        let size = query.size.clamp(1, 100) as u64;

        let select = AssessmentResults::find()
            .filter(Column::AssessmentId.eq(assessment_id))
            .order_by_asc(Column::StudentId);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| EngineError::database_operation(format!("查询结果总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| EngineError::database_operation(format!("查询结果页数失败: {e}")))?;
        let results = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| EngineError::database_operation(format!("查询结果列表失败: {e}")))?;

        Ok(ResultListResponse {
            items: results
                .into_iter()
                .map(into_result)
                .collect::<Result<Vec<_>>>()?,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }
}
