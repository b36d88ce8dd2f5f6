//! 结果重算
//!
//! 幂等：从当前分配集与提交的实况推导结果后整体覆盖，
//! 并发重算以最后写入者为准。分配数据缺失时静默降级为空结果，
//! 不向触发方报错。

use std::sync::Arc;
use tracing::warn;

use crate::errors::Result;
use crate::models::results::entities::{MarkEntry, average_score};
use crate::storage::Storage;

/// 重算单个学生的考核结果
///
/// 定位覆盖该学生的分配条目，逐评分人取其对该对象的提交：
/// 无提交的条目保留占位（score 为 None），不计入平均分。
pub async fn recompute_for_student(
    storage: &Arc<dyn Storage>,
    assessment_id: i64,
    student_id: i64,
) -> Result<()> {
    let set = storage.get_assignment_set(assessment_id).await?;

    let Some(entry) = set.entry_for_student(student_id) else {
        // 学生不在分配集内：写入空结果而不是报错
        storage
            .upsert_result(assessment_id, student_id, Vec::new(), 0.0)
            .await?;
        return Ok(());
    };

    let mut entries = Vec::with_capacity(entry.grader_ids.len());
    for &grader_id in &entry.grader_ids {
        let submission = storage
            .find_submission(assessment_id, grader_id, entry.target_id)
            .await?;
        entries.push(match submission {
            Some(sub) => MarkEntry {
                marker_id: grader_id,
                submission_id: Some(sub.id),
                score: Some(sub.effective_score()),
            },
            None => MarkEntry {
                marker_id: grader_id,
                submission_id: None,
                score: None,
            },
        });
    }

    let average = average_score(&entries);
    storage
        .upsert_result(assessment_id, student_id, entries, average)
        .await?;
    Ok(())
}

/// 重算某被评对象全体成员的结果
///
/// 提交写路径（保存/删除/修正分）完成后调用；
/// 对象不在分配集内时为空操作。
pub async fn recompute_for_target(
    storage: &Arc<dyn Storage>,
    assessment_id: i64,
    target_id: i64,
) -> Result<()> {
    let set = storage.get_assignment_set(assessment_id).await?;
    let Some(entry) = set.entries.iter().find(|e| e.target_id == target_id) else {
        return Ok(());
    };

    let member_ids = entry.member_ids.clone();
    for student_id in member_ids {
        if let Err(e) = recompute_for_student(storage, assessment_id, student_id).await {
            // 单个学生重算失败不阻断其余成员，下一次写路径会再触发
            warn!(
                "Result recompute failed for student {} in assessment {}: {}",
                student_id, assessment_id, e
            );
        }
    }
    Ok(())
}
