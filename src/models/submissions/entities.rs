use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::answers::entities::Answer;

/// 提交业务实体
///
/// 一个评分人对一个被评对象在一次考核中的作答集合，
/// 逻辑唯一键 (assessment_id, grader_id, target_id)。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assessment_id: i64,
    pub grader_id: i64,
    pub target_id: i64,
    pub answers: Vec<Answer>,
    pub is_draft: bool,
    // 最近一次保存时按题目配置算出的总分
    pub score: f64,
    // 人工修正分，存在时在结果聚合中优先于 score
    pub adjusted_score: Option<f64>,
    // 创建/定稿时所处的发布纪元
    pub submission_release_number: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Submission {
    /// 结果聚合使用的有效分数
    pub fn effective_score(&self) -> f64 {
        self.adjusted_score.unwrap_or(self.score)
    }

    /// 是否在过期纪元下评分（仅用于展示提示，不阻断任何操作）
    pub fn is_outdated(&self, current_release_number: i32) -> bool {
        self.submission_release_number != current_release_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(release: i32, score: f64, adjusted: Option<f64>) -> Submission {
        Submission {
            id: 1,
            assessment_id: 1,
            grader_id: 10,
            target_id: 20,
            answers: vec![],
            is_draft: false,
            score,
            adjusted_score: adjusted,
            submission_release_number: release,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_effective_score_prefers_adjustment() {
        assert_eq!(submission(1, 3.0, Some(8.0)).effective_score(), 8.0);
        assert_eq!(submission(1, 3.0, None).effective_score(), 3.0);
    }

    #[test]
    fn test_outdated_flag() {
        // 发布 -> 提交 -> 撤回 -> 再发布后，旧提交被标记为可能过期
        let old = submission(1, 5.0, None);
        assert!(!old.is_outdated(1));
        assert!(old.is_outdated(2));
    }
}
