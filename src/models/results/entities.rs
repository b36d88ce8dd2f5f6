//! 考核结果模型
//!
//! 每个学生在每次考核下恰有一条结果，team 粒度下继承所在队伍的提交。

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 单个评分人的贡献
///
/// 评分人尚未提交时 submission_id 与 score 均为 None，
/// 该条目不计入平均分分母。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct MarkEntry {
    pub marker_id: i64,
    pub submission_id: Option<i64>,
    // 有提交时为 adjusted_score ?? score
    pub score: Option<f64>,
}

/// 考核结果业务实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct AssessmentResult {
    pub assessment_id: i64,
    pub student_id: i64,
    pub entries: Vec<MarkEntry>,
    pub average_score: f64,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 平均分：只统计已有提交的条目，一个都没有时为 0
pub fn average_score(entries: &[MarkEntry]) -> f64 {
    let present: Vec<f64> = entries.iter().filter_map(|e| e.score).collect();
    if present.is_empty() {
        0.0
    } else {
        present.iter().sum::<f64>() / present.len() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_prefers_adjusted_and_skips_missing() {
        // [{score:5}, {submission:null}, {adjusted:8, score:3}] => (5 + 8) / 2 = 6.5
        let entries = vec![
            MarkEntry {
                marker_id: 1,
                submission_id: Some(11),
                score: Some(5.0),
            },
            MarkEntry {
                marker_id: 2,
                submission_id: None,
                score: None,
            },
            MarkEntry {
                marker_id: 3,
                submission_id: Some(13),
                score: Some(8.0),
            },
        ];
        assert_eq!(average_score(&entries), 6.5);
    }

    #[test]
    fn test_average_empty_is_zero() {
        assert_eq!(average_score(&[]), 0.0);
        let entries = vec![MarkEntry {
            marker_id: 1,
            submission_id: None,
            score: None,
        }];
        assert_eq!(average_score(&entries), 0.0);
    }
}
