use serde::Serialize;
use ts_rs::TS;

use super::entities::Submission;

/// 提交响应，附带过期提示
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionResponse {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    // submission_release_number != 考核当前纪元时为 true，仅作展示提示
    pub is_outdated: bool,
}

/// 必答校验失败时返回的缺失题目清单
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct MissingRequiredResponse {
    pub missing_question_ids: Vec<i64>,
}

/// 当前评分人在某考核下的提交列表
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionResponse>,
}
