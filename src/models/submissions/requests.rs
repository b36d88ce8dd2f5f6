use serde::Deserialize;
use ts_rs::TS;

use crate::models::answers::entities::Answer;

// 保存提交请求（创建或整体覆盖草稿）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SaveSubmissionRequest {
    pub assessment_id: i64,
    pub target_id: i64,
    pub answers: Vec<Answer>,
    // false 即定稿，此后不可再通过保存路径修改
    pub is_draft: bool,
}

// 修正分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct AdjustScoreRequest {
    pub adjusted_score: f64,
}
