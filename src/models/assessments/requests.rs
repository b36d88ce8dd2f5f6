use serde::Deserialize;
use ts_rs::TS;

use super::entities::Granularity;

// 创建考核请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct CreateAssessmentRequest {
    pub course_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub granularity: Granularity,
}
