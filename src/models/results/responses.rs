use serde::Serialize;
use ts_rs::TS;

use super::entities::AssessmentResult;
use crate::models::common::PaginationInfo;

/// 考核结果列表响应（分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/result.ts")]
pub struct ResultListResponse {
    pub items: Vec<AssessmentResult>,
    pub pagination: PaginationInfo,
}
