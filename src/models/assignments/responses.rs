use serde::Serialize;
use ts_rs::TS;

use super::entities::AssignmentEntry;

/// 分配集响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentSetResponse {
    pub assessment_id: i64,
    pub entries: Vec<AssignmentEntry>,
    // 无可用评分人的对象，提示调用方补充分配
    pub uncovered_target_ids: Vec<i64>,
}
