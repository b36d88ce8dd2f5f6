use serde::Serialize;
use ts_rs::TS;

use super::entities::Question;

/// 题目列表响应（按 ordinal 排序，无分页：单个考核题目数量有限）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct QuestionListResponse {
    pub items: Vec<Question>,
}
