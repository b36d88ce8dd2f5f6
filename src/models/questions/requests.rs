use serde::Deserialize;
use ts_rs::TS;

use super::entities::QuestionData;

// 创建题目请求
//
// 变体负载通过 type 标签内联在请求体中；
// 系统保留变体会忽略 is_required 并强制锁定。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct CreateQuestionRequest {
    pub prompt: String,
    #[serde(default)]
    pub is_required: bool,
    pub custom_instruction: Option<String>,
    // 不填时追加到末尾
    pub ordinal: Option<i32>,
    #[serde(flatten)]
    #[ts(flatten)]
    pub data: QuestionData,
}

// 更新题目请求
//
// data 为整体替换：部分修改计分配置容易破坏不变量，
// 所以不支持字段级 patch。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/question.ts")]
pub struct UpdateQuestionRequest {
    pub prompt: Option<String>,
    pub is_required: Option<bool>,
    pub custom_instruction: Option<String>,
    pub ordinal: Option<i32>,
    // Option 字段不能用 ts(flatten)，前端类型手动对齐
    #[serde(flatten)]
    #[ts(skip)]
    pub data: Option<QuestionData>,
}
