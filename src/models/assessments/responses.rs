use serde::Serialize;
use ts_rs::TS;

/// 发布/撤回后的考核状态信封
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct ReleaseStateResponse {
    pub is_released: bool,
    pub current_release_number: i32,
}
