//! 业务数据模型
//!
//! 按领域拆分为 entities / requests / responses 三类文件；
//! common 下是跨领域共享的响应与分页结构。

pub mod common;

pub mod answers;
pub mod assessments;
pub mod assignments;
pub mod questions;
pub mod results;
pub mod submissions;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

/// 应用启动时间，注入 app_data 供运行信息接口使用
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
